//! Rebuild SVG path data from a run of segment events.

use crate::model::{Segment, TraceCmd};

/// Print the symbolic descriptors of `segments` as an SVG path-data
/// string, reproducing the simplified (curve-free) path the segments
/// trace.
pub fn to_path_data(segments: &[Segment]) -> String {
    let mut d = String::new();
    for s in segments {
        if !d.is_empty() {
            d.push(' ');
        }
        match s.cmd {
            TraceCmd::Move { x, y } => d.push_str(&format!("M {} {}", x, y)),
            TraceCmd::Line { x, y } => d.push_str(&format!("L {} {}", x, y)),
            TraceCmd::Horizontal { x } => d.push_str(&format!("H {}", x)),
            TraceCmd::Vertical { y } => d.push_str(&format!("V {}", y)),
            TraceCmd::Close => d.push('Z'),
        }
    }
    d
}
