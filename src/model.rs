use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Symbolic descriptor of an emitted primitive, carried on every
/// segment event so a consumer can rebuild a simplified path from the
/// output stream (see `svg::to_path_data`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "lowercase")]
pub enum TraceCmd {
    Move { x: f32, y: f32 },
    Line { x: f32, y: f32 },
    Horizontal { x: f32 },
    Vertical { y: f32 },
    Close,
}

/// One unit of output: a straight line from `from` to `to`.
///
/// `index` is the caller-supplied datum correlating the segment back to
/// the path command that produced it. `Close` events mark subpath
/// closure and are not drawable lines; they are the only events on a
/// well-formed path expected to have coincident endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub index: u32,
    pub cmd: TraceCmd,
}

/// Receiver for emitted line segments. One sink instance is handed to a
/// `Flattener` or `Dispatcher` at construction and invoked once per
/// segment, strictly in emission order.
pub trait SegmentSink {
    fn emit(&mut self, seg: Segment);
}

impl<F: FnMut(Segment)> SegmentSink for F {
    fn emit(&mut self, seg: Segment) {
        self(seg)
    }
}

/// Sink that buffers every segment, for tests and batch consumers that
/// post-process a whole path at once.
#[derive(Clone, Debug, Default)]
pub struct SegmentCollector {
    pub segments: Vec<Segment>,
}

impl SegmentSink for SegmentCollector {
    fn emit(&mut self, seg: Segment) {
        self.segments.push(seg);
    }
}
