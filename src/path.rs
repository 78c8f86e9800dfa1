//! Dispatch of normalized path commands into line segments.
//!
//! The caller is expected to have normalized a path into absolute
//! commands from the set `M L H V Z Q C` (no arcs, no relative or
//! shorthand forms). Straight commands pass through as single
//! segments; curve commands are handed to the [`Flattener`].

use std::fmt;

use crate::geometry::flatten::Flattener;
use crate::geometry::tolerance::Tolerances;
use crate::model::{SegmentSink, TraceCmd, Vec2};

/// Error type for path dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// Command letter outside the normalized set
    Unsupported(char),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Unsupported(c) => {
                write!(f, "path command '{}' not supported", c)
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// Feeds one normalized path command at a time into a flattening
/// session.
///
/// The dispatcher holds no cursor across calls; `dispatch` takes the
/// cursor entering the command and returns the cursor after it, so
/// sequential invocation threads the position through a whole path.
pub struct Dispatcher<S: SegmentSink> {
    flattener: Flattener<S>,
}

impl<S: SegmentSink> Dispatcher<S> {
    pub fn new(sink: S) -> Self {
        Self {
            flattener: Flattener::new(sink),
        }
    }

    pub fn with_tolerances(sink: S, tol: Tolerances) -> Self {
        Self {
            flattener: Flattener::with_tolerances(sink, tol),
        }
    }

    pub fn sink(&self) -> &S {
        self.flattener.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.flattener.sink_mut()
    }

    pub fn into_sink(self) -> S {
        self.flattener.into_sink()
    }

    /// Process one command with argument list `args`, entering at
    /// cursor `cur`. Emits zero or more segments tagged with `index`
    /// and returns the cursor after the command.
    ///
    /// Multi-argument runs are supported for every command that takes
    /// arguments; a ragged trailing argument is ignored. An unknown
    /// command letter fails before emitting anything.
    pub fn dispatch(
        &mut self,
        cmd: char,
        args: &[f32],
        index: u32,
        cur: Vec2,
    ) -> Result<Vec2, DispatchError> {
        let mut cx = cur.x;
        let mut cy = cur.y;
        match cmd {
            'M' => {
                for p in args.chunks_exact(2) {
                    let (x, y) = (p[0], p[1]);
                    self.flattener.emit(
                        Vec2::new(cx, cy),
                        Vec2::new(x, y),
                        index,
                        TraceCmd::Move { x, y },
                    );
                    cx = x;
                    cy = y;
                }
            }
            'L' => {
                for p in args.chunks_exact(2) {
                    let (x, y) = (p[0], p[1]);
                    self.flattener.emit(
                        Vec2::new(cx, cy),
                        Vec2::new(x, y),
                        index,
                        TraceCmd::Line { x, y },
                    );
                    cx = x;
                    cy = y;
                }
            }
            'H' => {
                for &x in args {
                    self.flattener.emit(
                        Vec2::new(cx, cy),
                        Vec2::new(x, cy),
                        index,
                        TraceCmd::Horizontal { x },
                    );
                    cx = x;
                }
            }
            'V' => {
                for &y in args {
                    self.flattener.emit(
                        Vec2::new(cx, cy),
                        Vec2::new(cx, y),
                        index,
                        TraceCmd::Vertical { y },
                    );
                    cy = y;
                }
            }
            'Z' => {
                // Zero-length marker, not a drawable line
                self.flattener.emit(
                    Vec2::new(cx, cy),
                    Vec2::new(cx, cy),
                    index,
                    TraceCmd::Close,
                );
            }
            'Q' => {
                for p in args.chunks_exact(4) {
                    // Degree elevation reusing the quadratic control
                    // point as both cubic controls. Not the standard
                    // two-thirds interpolation; downstream consumers
                    // depend on this exact shape.
                    let (qx, qy, x, y) = (p[0], p[1], p[2], p[3]);
                    self.flattener.flatten(cx, cy, qx, qy, qx, qy, x, y, index);
                    cx = x;
                    cy = y;
                }
            }
            'C' => {
                for p in args.chunks_exact(6) {
                    let (x2, y2, x3, y3, x, y) = (p[0], p[1], p[2], p[3], p[4], p[5]);
                    self.flattener.flatten(cx, cy, x2, y2, x3, y3, x, y, index);
                    cx = x;
                    cy = y;
                }
            }
            other => return Err(DispatchError::Unsupported(other)),
        }
        Ok(Vec2::new(cx, cy))
    }
}
