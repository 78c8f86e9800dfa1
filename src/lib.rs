pub mod model;
pub mod geometry {
    pub mod flatten;
    pub mod math;
    pub mod tolerance;
}
pub mod json;
pub mod path;
pub mod svg;

pub use geometry::flatten::Flattener;
pub use geometry::tolerance::Tolerances;
pub use model::{Segment, SegmentCollector, SegmentSink, TraceCmd, Vec2};
pub use path::{DispatchError, Dispatcher};
