//! Adaptive flattening of cubic Bézier curves.
//!
//! Recursive de Casteljau subdivision with a multi-criterion stopping
//! test: chordal distance catches curves that are nearly straight, the
//! turning-angle condition catches curves that double back despite a
//! small chordal deviation, and an optional cusp limit turns sharp
//! reversals into hard corners instead of refining them forever.

use std::f32::consts::{PI, TAU};

use crate::geometry::math::dist;
use crate::geometry::tolerance::Tolerances;
use crate::model::{Segment, SegmentSink, TraceCmd, Vec2};

/// One flattening session: a sink, a tolerance configuration and the
/// last emitted point.
///
/// The last point exists to correct floating-point drift at the end of
/// top-level subdivision, so every `flatten` call ends exactly at the
/// curve's declared end point. Sessions are independent; flattening
/// two curves concurrently requires two instances.
pub struct Flattener<S: SegmentSink> {
    tol: Tolerances,
    sink: S,
    last: Vec2,
}

impl<S: SegmentSink> Flattener<S> {
    pub fn new(sink: S) -> Self {
        Self::with_tolerances(sink, Tolerances::default())
    }

    pub fn with_tolerances(sink: S, tol: Tolerances) -> Self {
        Self {
            tol,
            sink,
            last: Vec2::new(0.0, 0.0),
        }
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tol
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Last point handed to the sink, if any emission happened yet.
    pub fn last_point(&self) -> Vec2 {
        self.last
    }

    /// Every emission goes through here so the session cursor tracks
    /// the sink exactly, including the dispatcher's straight segments.
    pub(crate) fn emit(&mut self, from: Vec2, to: Vec2, index: u32, cmd: TraceCmd) {
        self.sink.emit(Segment {
            from,
            to,
            index,
            cmd,
        });
        self.last = to;
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, index: u32) {
        self.emit(
            Vec2::new(x1, y1),
            Vec2::new(x2, y2),
            index,
            TraceCmd::Line { x: x2, y: y2 },
        );
    }

    /// Flatten one cubic Bézier curve (P1 start, P2/P3 controls, P4
    /// end) into line segments, invoking the sink once per segment.
    ///
    /// The emitted segments trace the curve from (x1, y1) to exactly
    /// (x4, y4) in order; a final corrective segment is appended when
    /// subdivision stops short of the end point.
    pub fn flatten(
        &mut self,
        x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32, x4: f32, y4: f32,
        index: u32,
    ) {
        self.subdivide(x1, y1, x2, y2, x3, y3, x4, y4, index, 0);

        let Vec2 { x, y } = self.last;
        if x != x4 || y != y4 {
            self.line(x, y, x4, y4, index);
        }
    }

    fn subdivide(
        &mut self,
        x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32, x4: f32, y4: f32,
        index: u32,
        level: u32,
    ) {
        let Tolerances {
            colinearity_eps,
            angle_tolerance_eps,
            angle_tolerance,
            cusp_limit,
            recursion_limit,
            ..
        } = self.tol;
        let dist_tol_sq = self.tol.distance_tolerance_sq();

        // Midpoints of the control polygon, splitting the curve at t=0.5
        let x12 = 0.5 * (x1 + x2); let y12 = 0.5 * (y1 + y2);
        let x23 = 0.5 * (x2 + x3); let y23 = 0.5 * (y2 + y3);
        let x34 = 0.5 * (x3 + x4); let y34 = 0.5 * (y3 + y4);
        let x123 = 0.5 * (x12 + x23); let y123 = 0.5 * (y12 + y23);
        let x234 = 0.5 * (x23 + x34); let y234 = 0.5 * (y23 + y34);
        let x1234 = 0.5 * (x123 + x234); let y1234 = 0.5 * (y123 + y234);

        // Deviation of each control point from the P1-P4 chord
        let dx = x4 - x1;
        let dy = y4 - y1;
        let mut d2 = ((x2 - x4) * dy - (y2 - y4) * dx).abs();
        let mut d3 = ((x3 - x4) * dy - (y3 - y4) * dx).abs();

        let class = (if d2 > colinearity_eps { 2 } else { 0 })
            + (if d3 > colinearity_eps { 1 } else { 0 });
        match class {
            0 => {
                // All colinear, or P1 == P4
                let k = dx * dx + dy * dy;
                if k == 0.0 {
                    d2 = dist(x1, y1, x2, y2);
                    d3 = dist(x4, y4, x3, y3);
                } else {
                    let k = 1.0 / k;
                    let t2 = k * ((x2 - x1) * dx + (y2 - y1) * dy);
                    let t3 = k * ((x3 - x1) * dx + (y3 - y1) * dy);
                    if t2 > 0.0 && t2 < 1.0 && t3 > 0.0 && t3 < 1.0 {
                        // Simple colinear run 1---2---3---4, the two
                        // endpoints are enough
                        self.line(x1, y1, x4, y4, index);
                        return;
                    }
                    d2 = if t2 <= 0.0 {
                        dist(x2, y2, x1, y1)
                    } else if t2 >= 1.0 {
                        dist(x2, y2, x4, y4)
                    } else {
                        dist(x2, y2, x1 + t2 * dx, y1 + t2 * dy)
                    };
                    d3 = if t3 <= 0.0 {
                        dist(x3, y3, x1, y1)
                    } else if t3 >= 1.0 {
                        dist(x3, y3, x4, y4)
                    } else {
                        dist(x3, y3, x1 + t3 * dx, y1 + t3 * dy)
                    };
                }
                if d2 > d3 {
                    if d2 < dist_tol_sq {
                        self.line(x1, y1, x2, y2, index);
                        return;
                    }
                } else if d3 < dist_tol_sq {
                    self.line(x1, y1, x3, y3, index);
                    return;
                }
            }
            1 => {
                // P1, P2, P4 colinear, P3 significant
                if d3 * d3 <= dist_tol_sq * (dx * dx + dy * dy) {
                    if angle_tolerance < angle_tolerance_eps {
                        self.line(x1, y1, x23, y23, index);
                        return;
                    }

                    let mut da1 =
                        ((y4 - y3).atan2(x4 - x3) - (y3 - y2).atan2(x3 - x2)).abs();
                    if da1 >= PI {
                        da1 = TAU - da1;
                    }

                    if da1 < angle_tolerance {
                        self.line(x1, y1, x2, y2, index);
                        self.line(x2, y2, x3, y3, index);
                        return;
                    }

                    if cusp_limit != 0.0 && da1 > PI - cusp_limit {
                        self.line(x1, y1, x3, y3, index);
                        return;
                    }
                }
            }
            2 => {
                // P1, P3, P4 colinear, P2 significant
                if d2 * d2 <= dist_tol_sq * (dx * dx + dy * dy) {
                    if angle_tolerance < angle_tolerance_eps {
                        self.line(x1, y1, x23, y23, index);
                        return;
                    }

                    let mut da1 =
                        ((y3 - y2).atan2(x3 - x2) - (y2 - y1).atan2(x2 - x1)).abs();
                    if da1 >= PI {
                        da1 = TAU - da1;
                    }

                    if da1 < angle_tolerance {
                        self.line(x1, y1, x2, y2, index);
                        self.line(x2, y2, x3, y3, index);
                        return;
                    }

                    if cusp_limit != 0.0 && da1 > PI - cusp_limit {
                        self.line(x1, y1, x2, y2, index);
                        return;
                    }
                }
            }
            _ => {
                // Regular case, neither pair colinear
                if (d2 + d3) * (d2 + d3) <= dist_tol_sq * (dx * dx + dy * dy) {
                    if angle_tolerance < angle_tolerance_eps {
                        self.line(x1, y1, x23, y23, index);
                        return;
                    }

                    // Turning angles between consecutive polygon edges
                    let k = (y3 - y2).atan2(x3 - x2);
                    let mut da1 = (k - (y2 - y1).atan2(x2 - x1)).abs();
                    let mut da2 = ((y4 - y3).atan2(x4 - x3) - k).abs();
                    if da1 >= PI {
                        da1 = TAU - da1;
                    }
                    if da2 >= PI {
                        da2 = TAU - da2;
                    }

                    if da1 + da2 < angle_tolerance {
                        self.line(x1, y1, x23, y23, index);
                        return;
                    }

                    if cusp_limit != 0.0 {
                        if da1 > PI - cusp_limit {
                            self.line(x1, y1, x2, y2, index);
                            return;
                        }
                        if da2 > PI - cusp_limit {
                            self.line(x1, y1, x3, y3, index);
                            return;
                        }
                    }
                }
            }
        }

        if level + 1 >= recursion_limit {
            self.line(x1, y1, x4, y4, index);
            return;
        }

        self.subdivide(x1, y1, x12, y12, x123, y123, x1234, y1234, index, level + 1);
        self.subdivide(x1234, y1234, x234, y234, x34, y34, x4, y4, index, level + 1);
    }
}
