// Centralized tuning knobs for adaptive subdivision

use serde::{Deserialize, Serialize};

pub const DEFAULT_APPROXIMATION_SCALE: f32 = 1.0;
pub const DEFAULT_DISTANCE_EPS: f32 = 1e-30;
pub const DEFAULT_COLINEARITY_EPS: f32 = 1e-30;
pub const DEFAULT_ANGLE_TOLERANCE_EPS: f32 = 0.01;
pub const DEFAULT_ANGLE_TOLERANCE: f32 = 0.4;
pub const DEFAULT_RECURSION_LIMIT: u32 = 32;
pub const DEFAULT_CUSP_LIMIT: f32 = 0.0;

/// Tolerance configuration for one flattening session.
///
/// Constructed once and read-only afterwards. Out-of-range values are
/// used as-is; a permissive or restrictive configuration only changes
/// segment density. Expected ranges: `angle_tolerance` in (0, pi],
/// `cusp_limit` in [0, pi) with 0 disabling cusp handling,
/// `recursion_limit >= 1` (a limit of 0 force-terminates at level 0).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Higher is better quality; the distance tolerance is 0.5 / scale.
    pub approximation_scale: f32,
    /// Limit to disregard the curve distance at.
    pub distance_eps: f32,
    /// Limit to disregard colinearity at.
    pub colinearity_eps: f32,
    /// Below this, the angle condition is skipped entirely.
    pub angle_tolerance_eps: f32,
    /// Turning-angle tolerance in radians; higher is better quality.
    pub angle_tolerance: f32,
    /// Hard subdivision recursion limit.
    pub recursion_limit: u32,
    /// Cusp angle limit in radians; 0 = off.
    pub cusp_limit: f32,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            approximation_scale: DEFAULT_APPROXIMATION_SCALE,
            distance_eps: DEFAULT_DISTANCE_EPS,
            colinearity_eps: DEFAULT_COLINEARITY_EPS,
            angle_tolerance_eps: DEFAULT_ANGLE_TOLERANCE_EPS,
            angle_tolerance: DEFAULT_ANGLE_TOLERANCE,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            cusp_limit: DEFAULT_CUSP_LIMIT,
        }
    }
}

impl Tolerances {
    #[inline]
    pub fn distance_tolerance_sq(&self) -> f32 {
        let d = 0.5 / self.approximation_scale;
        d * d
    }
}
