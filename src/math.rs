//! Geometry kernel for the frame builder

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};

pub type Vec3 = Vector3<f64>;

/// Distance below which two points are the same node
pub const COINCIDENCE_TOLERANCE: f64 = 1e-3;

/// Squared coincidence tolerance, compared against squared distances
pub const COINCIDENCE_TOLERANCE_SQ: f64 = COINCIDENCE_TOLERANCE * COINCIDENCE_TOLERANCE;

/// Lengths shorter than this cannot be normalized
const ZERO_LENGTH: f64 = 1e-12;

/// Global coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::x(),
            Axis::Y => Vec3::y(),
            Axis::Z => Vec3::z(),
        }
    }
}

/// Build a point from its coordinates
pub fn point(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Euclidean distance between two points
pub fn distance(a: &Vec3, b: &Vec3) -> f64 {
    (b - a).norm()
}

/// True when the two points are within the coincidence tolerance
pub fn coincident(a: &Vec3, b: &Vec3) -> bool {
    (b - a).norm_squared() < COINCIDENCE_TOLERANCE_SQ
}

/// Unit vector in the direction of `v`
///
/// Fails for zero-length vectors; callers building members from
/// user-supplied coordinates must expect this.
pub fn normalize(v: &Vec3) -> FrameResult<Vec3> {
    let length = v.norm();
    if length < ZERO_LENGTH {
        return Err(FrameError::ZeroLength);
    }
    Ok(v / length)
}

/// Point at parameter `t` on the segment from `a` to `b`
pub fn lerp(a: &Vec3, b: &Vec3, t: f64) -> Vec3 {
    a + (b - a) * t
}

/// Project `p` onto the line through `a` and `b`.
///
/// Returns `(t, offset)` where `t` is 0 at `a` and 1 at `b`, and `offset` is
/// the perpendicular distance from `p` to the line.
pub fn project_onto_line(a: &Vec3, b: &Vec3, p: &Vec3) -> FrameResult<(f64, f64)> {
    let ab = b - a;
    let length_sq = ab.norm_squared();
    if length_sq < ZERO_LENGTH * ZERO_LENGTH {
        return Err(FrameError::ZeroLength);
    }

    let ap = p - a;
    let t = ap.dot(&ab) / length_sq;
    // |ap|^2 - (ap.ab)^2/|ab|^2, clamped against rounding below zero
    let offset_sq = (ap.norm_squared() - ap.dot(&ab).powi(2) / length_sq).max(0.0);
    Ok((t, offset_sq.sqrt()))
}
