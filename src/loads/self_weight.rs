//! Self weight of the structure

use serde::{Deserialize, Serialize};

use crate::math::Axis;

/// Load group the analysis service files self weight under
pub const SELF_WEIGHT_GROUP: &str = "SW1";

/// Gravity multipliers applied to the structure's own weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfWeight {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(rename = "LG")]
    pub load_group: String,
}

impl SelfWeight {
    /// Unit gravity pointing down the given vertical axis
    pub fn downward(vertical: Axis, load_group: &str) -> Self {
        let (x, y, z) = match vertical {
            Axis::X => (-1.0, 0.0, 0.0),
            Axis::Y => (0.0, -1.0, 0.0),
            Axis::Z => (0.0, 0.0, -1.0),
        };
        Self {
            x,
            y,
            z,
            load_group: load_group.to_string(),
        }
    }
}

impl Default for SelfWeight {
    fn default() -> Self {
        Self::downward(Axis::Y, SELF_WEIGHT_GROUP)
    }
}
