//! Support conditions

use serde::{Deserialize, Serialize};

use crate::ids::NodeId;

/// Restraint code with every degree of freedom fixed
pub const FIXED_RESTRAINT: &str = "FFFFFF";

/// Restraint code with translations fixed and rotations released
pub const PINNED_RESTRAINT: &str = "FFFRRR";

/// Direction code applying a restraint both ways on every axis
pub const BOTH_DIRECTIONS: &str = "BBBBBB";

/// Support conditions at a node
///
/// Codes are six characters, one per DOF in the order
/// `[DX, DY, DZ, RX, RY, RZ]`. `F` is fixed, `R` released and `S` a spring
/// whose stiffness is taken from the matching `t*`/`r*` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Support {
    pub direction_code: String,
    pub tx: f64,
    pub ty: f64,
    pub tz: f64,
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    /// Restrained node
    pub node: NodeId,
    pub restraint_code: String,
}

impl Support {
    /// Create a support with explicit codes
    pub fn new(node: NodeId, restraint_code: &str) -> Self {
        Self {
            direction_code: BOTH_DIRECTIONS.to_string(),
            tx: 0.0,
            ty: 0.0,
            tz: 0.0,
            rx: 0.0,
            ry: 0.0,
            rz: 0.0,
            node,
            restraint_code: restraint_code.to_string(),
        }
    }

    /// Create a fully fixed support (all DOFs restrained)
    pub fn fixed(node: NodeId) -> Self {
        Self::new(node, FIXED_RESTRAINT)
    }

    /// Create a pinned support (translations restrained, rotations free)
    pub fn pinned(node: NodeId) -> Self {
        Self::new(node, PINNED_RESTRAINT)
    }

    /// Set translational spring stiffnesses
    pub fn with_translation_springs(mut self, tx: f64, ty: f64, tz: f64) -> Self {
        self.tx = tx;
        self.ty = ty;
        self.tz = tz;
        self
    }

    /// Set rotational spring stiffnesses
    pub fn with_rotation_springs(mut self, rx: f64, ry: f64, rz: f64) -> Self {
        self.rx = rx;
        self.ry = ry;
        self.rz = rz;
        self
    }

    /// Count number of fixed DOFs
    pub fn num_restrained(&self) -> usize {
        self.restraint_code.chars().filter(|c| *c == 'F').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_support() {
        let support = Support::fixed(NodeId(1));
        assert_eq!(support.restraint_code, "FFFFFF");
        assert_eq!(support.direction_code, "BBBBBB");
        assert_eq!(support.num_restrained(), 6);
    }

    #[test]
    fn test_pinned_support() {
        let support = Support::pinned(NodeId(4));
        assert_eq!(support.num_restrained(), 3);
        assert_eq!(support.node, NodeId(4));
    }

    #[test]
    fn test_support_wire_shape() {
        let json = serde_json::to_value(Support::fixed(NodeId(2))).unwrap();
        assert_eq!(json["node"], 2);
        assert_eq!(json["tx"], 0.0);
        assert_eq!(json["restraint_code"], "FFFFFF");
    }
}
