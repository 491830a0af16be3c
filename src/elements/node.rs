//! Node element - a deduplicated point in 3D space

use serde::{Deserialize, Serialize};

use crate::ids::{NodeId, SupportId};
use crate::math::{self, Vec3};

/// A 3D node in the frame model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,

    /// Identity assigned by the registry
    #[serde(skip)]
    pub(crate) id: Option<NodeId>,

    /// Support restraining this node, if any
    #[serde(skip)]
    pub(crate) support: Option<SupportId>,
}

impl Node {
    /// Create a new node at the given coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            id: None,
            support: None,
        }
    }

    /// Registry id; `None` for nodes not yet stored in a model
    pub fn id(&self) -> Option<NodeId> {
        self.id
    }

    /// Support attached to this node
    pub fn support(&self) -> Option<SupportId> {
        self.support
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Position vector
    pub fn position(&self) -> Vec3 {
        math::point(self.x, self.y, self.z)
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        math::distance(&self.position(), &other.position())
    }

    /// True when this node sits at (x, y, z) within the coincidence tolerance
    pub fn colocated(&self, x: f64, y: f64, z: f64) -> bool {
        math::coincident(&self.position(), &math::point(x, y, z))
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(1.0, 2.0, 3.0);
        assert_eq!(node.coords(), [1.0, 2.0, 3.0]);
        assert!(node.id().is_none());
        assert!(node.support().is_none());
    }

    #[test]
    fn test_node_distance() {
        let n1 = Node::new(0.0, 0.0, 0.0);
        let n2 = Node::new(3.0, 4.0, 0.0);
        assert!((n1.distance_to(&n2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_colocated() {
        let node = Node::new(6.0, 10.0, 0.0);
        assert!(node.colocated(6.0, 10.0004, 0.0));
        assert!(!node.colocated(6.0, 10.01, 0.0));
    }
}
