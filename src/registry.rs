//! Node registry - deduplicated point storage
//!
//! Nodes are identified by position: asking for a node within
//! [`COINCIDENCE_TOLERANCE`] of an existing one returns the existing id.
//! Lookups go through a hash grid whose cells are one tolerance wide, so a
//! coincident node is always in the query cell or one of its 26 neighbours.
//! When several stored nodes match, the lowest id (first inserted) wins.

use std::collections::HashMap;

use crate::elements::Node;
use crate::error::{FrameError, FrameResult};
use crate::ids::NodeId;
use crate::math::{self, Vec3, COINCIDENCE_TOLERANCE};

type GridCell = (i64, i64, i64);

/// Cell holding `p`; coordinates past the `i64` range share the edge cell
fn cell_of(p: &Vec3) -> GridCell {
    (
        (p.x / COINCIDENCE_TOLERANCE).floor() as i64,
        (p.y / COINCIDENCE_TOLERANCE).floor() as i64,
        (p.z / COINCIDENCE_TOLERANCE).floor() as i64,
    )
}

/// Deduplicating node storage with stable ids
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    grid: HashMap<GridCell, Vec<NodeId>>,
    /// Nodes with a NaN or infinite coordinate, matched exactly
    non_finite: Vec<NodeId>,
}

/// NaN matches NaN so a non-finite point still dedupes to one node
fn same_non_finite(a: &Vec3, b: &Vec3) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(u, v)| u == v || (u.is_nan() && v.is_nan()))
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node at (x, y, z), creating it if no coincident node exists
    pub fn find_or_create(&mut self, x: f64, y: f64, z: f64) -> NodeId {
        let p = math::point(x, y, z);
        if let Some(id) = self.find_coincident_point(&p) {
            return id;
        }

        let id = NodeId::from_index(self.nodes.len());
        let mut node = Node::new(x, y, z);
        node.id = Some(id);
        self.nodes.push(node);
        if p.iter().all(|c| c.is_finite()) {
            self.grid.entry(cell_of(&p)).or_default().push(id);
        } else {
            log::warn!("node {} has a non-finite coordinate ({}, {}, {})", id, x, y, z);
            self.non_finite.push(id);
        }
        log::trace!("node {} at ({:.4}, {:.4}, {:.4})", id, x, y, z);
        id
    }

    /// Existing node coincident with (x, y, z), without inserting
    pub fn find_coincident(&self, x: f64, y: f64, z: f64) -> Option<NodeId> {
        self.find_coincident_point(&math::point(x, y, z))
    }

    pub(crate) fn find_coincident_point(&self, p: &Vec3) -> Option<NodeId> {
        if !p.iter().all(|c| c.is_finite()) {
            return self
                .non_finite
                .iter()
                .copied()
                .find(|&id| self.get(id).is_some_and(|n| same_non_finite(&n.position(), p)));
        }

        let (cx, cy, cz) = cell_of(p);
        let mut found: Option<NodeId> = None;

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(ids) = self.grid.get(&(
                        cx.saturating_add(dx),
                        cy.saturating_add(dy),
                        cz.saturating_add(dz),
                    )) else {
                        continue;
                    };
                    for &id in ids {
                        if found.is_some_and(|best| best <= id) {
                            continue;
                        }
                        if self.get(id).is_some_and(|n| math::coincident(&n.position(), p)) {
                            found = Some(id);
                        }
                    }
                }
            }
        }

        found
    }

    /// Node closest to (x, y, z); ties go to the lowest id.
    ///
    /// Returns `None` only when the registry is empty.
    pub fn find_nearest(&self, x: f64, y: f64, z: f64) -> Option<NodeId> {
        let p = math::point(x, y, z);
        let mut best: Option<(NodeId, f64)> = None;

        for (id, node) in self.iter() {
            let d = (node.position() - p).norm_squared();
            if best.map_or(true, |(_, min)| d < min) {
                best = Some((id, d));
            }
        }

        best.map(|(id, _)| id)
    }

    /// Get a node by id
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        id.index().and_then(|i| self.nodes.get(i))
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        id.index().and_then(|i| self.nodes.get_mut(i))
    }

    /// Position of a node, failing for unknown ids
    pub fn position(&self, id: NodeId) -> FrameResult<Vec3> {
        self.get(id)
            .map(Node::position)
            .ok_or(FrameError::NodeNotFound(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from_index(i), node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_or_create_is_idempotent() {
        let mut registry = NodeRegistry::new();
        let a = registry.find_or_create(1.0, 2.0, 3.0);
        let b = registry.find_or_create(1.0, 2.0, 3.0);
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_dedup_within_tolerance() {
        let mut registry = NodeRegistry::new();
        let a = registry.find_or_create(0.0, 10.0, 0.0);
        let b = registry.find_or_create(0.0004, 9.9997, -0.0002);
        assert_eq!(a, b);

        let c = registry.find_or_create(0.0, 10.01, 0.0);
        assert_ne!(a, c);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_dedup_across_grid_cell_boundary() {
        let mut registry = NodeRegistry::new();
        // straddles the cell edge at x = 0
        let a = registry.find_or_create(-0.0001, 0.0, 0.0);
        let b = registry.find_or_create(0.0001, 0.0, 0.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_far_coordinates_dedupe() {
        let mut registry = NodeRegistry::new();
        let a = registry.find_or_create(1e17, 0.0, 0.0);
        let b = registry.find_or_create(1e17, 0.0, 0.0);
        let c = registry.find_or_create(-1e17, -1e17, 1e17);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(registry.find_or_create(-1e17, -1e17, 1e17), c);
        // distinct points in the saturated edge cell stay distinct
        assert_ne!(registry.find_or_create(2e17, 0.0, 0.0), a);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_non_finite_coordinates_dedupe() {
        let mut registry = NodeRegistry::new();
        let origin = registry.find_or_create(0.0, 0.0, 0.0);
        let nan = registry.find_or_create(f64::NAN, 0.0, 0.0);
        let inf = registry.find_or_create(f64::INFINITY, 0.0, 0.0);
        let neg_inf = registry.find_or_create(f64::NEG_INFINITY, 0.0, 0.0);

        assert_eq!(registry.find_or_create(f64::NAN, 0.0, 0.0), nan);
        assert_eq!(registry.find_or_create(f64::INFINITY, 0.0, 0.0), inf);
        assert_ne!(inf, neg_inf);
        assert_ne!(nan, origin);
        assert_eq!(registry.find_coincident(0.0, 0.0, 0.0), Some(origin));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_ids_are_dense() {
        let mut registry = NodeRegistry::new();
        let ids: Vec<_> = (0..5)
            .map(|i| registry.find_or_create(i as f64, 0.0, 0.0))
            .collect();
        assert_eq!(ids, (1..=5).map(NodeId).collect::<Vec<_>>());
        // duplicate does not consume an id
        registry.find_or_create(2.0, 0.0, 0.0);
        assert_eq!(registry.find_or_create(9.0, 0.0, 0.0), NodeId(6));
    }

    #[test]
    fn test_coincident_prefers_lowest_id() {
        let mut registry = NodeRegistry::new();
        let a = registry.find_or_create(0.0, 0.0, 0.0);
        let b = registry.find_or_create(0.0015, 0.0, 0.0);
        assert_ne!(a, b);
        // within tolerance of both; the first inserted wins
        assert_eq!(registry.find_coincident(0.00075, 0.0, 0.0), Some(a));
    }

    #[test]
    fn test_find_coincident_does_not_insert() {
        let mut registry = NodeRegistry::new();
        registry.find_or_create(0.0, 0.0, 0.0);
        assert_eq!(registry.find_coincident(5.0, 0.0, 0.0), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_nearest() {
        let mut registry = NodeRegistry::new();
        assert_eq!(registry.find_nearest(0.0, 0.0, 0.0), None);

        registry.find_or_create(0.0, 0.0, 0.0);
        let far = registry.find_or_create(10.0, 0.0, 0.0);
        assert_eq!(registry.find_nearest(8.0, 1.0, 0.0), Some(far));
    }

    #[test]
    fn test_find_nearest_tie_break() {
        let mut registry = NodeRegistry::new();
        let left = registry.find_or_create(-1.0, 0.0, 0.0);
        registry.find_or_create(1.0, 0.0, 0.0);

        for _ in 0..10 {
            assert_eq!(registry.find_nearest(0.0, 0.0, 0.0), Some(left));
        }
    }

    #[test]
    fn test_position_unknown_node() {
        let registry = NodeRegistry::new();
        assert!(matches!(
            registry.position(NodeId(1)),
            Err(FrameError::NodeNotFound(NodeId(1)))
        ));
        assert!(registry.get(NodeId(0)).is_none());
    }
}
