//! Continuous member - a chain of collinear segments sharing one section
//!
//! A member starts as two nodes and grows as it is split. Splitting never
//! moves the endpoints: `begin()` and `end()` are the same nodes for the
//! member's whole life, and new nodes are inserted strictly between them.
//!
//! Splits are two-phase. `locate_*` works out where the split lands without
//! touching anything, and `apply_split` then commits it. Every public split
//! validates first, so a failed split leaves both the chain and the node
//! registry untouched.

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};
use crate::ids::{MemberId, NodeId, SectionId};
use crate::math::{self, Vec3, COINCIDENCE_TOLERANCE};
use crate::registry::NodeRegistry;

/// Relative slack allowed on split distances before they count as past the end
const LENGTH_SLACK: f64 = 1e-9;

/// Which way a brace is measured along each of the two members it joins
///
/// `first_positive` measures along the first member toward its end node,
/// otherwise toward its begin node; `second_positive` does the same for the
/// member being braced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quadrant {
    pub first_positive: bool,
    pub second_positive: bool,
}

impl Quadrant {
    pub const PP: Self = Self::new(true, true);
    pub const PN: Self = Self::new(true, false);
    pub const NP: Self = Self::new(false, true);
    pub const NN: Self = Self::new(false, false);

    pub const fn new(first_positive: bool, second_positive: bool) -> Self {
        Self {
            first_positive,
            second_positive,
        }
    }

    /// Signed offsets along the first and second member for a brace `rise`
    pub fn offsets(&self, rise: f64) -> (f64, f64) {
        let sign = |positive: bool| if positive { rise } else { -rise };
        (sign(self.first_positive), sign(self.second_positive))
    }
}

/// Where a split lands on a member
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SplitTarget {
    /// The split point is an existing chain node
    Existing(NodeId),
    /// A node at `point` goes in at chain position `index`
    Insert { index: usize, point: Vec3 },
}

/// A chain of collinear nodes, written out as one segment per consecutive pair
///
/// Only the model constructs members, so the chain always holds at least
/// its two endpoints.
#[derive(Debug, Clone)]
pub struct ContinuousMember {
    pub(crate) id: MemberId,
    pub(crate) nodes: Vec<NodeId>,
    pub(crate) section: SectionId,
    /// Rotation about the member's own axis in degrees
    pub rotation_angle: f64,
}

impl ContinuousMember {
    pub(crate) fn new(id: MemberId, section: SectionId, begin: NodeId, end: NodeId) -> Self {
        Self {
            id,
            nodes: vec![begin, end],
            section,
            rotation_angle: 0.0,
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    /// First node of the chain
    pub fn begin(&self) -> NodeId {
        self.nodes[0]
    }

    /// Last node of the chain
    pub fn end(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// All chain nodes from begin to end
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Consecutive node pairs, one per serialized segment
    pub fn segments(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// First node of this chain that also appears in `other`
    pub fn shared_node(&self, other: &ContinuousMember) -> Option<NodeId> {
        self.nodes.iter().copied().find(|n| other.contains(*n))
    }

    /// Total length along the chain
    pub fn length(&self, nodes: &NodeRegistry) -> FrameResult<f64> {
        let mut length = 0.0;
        for (a, b) in self.segments() {
            length += math::distance(&nodes.position(a)?, &nodes.position(b)?);
        }
        Ok(length)
    }

    /// Parametric position and perpendicular offset of (x, y, z) relative to
    /// the line from `begin()` (t = 0) to `end()` (t = 1)
    pub fn distance_to(&self, nodes: &NodeRegistry, x: f64, y: f64, z: f64) -> FrameResult<(f64, f64)> {
        let a = nodes.position(self.begin())?;
        let b = nodes.position(self.end())?;
        math::project_onto_line(&a, &b, &math::point(x, y, z))
    }

    /// Split at `distance` measured along the chain from `begin()`
    pub fn split_at_distance(&mut self, nodes: &mut NodeRegistry, distance: f64) -> FrameResult<NodeId> {
        let target = self.locate_distance(nodes, distance)?;
        Ok(self.apply_split(nodes, target))
    }

    /// Split at a fraction of the chain length
    pub fn split_at_percent(&mut self, nodes: &mut NodeRegistry, percent: f64) -> FrameResult<NodeId> {
        let length = self.length(nodes)?;
        self.split_at_distance(nodes, percent * length)
    }

    /// Split `distance` away from `node`: toward `end()` when positive,
    /// toward `begin()` when negative
    pub fn split_from_node(
        &mut self,
        nodes: &mut NodeRegistry,
        node: NodeId,
        distance: f64,
    ) -> FrameResult<NodeId> {
        let target = self.locate_from_node(nodes, node, distance)?;
        Ok(self.apply_split(nodes, target))
    }

    /// Split where (x, y, z) projects onto the member
    pub fn split_at_point(&mut self, nodes: &mut NodeRegistry, x: f64, y: f64, z: f64) -> FrameResult<NodeId> {
        let target = self.locate_point(nodes, &math::point(x, y, z))?;
        Ok(self.apply_split(nodes, target))
    }

    pub(crate) fn locate_distance(&self, nodes: &NodeRegistry, distance: f64) -> FrameResult<SplitTarget> {
        let length = self.length(nodes)?;
        if !(0.0..=length + LENGTH_SLACK * length.max(1.0)).contains(&distance) {
            return Err(FrameError::SplitOutOfRange { distance, length });
        }

        let mut walked = 0.0;
        let last = self.nodes.len() - 1;
        for (i, (a, b)) in self.segments().enumerate() {
            let pa = nodes.position(a)?;
            let pb = nodes.position(b)?;
            let segment = math::distance(&pa, &pb);

            if distance <= walked + segment || i + 1 == last {
                let t = ((distance - walked) / segment).clamp(0.0, 1.0);
                let point = math::lerp(&pa, &pb, t);
                if math::coincident(&point, &pa) {
                    return Ok(SplitTarget::Existing(a));
                }
                if math::coincident(&point, &pb) {
                    return Ok(SplitTarget::Existing(b));
                }
                return Ok(SplitTarget::Insert { index: i + 1, point });
            }
            walked += segment;
        }

        Err(FrameError::SplitOutOfRange { distance, length })
    }

    pub(crate) fn locate_point(&self, nodes: &NodeRegistry, p: &Vec3) -> FrameResult<SplitTarget> {
        let a = nodes.position(self.begin())?;
        let b = nodes.position(self.end())?;
        let (t, _) = math::project_onto_line(&a, &b, p)?;

        // a point within tolerance of an endpoint still counts as on the span
        let slack = COINCIDENCE_TOLERANCE / math::distance(&a, &b);
        if t < -slack || t > 1.0 + slack {
            return Err(FrameError::OutsideSpan(t));
        }
        let t = t.clamp(0.0, 1.0);

        let projected = math::lerp(&a, &b, t);
        for &node in &self.nodes {
            if math::coincident(&nodes.position(node)?, &projected) {
                return Ok(SplitTarget::Existing(node));
            }
        }

        let length = self.length(nodes)?;
        self.locate_distance(nodes, t * length)
    }

    pub(crate) fn locate_from_node(
        &self,
        nodes: &NodeRegistry,
        node: NodeId,
        distance: f64,
    ) -> FrameResult<SplitTarget> {
        if !self.contains(node) {
            return Err(FrameError::NodeNotInMember {
                node,
                member: self.id,
            });
        }
        if distance == 0.0 {
            return Ok(SplitTarget::Existing(node));
        }

        let toward = if distance > 0.0 {
            if node == self.end() {
                return Err(FrameError::SplitPastEndpoint {
                    node,
                    direction: "positive",
                    endpoint: "end",
                });
            }
            self.end()
        } else {
            if node == self.begin() {
                return Err(FrameError::SplitPastEndpoint {
                    node,
                    direction: "negative",
                    endpoint: "begin",
                });
            }
            self.begin()
        };

        let origin = nodes.position(node)?;
        let direction = math::normalize(&(nodes.position(toward)? - origin))?;
        self.locate_point(nodes, &(origin + direction * distance.abs()))
    }

    pub(crate) fn apply_split(&mut self, nodes: &mut NodeRegistry, target: SplitTarget) -> NodeId {
        match target {
            SplitTarget::Existing(node) => node,
            SplitTarget::Insert { index, point } => {
                let node = nodes.find_or_create(point.x, point.y, point.z);
                if !self.contains(node) {
                    self.nodes.insert(index, node);
                    log::debug!(
                        "split member {} at ({:.3}, {:.3}, {:.3}) -> node {}",
                        self.id,
                        point.x,
                        point.y,
                        point.z,
                        node
                    );
                }
                node
            }
        }
    }
}
