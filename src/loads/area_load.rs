//! Area loads - pressure over a polygon of nodes

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{FrameError, FrameResult};
use crate::ids::NodeId;
use crate::math::Axis;

/// Minimum number of corner nodes in an area load
pub const MIN_AREA_LOAD_NODES: usize = 3;

/// How an area load is distributed onto the members framing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaLoadKind {
    /// Spans in the column direction only
    OneWay,
    /// Spans in both directions
    TwoWay,
}

impl AreaLoadKind {
    fn as_str(&self) -> &'static str {
        match self {
            AreaLoadKind::OneWay => "one_way",
            AreaLoadKind::TwoWay => "two_way",
        }
    }
}

/// A pressure applied over the polygon defined by `nodes` (in winding order)
#[derive(Debug, Clone, PartialEq)]
pub struct AreaLoad {
    pub kind: AreaLoadKind,
    nodes: Vec<NodeId>,
    /// Pressure magnitude, signed along `direction`
    pub magnitude: f64,
    pub direction: Axis,
    /// Load group this load belongs to (e.g. "snow")
    pub load_group: String,
    /// Which member axes receive the load
    pub loaded_member_axis: String,
}

impl AreaLoad {
    /// Create a one-way area load; fails with fewer than three nodes
    pub fn new(nodes: &[NodeId], magnitude: f64, direction: Axis, load_group: &str) -> FrameResult<Self> {
        if nodes.len() < MIN_AREA_LOAD_NODES {
            return Err(FrameError::TooFewAreaLoadNodes(nodes.len()));
        }
        Ok(Self {
            kind: AreaLoadKind::OneWay,
            nodes: nodes.to_vec(),
            magnitude,
            direction,
            load_group: load_group.to_string(),
            loaded_member_axis: "all".to_string(),
        })
    }

    /// Use a two-way distribution instead
    pub fn two_way(mut self) -> Self {
        self.kind = AreaLoadKind::TwoWay;
        self
    }

    /// Corner nodes in winding order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The span direction for one-way loads: the first edge of the polygon
    pub fn column_direction(&self) -> &[NodeId] {
        &self.nodes[..2]
    }
}

/// Ids rendered the way the service expects them: "1,2,3"
fn join_ids(ids: &[NodeId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl Serialize for AreaLoad {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("AreaLoad", 10)?;
        s.serialize_field("type", self.kind.as_str())?;
        s.serialize_field("nodes", &join_ids(&self.nodes))?;
        s.serialize_field("members", &0)?;
        s.serialize_field("mag", &self.magnitude)?;
        s.serialize_field("direction", &self.direction)?;
        s.serialize_field("elevations", &0)?;
        s.serialize_field("mags", &0)?;
        s.serialize_field("column_direction", &join_ids(self.column_direction()))?;
        s.serialize_field("loaded_member_axis", &self.loaded_member_axis)?;
        s.serialize_field("LG", &self.load_group)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId).collect()
    }

    #[test]
    fn test_too_few_nodes() {
        for n in 0..3 {
            let nodes = ids(&[1, 2, 3][..n]);
            assert!(matches!(
                AreaLoad::new(&nodes, -0.06, Axis::Y, "snow"),
                Err(FrameError::TooFewAreaLoadNodes(k)) if k == n
            ));
        }
    }

    #[test]
    fn test_keeps_winding_order() {
        let load = AreaLoad::new(&ids(&[4, 1, 9, 2]), -0.02, Axis::Y, "dead").unwrap();
        assert_eq!(load.nodes(), ids(&[4, 1, 9, 2]).as_slice());
        assert_eq!(load.column_direction(), ids(&[4, 1]).as_slice());
    }

    #[test]
    fn test_area_load_json() {
        let load = AreaLoad::new(&ids(&[3, 10, 12]), -0.06, Axis::Y, "snow").unwrap();
        let json = serde_json::to_value(&load).unwrap();
        assert_eq!(json["type"], "one_way");
        assert_eq!(json["nodes"], "3,10,12");
        assert_eq!(json["column_direction"], "3,10");
        assert_eq!(json["direction"], "Y");
        assert_eq!(json["LG"], "snow");
        assert_eq!(json["mag"], -0.06);
    }
}
