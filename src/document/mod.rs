//! Project document - the structural-analysis service's input format
//!
//! The document is a read-only view over a [`FrameModel`]. Every table is a
//! JSON object keyed by integer id in ascending order. Continuous members are
//! flattened here: each consecutive node pair of a chain becomes one
//! two-node member, numbered sequentially over all chains.

mod settings;
mod suppress;

pub use settings::{Settings, UnitTable, Units};
pub use suppress::{Suppress, Suppression};

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use std::io::Write;

use crate::elements::FIXED_RESTRAINT;
use crate::error::FrameResult;
use crate::ids::{NodeId, SectionId};
use crate::loads::LoadCombinations;
use crate::model::FrameModel;
use crate::registry::NodeRegistry;

/// Schema version of the project format
pub const DATA_VERSION: u32 = 30;

/// Member type tag for every emitted segment
pub const MEMBER_TYPE: &str = "normal_continuous";

/// One two-node member on the wire
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSegment {
    pub node_a: NodeId,
    pub node_b: NodeId,
    pub section: SectionId,
    /// Degrees
    pub rotation_angle: f64,
    pub fixity_a: String,
    pub fixity_b: String,
    /// `[Ax, Ay, Az, Bx, By, Bz]`
    pub offsets: [f64; 6],
}

/// The service reads member offsets as numeric strings
fn numeric_string(value: f64) -> String {
    format!("{}", value)
}

impl Serialize for MemberSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        const OFFSET_KEYS: [&str; 6] = [
            "offset_Ax", "offset_Ay", "offset_Az", "offset_Bx", "offset_By", "offset_Bz",
        ];

        let mut s = serializer.serialize_struct("Member", 14)?;
        s.serialize_field("type", MEMBER_TYPE)?;
        s.serialize_field("cable_length", &Option::<f64>::None)?;
        s.serialize_field("node_A", &self.node_a)?;
        s.serialize_field("node_B", &self.node_b)?;
        s.serialize_field("section_id", &self.section)?;
        s.serialize_field("rotation_angle", &self.rotation_angle)?;
        s.serialize_field("fixity_A", &self.fixity_a)?;
        s.serialize_field("fixity_B", &self.fixity_b)?;
        for (key, offset) in OFFSET_KEYS.iter().zip(self.offsets) {
            s.serialize_field(key, &numeric_string(offset))?;
        }
        s.end()
    }
}

/// Flatten every continuous member into segments, in member-id then chain order
pub fn member_segments(model: &FrameModel) -> Vec<MemberSegment> {
    model
        .members()
        .flat_map(|member| {
            member.segments().map(move |(a, b)| MemberSegment {
                node_a: a,
                node_b: b,
                section: member.section(),
                rotation_angle: member.rotation_angle,
                fixity_a: FIXED_RESTRAINT.to_string(),
                fixity_b: FIXED_RESTRAINT.to_string(),
                offsets: [0.0; 6],
            })
        })
        .collect()
}

/// Dense entity storage rendered as `{"1": .., "2": ..}`
struct IdTable<'a, T>(&'a [T]);

impl<T: Serialize> Serialize for IdTable<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (i, item) in self.0.iter().enumerate() {
            map.serialize_entry(&(i + 1), item)?;
        }
        map.end()
    }
}

struct NodeTable<'a>(&'a NodeRegistry);

impl Serialize for NodeTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, node) in self.0.iter() {
            map.serialize_entry(&id, node)?;
        }
        map.end()
    }
}

/// A table the generators never populate
struct EmptyTable;

impl Serialize for EmptyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_map(Some(0))?.end()
    }
}

/// Borrowed view of a model in the service's project format
pub struct ProjectDocument<'a> {
    model: &'a FrameModel,
    segments: Vec<MemberSegment>,
}

impl<'a> ProjectDocument<'a> {
    pub fn new(model: &'a FrameModel) -> Self {
        Self {
            model,
            segments: member_segments(model),
        }
    }

    /// Flattened members as they will be emitted
    pub fn segments(&self) -> &[MemberSegment] {
        &self.segments
    }

    pub fn load_combinations(&self) -> &LoadCombinations {
        &self.model.load_combinations
    }

    /// Serialize to a JSON string, tab-indented unless `compact`
    pub fn to_json(&self, compact: bool) -> FrameResult<String> {
        let mut out = Vec::new();
        self.write_json(&mut out, compact)?;
        // serde_json only emits UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Write the document as JSON, tab-indented unless `compact`
    pub fn write_json<W: Write>(&self, writer: W, compact: bool) -> FrameResult<()> {
        if compact {
            serde_json::to_writer(writer, self)?;
        } else {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
            let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
            self.serialize(&mut serializer)?;
        }
        Ok(())
    }
}

impl Serialize for ProjectDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let model = self.model;
        let mut s = serializer.serialize_struct("Project", 26)?;
        s.serialize_field("dataVersion", &DATA_VERSION)?;
        s.serialize_field("settings", &model.settings)?;
        s.serialize_field("details", &[(); 0])?;
        s.serialize_field("nodes", &NodeTable(model.nodes()))?;
        s.serialize_field("members", &IdTable(&self.segments))?;
        s.serialize_field("plates", &EmptyTable)?;
        s.serialize_field("meshed_plates", &EmptyTable)?;
        s.serialize_field("sections", &IdTable(model.sections()))?;
        s.serialize_field("materials", &IdTable(model.materials()))?;
        s.serialize_field("supports", &IdTable(model.supports()))?;
        s.serialize_field("settlements", &EmptyTable)?;
        s.serialize_field("groups", &[(); 0])?;
        s.serialize_field("point_loads", &EmptyTable)?;
        s.serialize_field("moments", &EmptyTable)?;
        s.serialize_field("distributed_loads", &EmptyTable)?;
        s.serialize_field("pressures", &EmptyTable)?;
        s.serialize_field("area_loads", &IdTable(model.area_loads()))?;
        s.serialize_field("member_prestress_loads", &EmptyTable)?;
        s.serialize_field("self_weight", &IdTable(model.self_weights()))?;
        s.serialize_field("load_combinations", &model.load_combinations)?;
        s.serialize_field("nodal_masses", &EmptyTable)?;
        s.serialize_field("nodal_masses_conversion_map", &EmptyTable)?;
        s.serialize_field("spectral_loads", &EmptyTable)?;
        s.serialize_field("notional_loads", &EmptyTable)?;
        s.serialize_field("suppress", &model.suppress)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Material;
    use serde_json::Value;

    fn portal() -> FrameModel {
        let mut model = FrameModel::new();
        let pine = model.new_material(Material::red_pine());
        let sec = model
            .new_section_from_library(pine, &["American", "NDS", "Sawn Lumber", "8 x 10"])
            .unwrap();
        let post = model
            .new_continuous_member(sec, (0.0, 0.0, 0.0), (0.0, 10.0, 0.0))
            .unwrap();
        model.split_member_at_distance(post, 4.0).unwrap();
        model
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(numeric_string(0.0), "0");
        assert_eq!(numeric_string(1.5), "1.5");
    }

    #[test]
    fn test_chain_flattens_to_segments() {
        let model = portal();
        let doc = ProjectDocument::new(&model);
        assert_eq!(doc.segments().len(), 2);

        let json: Value = serde_json::from_str(&doc.to_json(true).unwrap()).unwrap();
        let members = json["members"].as_object().unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members["1"]["node_A"], 1);
        assert_eq!(members["1"]["node_B"], 3);
        assert_eq!(members["2"]["node_A"], 3);
        assert_eq!(members["2"]["node_B"], 2);
        assert_eq!(members["1"]["type"], "normal_continuous");
        assert_eq!(members["1"]["offset_Ax"], "0");
        assert!(members["1"]["cable_length"].is_null());
    }

    #[test]
    fn test_top_level_shape() {
        let model = portal();
        let json: Value =
            serde_json::from_str(&ProjectDocument::new(&model).to_json(false).unwrap()).unwrap();

        assert_eq!(json["dataVersion"], 30);
        assert_eq!(json["settings"]["units"], "imperial");
        assert!(json["details"].as_array().unwrap().is_empty());
        assert!(json["plates"].as_object().unwrap().is_empty());
        assert_eq!(json["nodes"]["3"]["y"], 4.0);
        assert_eq!(json["sections"]["1"]["material_id"], 1);
        assert_eq!(json["materials"]["1"]["name"], "Red Pine");
        assert_eq!(json["materials"]["1"]["id"], 1);
        assert_eq!(json["suppress"]["current_case"], "User Defined");
    }

    #[test]
    fn test_pretty_output_uses_tabs() {
        let model = portal();
        let text = ProjectDocument::new(&model).to_json(false).unwrap();
        assert!(text.starts_with("{\n\t\"dataVersion\": 30"));
    }

    #[test]
    fn test_keys_ascend_numerically() {
        let mut model = FrameModel::new();
        let mat = model.new_material(Material::aspen());
        let sec = model.new_rectangular_section(mat, 4.0, 6.0).unwrap();
        for i in 0..11 {
            let x = i as f64;
            model
                .new_continuous_member(sec, (x, 0.0, 0.0), (x, 1.0, 0.0))
                .unwrap();
        }
        let text = ProjectDocument::new(&model).to_json(true).unwrap();
        let pos = |key: &str| text.find(key).unwrap();
        // "10" must follow "9", not "1"
        assert!(pos("\"9\":{\"x\"") < pos("\"10\":{\"x\""));
    }
}
