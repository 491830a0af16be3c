//! Frame model - the graph of nodes, members and loads a generator builds

use std::fmt;
use std::io::Write;

use crate::document::{ProjectDocument, Settings, Suppress};
use crate::elements::{
    ContinuousMember, Material, MaterialFile, Node, Quadrant, Section, SplitTarget, Support,
};
use crate::error::{FrameError, FrameResult};
use crate::ids::{AreaLoadId, MaterialId, MemberId, NodeId, SectionId, SelfWeightId, SupportId};
use crate::loads::{AreaLoad, LoadCombinations, SelfWeight, SELF_WEIGHT_GROUP};
use crate::math::{self, Axis, Vec3, COINCIDENCE_TOLERANCE};
use crate::registry::NodeRegistry;

/// Entity counts for a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelSummary {
    pub nodes: usize,
    pub members: usize,
    /// Two-node members after flattening every chain
    pub segments: usize,
    pub sections: usize,
    pub materials: usize,
    pub supports: usize,
    pub area_loads: usize,
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} members ({} segments), {} sections, {} materials, {} supports, {} area loads",
            self.nodes,
            self.members,
            self.segments,
            self.sections,
            self.materials,
            self.supports,
            self.area_loads
        )
    }
}

/// The frame model graph
///
/// Every entity category has its own dense id sequence starting at 1. Ids
/// are never reused and node ids are deduplicated by coordinate.
#[derive(Debug, Clone, Default)]
pub struct FrameModel {
    /// Solver and display settings emitted with the document
    pub settings: Settings,
    /// Load combination table
    pub load_combinations: LoadCombinations,
    /// Suppression views
    pub suppress: Suppress,
    nodes: NodeRegistry,
    members: Vec<ContinuousMember>,
    sections: Vec<Section>,
    materials: Vec<Material>,
    supports: Vec<Support>,
    area_loads: Vec<AreaLoad>,
    self_weights: Vec<SelfWeight>,
}

impl FrameModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model whose material catalog and units come from a library file
    pub fn with_material_file(file: MaterialFile) -> Self {
        let mut model = Self::new();
        model.settings.units = file.units;
        for material in file.materials {
            model.new_material(material);
        }
        model
    }

    // ========================
    // Catalog
    // ========================

    /// Add a material and return its id
    pub fn new_material(&mut self, mut material: Material) -> MaterialId {
        let id = MaterialId::from_index(self.materials.len());
        material.id = id;
        log::debug!("material {} '{}'", id, material.name);
        self.materials.push(material);
        id
    }

    /// Id of the first material with this name
    pub fn material_by_name(&self, name: &str) -> FrameResult<MaterialId> {
        self.materials
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.id)
            .ok_or_else(|| FrameError::MaterialNotFound(name.to_string()))
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        id.index().and_then(|i| self.materials.get(i))
    }

    fn require_material(&self, id: MaterialId) -> FrameResult<&Material> {
        self.material(id)
            .ok_or_else(|| FrameError::MaterialNotFound(id.to_string()))
    }

    /// Add a section resolved by the service's section library
    pub fn new_section_from_library<S: AsRef<str>>(
        &mut self,
        material: MaterialId,
        path: &[S],
    ) -> FrameResult<SectionId> {
        self.require_material(material)?;
        if path.is_empty() {
            return Err(FrameError::InvalidInput("empty section library path".to_string()));
        }
        Ok(self.push_section(Section::library(material, path)))
    }

    /// Add a solid rectangular section with computed properties
    pub fn new_rectangular_section(
        &mut self,
        material: MaterialId,
        breadth: f64,
        depth: f64,
    ) -> FrameResult<SectionId> {
        if breadth <= 0.0 || depth <= 0.0 {
            return Err(FrameError::InvalidInput(format!(
                "rectangular section {}x{} must have positive dimensions",
                breadth, depth
            )));
        }
        let name = self.require_material(material)?.name.clone();
        Ok(self.push_section(Section::rectangular(material, &name, breadth, depth)))
    }

    fn push_section(&mut self, section: Section) -> SectionId {
        let id = SectionId::from_index(self.sections.len());
        self.sections.push(section);
        id
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        id.index().and_then(|i| self.sections.get(i))
    }

    fn require_section(&self, id: SectionId) -> FrameResult<()> {
        self.section(id)
            .map(|_| ())
            .ok_or(FrameError::SectionNotFound(id))
    }

    // ========================
    // Nodes and members
    // ========================

    /// Node at (x, y, z), reusing a coincident node when one exists
    pub fn new_node(&mut self, x: f64, y: f64, z: f64) -> NodeId {
        self.nodes.find_or_create(x, y, z)
    }

    /// Add a member between two points, creating or reusing their nodes
    pub fn new_continuous_member(
        &mut self,
        section: SectionId,
        begin: (f64, f64, f64),
        end: (f64, f64, f64),
    ) -> FrameResult<MemberId> {
        self.require_section(section)?;
        let a = math::point(begin.0, begin.1, begin.2);
        let b = math::point(end.0, end.1, end.2);
        if math::coincident(&a, &b) {
            return Err(match self.nodes.find_coincident_point(&a) {
                Some(node) => FrameError::DegenerateMember(node),
                None => FrameError::ZeroLength,
            });
        }

        let begin = self.nodes.find_or_create(a.x, a.y, a.z);
        let end = self.nodes.find_or_create(b.x, b.y, b.z);
        self.new_continuous_member_between_nodes(section, begin, end)
    }

    /// Add a member between two existing nodes
    pub fn new_continuous_member_between_nodes(
        &mut self,
        section: SectionId,
        begin: NodeId,
        end: NodeId,
    ) -> FrameResult<MemberId> {
        self.require_section(section)?;
        for node in [begin, end] {
            if !self.nodes.contains(node) {
                return Err(FrameError::NodeNotFound(node));
            }
        }
        if begin == end {
            return Err(FrameError::DegenerateMember(begin));
        }

        let id = MemberId::from_index(self.members.len());
        self.members.push(ContinuousMember::new(id, section, begin, end));
        log::debug!("member {} from node {} to node {}", id, begin, end);
        Ok(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn member(&self, id: MemberId) -> Option<&ContinuousMember> {
        id.index().and_then(|i| self.members.get(i))
    }

    fn require_member(&self, id: MemberId) -> FrameResult<&ContinuousMember> {
        self.member(id).ok_or(FrameError::MemberNotFound(id))
    }

    /// Begin and end nodes of a member
    pub fn member_ends(&self, id: MemberId) -> FrameResult<(NodeId, NodeId)> {
        let member = self.require_member(id)?;
        Ok((member.begin(), member.end()))
    }

    /// Length of a member along its chain
    pub fn member_length(&self, id: MemberId) -> FrameResult<f64> {
        self.require_member(id)?.length(&self.nodes)
    }

    // ========================
    // Spatial queries
    // ========================

    /// Closest node to (x, y, z); ties go to the lowest id
    pub fn find_nearest_node(&self, x: f64, y: f64, z: f64) -> Option<NodeId> {
        self.nodes.find_nearest(x, y, z)
    }

    /// Member whose span the point projects onto with the smallest
    /// perpendicular offset; ties go to the lowest id
    pub fn find_nearest_member(&self, x: f64, y: f64, z: f64) -> Option<MemberId> {
        let mut best: Option<(MemberId, f64)> = None;

        for member in &self.members {
            let Some(offset) = self.span_offset(member, x, y, z) else {
                continue;
            };
            if best.map_or(true, |(_, min)| offset < min) {
                best = Some((member.id(), offset));
            }
        }

        best.map(|(id, _)| id)
    }

    /// Perpendicular offset from the member, if the point projects onto its span
    fn span_offset(&self, member: &ContinuousMember, x: f64, y: f64, z: f64) -> Option<f64> {
        let (t, offset) = member.distance_to(&self.nodes, x, y, z).ok()?;
        let length = member.length(&self.nodes).ok()?;
        let slack = COINCIDENCE_TOLERANCE / length;
        (-slack..=1.0 + slack).contains(&t).then_some(offset)
    }

    /// Node at (x, y, z): an existing coincident node, or a new one split
    /// into the nearest member spanning the point
    pub fn find_nearest_member_and_split_at(&mut self, x: f64, y: f64, z: f64) -> FrameResult<NodeId> {
        if let Some(node) = self.nodes.find_coincident(x, y, z) {
            return Ok(node);
        }
        let member = self
            .find_nearest_member(x, y, z)
            .ok_or(FrameError::NoMemberSpansPoint(x, y, z))?;
        self.split_member_at_point(member, x, y, z)
    }

    // ========================
    // Splitting and bracing
    // ========================

    fn member_mut(
        members: &mut [ContinuousMember],
        id: MemberId,
    ) -> FrameResult<&mut ContinuousMember> {
        id.index()
            .and_then(|i| members.get_mut(i))
            .ok_or(FrameError::MemberNotFound(id))
    }

    pub fn split_member_at_distance(&mut self, member: MemberId, distance: f64) -> FrameResult<NodeId> {
        Self::member_mut(&mut self.members, member)?.split_at_distance(&mut self.nodes, distance)
    }

    pub fn split_member_at_percent(&mut self, member: MemberId, percent: f64) -> FrameResult<NodeId> {
        Self::member_mut(&mut self.members, member)?.split_at_percent(&mut self.nodes, percent)
    }

    pub fn split_member_from_node(
        &mut self,
        member: MemberId,
        node: NodeId,
        distance: f64,
    ) -> FrameResult<NodeId> {
        Self::member_mut(&mut self.members, member)?.split_from_node(&mut self.nodes, node, distance)
    }

    pub fn split_member_at_point(&mut self, member: MemberId, x: f64, y: f64, z: f64) -> FrameResult<NodeId> {
        Self::member_mut(&mut self.members, member)?.split_at_point(&mut self.nodes, x, y, z)
    }

    /// Brace `member` against `other` across the node they share
    ///
    /// Each member is split `rise` away from the shared node, in the
    /// directions given by `quadrant`, and a new member with
    /// `brace_section` joins the two split nodes. Both split targets are
    /// resolved before either member changes, so a failure leaves the model
    /// as it was.
    pub fn brace(
        &mut self,
        member: MemberId,
        other: MemberId,
        brace_section: SectionId,
        rise: f64,
        quadrant: Quadrant,
    ) -> FrameResult<MemberId> {
        self.require_section(brace_section)?;
        let first = self.require_member(member)?;
        let second = self.require_member(other)?;
        if member == other {
            return Err(FrameError::NoSharedNode(member, other));
        }
        let shared = first
            .shared_node(second)
            .ok_or(FrameError::NoSharedNode(member, other))?;

        let (first_offset, second_offset) = quadrant.offsets(rise);
        let first_target = first.locate_from_node(&self.nodes, shared, first_offset)?;
        let second_target = second.locate_from_node(&self.nodes, shared, second_offset)?;
        if math::coincident(
            &self.target_point(first_target)?,
            &self.target_point(second_target)?,
        ) {
            return Err(FrameError::DegenerateMember(shared));
        }

        let a = Self::member_mut(&mut self.members, member)?.apply_split(&mut self.nodes, first_target);
        let b = Self::member_mut(&mut self.members, other)?.apply_split(&mut self.nodes, second_target);
        let brace = self.new_continuous_member_between_nodes(brace_section, a, b)?;
        log::debug!(
            "brace {} between member {} and member {} at node {}",
            brace,
            member,
            other,
            shared
        );
        Ok(brace)
    }

    fn target_point(&self, target: SplitTarget) -> FrameResult<Vec3> {
        match target {
            SplitTarget::Existing(node) => self.nodes.position(node),
            SplitTarget::Insert { point, .. } => Ok(point),
        }
    }

    // ========================
    // Supports and loads
    // ========================

    /// Restrain every DOF at `node`
    pub fn fixed_support(&mut self, node: NodeId) -> FrameResult<SupportId> {
        self.add_support(Support::fixed(node))
    }

    /// Attach a support to its node
    ///
    /// A node holds at most one support; asking again returns the existing
    /// support id and leaves it unchanged.
    pub fn add_support(&mut self, support: Support) -> FrameResult<SupportId> {
        let node_id = support.node;
        let next = SupportId::from_index(self.supports.len());
        let node = self
            .nodes
            .get_mut(node_id)
            .ok_or(FrameError::NodeNotFound(node_id))?;

        if let Some(existing) = node.support {
            log::warn!("node {} already has support {}; ignoring new support", node_id, existing);
            return Ok(existing);
        }
        node.support = Some(next);
        self.supports.push(support);
        Ok(next)
    }

    /// Add an area load over the polygon `nodes` (winding order)
    pub fn new_area_load(
        &mut self,
        nodes: &[NodeId],
        magnitude: f64,
        direction: Axis,
        load_group: &str,
    ) -> FrameResult<AreaLoadId> {
        let load = AreaLoad::new(nodes, magnitude, direction, load_group)?;
        if let Some(&missing) = nodes.iter().find(|n| !self.nodes.contains(**n)) {
            return Err(FrameError::NodeNotFound(missing));
        }
        Ok(self.push_area_load(load))
    }

    fn push_area_load(&mut self, load: AreaLoad) -> AreaLoadId {
        let id = AreaLoadId::from_index(self.area_loads.len());
        self.area_loads.push(load);
        id
    }

    /// Gravity on every member, acting down the model's vertical axis
    ///
    /// A model carries one self-weight record; later calls return it.
    pub fn new_self_weight(&mut self) -> SelfWeightId {
        if !self.self_weights.is_empty() {
            log::warn!("self weight already defined; keeping the existing record");
            return SelfWeightId(1);
        }
        self.self_weights
            .push(SelfWeight::downward(self.settings.vertical_axis, SELF_WEIGHT_GROUP));
        SelfWeightId(1)
    }

    // ========================
    // Accessors
    // ========================

    pub fn nodes(&self) -> &NodeRegistry {
        &self.nodes
    }

    /// Members in ascending id order
    pub fn members(&self) -> impl Iterator<Item = &ContinuousMember> {
        self.members.iter()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn supports(&self) -> &[Support] {
        &self.supports
    }

    pub fn area_loads(&self) -> &[AreaLoad] {
        &self.area_loads
    }

    pub fn self_weights(&self) -> &[SelfWeight] {
        &self.self_weights
    }

    /// Entity counts
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            nodes: self.nodes.len(),
            members: self.members.len(),
            segments: self.members.iter().map(|m| m.nodes().len() - 1).sum(),
            sections: self.sections.len(),
            materials: self.materials.len(),
            supports: self.supports.len(),
            area_loads: self.area_loads.len(),
        }
    }

    // ========================
    // Output
    // ========================

    /// View of the model in the analysis service's project format
    pub fn to_document(&self) -> ProjectDocument<'_> {
        ProjectDocument::new(self)
    }

    pub fn to_json(&self, compact: bool) -> FrameResult<String> {
        self.to_document().to_json(compact)
    }

    pub fn write_json<W: Write>(&self, writer: W, compact: bool) -> FrameResult<()> {
        self.to_document().write_json(writer, compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model_with_section() -> (FrameModel, SectionId) {
        let mut model = FrameModel::new();
        let pine = model.new_material(Material::red_pine());
        let sec = model.new_rectangular_section(pine, 8.0, 10.0).unwrap();
        (model, sec)
    }

    /// Two posts at x = ±6 joined by a tie across their tops
    fn portal(model: &mut FrameModel, sec: SectionId) -> (MemberId, MemberId, MemberId) {
        let left = model
            .new_continuous_member(sec, (-6.0, 0.0, 0.0), (-6.0, 10.0, 0.0))
            .unwrap();
        let right = model
            .new_continuous_member(sec, (6.0, 0.0, 0.0), (6.0, 10.0, 0.0))
            .unwrap();
        let tie = model
            .new_continuous_member(sec, (-6.0, 10.0, 0.0), (6.0, 10.0, 0.0))
            .unwrap();
        (left, right, tie)
    }

    #[test]
    fn test_material_ids_start_at_one() {
        let mut model = FrameModel::new();
        let a = model.new_material(Material::red_pine());
        let b = model.new_material(Material::aspen());
        assert_eq!(a, MaterialId(1));
        assert_eq!(b, MaterialId(2));
        assert_eq!(model.material(b).unwrap().id, b);
        assert_eq!(model.material_by_name("Aspen").unwrap(), b);
        assert!(matches!(
            model.material_by_name("Oak"),
            Err(FrameError::MaterialNotFound(_))
        ));
    }

    #[test]
    fn test_section_requires_material() {
        let mut model = FrameModel::new();
        assert!(model.new_rectangular_section(MaterialId(1), 4.0, 4.0).is_err());
        assert!(model
            .new_section_from_library(MaterialId(1), &["American", "NDS"])
            .is_err());
        assert!(model.sections().is_empty());
    }

    #[test]
    fn test_members_share_nodes() {
        let (mut model, sec) = model_with_section();
        let (left, _, tie) = portal(&mut model, sec);

        assert_eq!(model.nodes().len(), 4);
        let top = model.member(left).unwrap().end();
        assert_eq!(model.member(tie).unwrap().begin(), top);
    }

    #[test]
    fn test_member_rejects_bad_input() {
        let (mut model, sec) = model_with_section();

        assert!(matches!(
            model.new_continuous_member(SectionId(9), (0.0, 0.0, 0.0), (1.0, 0.0, 0.0)),
            Err(FrameError::SectionNotFound(_))
        ));
        assert!(matches!(
            model.new_continuous_member(sec, (1.0, 1.0, 1.0), (1.0, 1.0, 1.0)),
            Err(FrameError::ZeroLength)
        ));
        let n = model.new_node(0.0, 0.0, 0.0);
        assert!(matches!(
            model.new_continuous_member_between_nodes(sec, n, n),
            Err(FrameError::DegenerateMember(_))
        ));
        assert!(matches!(
            model.new_continuous_member_between_nodes(sec, n, NodeId(42)),
            Err(FrameError::NodeNotFound(_))
        ));
        assert_eq!(model.member_count(), 0);
        assert_eq!(model.nodes().len(), 1);
    }

    #[test]
    fn test_brace_mirrored_quadrants() {
        let (mut model, sec) = model_with_section();
        let (left, right, tie) = portal(&mut model, sec);

        let b1 = model.brace(left, tie, sec, 3.0, Quadrant::NP).unwrap();
        let b2 = model.brace(right, tie, sec, 3.0, Quadrant::NN).unwrap();

        let ends = |id: MemberId| {
            let m = model.member(id).unwrap();
            (
                model.nodes().position(m.begin()).unwrap(),
                model.nodes().position(m.end()).unwrap(),
            )
        };
        let (a, b) = ends(b1);
        assert_relative_eq!(a.x, -6.0);
        assert_relative_eq!(a.y, 7.0);
        assert_relative_eq!(b.x, -3.0);
        assert_relative_eq!(b.y, 10.0);

        let (c, d) = ends(b2);
        assert_relative_eq!(c.x, 6.0);
        assert_relative_eq!(c.y, 7.0);
        assert_relative_eq!(d.x, 3.0);
        assert_relative_eq!(d.y, 10.0);

        assert_eq!(model.member(tie).unwrap().nodes().len(), 4);
        assert_eq!(model.member(left).unwrap().nodes().len(), 3);
    }

    #[test]
    fn test_failed_brace_changes_nothing() {
        let (mut model, sec) = model_with_section();
        let (left, right, tie) = portal(&mut model, sec);
        let before = model.summary();

        // a rise of 15 runs off the 10 ft post
        assert!(model.brace(left, tie, sec, 15.0, Quadrant::NP).is_err());
        assert_eq!(model.member(left).unwrap().nodes().len(), 2);
        assert_eq!(model.summary(), before);

        assert!(matches!(
            model.brace(left, right, sec, 3.0, Quadrant::NN),
            Err(FrameError::NoSharedNode(_, _))
        ));
        assert!(matches!(
            model.brace(left, tie, sec, 0.0, Quadrant::NP),
            Err(FrameError::DegenerateMember(_))
        ));
        assert_eq!(model.summary(), before);
    }

    #[test]
    fn test_find_nearest_member() {
        let (mut model, sec) = model_with_section();
        let (left, right, tie) = portal(&mut model, sec);

        assert_eq!(model.find_nearest_member(-5.0, 4.0, 0.0), Some(left));
        assert_eq!(model.find_nearest_member(5.5, 2.0, 0.0), Some(right));
        assert_eq!(model.find_nearest_member(0.0, 11.0, 0.0), Some(tie));
        assert_eq!(model.find_nearest_member(20.0, 20.0, 0.0), None);
    }

    #[test]
    fn test_find_nearest_member_and_split_at() {
        let (mut model, sec) = model_with_section();
        let (_, _, tie) = portal(&mut model, sec);

        let corner = model.find_nearest_member_and_split_at(6.0, 10.0, 0.0).unwrap();
        assert_eq!(model.nodes().len(), 4);
        assert_eq!(model.member(tie).unwrap().end(), corner);

        let mid = model.find_nearest_member_and_split_at(0.0, 10.0, 0.0).unwrap();
        assert_eq!(model.member(tie).unwrap().nodes()[1], mid);

        assert!(matches!(
            model.find_nearest_member_and_split_at(20.0, 20.0, 0.0),
            Err(FrameError::NoMemberSpansPoint(..))
        ));
    }

    #[test]
    fn test_split_wrappers() {
        let (mut model, sec) = model_with_section();
        let (left, _, _) = portal(&mut model, sec);

        let n = model.split_member_at_percent(left, 0.5).unwrap();
        assert_relative_eq!(model.nodes().position(n).unwrap().y, 5.0);
        let m = model.split_member_from_node(left, n, 2.0).unwrap();
        assert_relative_eq!(model.nodes().position(m).unwrap().y, 7.0);
        assert_relative_eq!(model.member_length(left).unwrap(), 10.0);
        assert!(matches!(
            model.split_member_at_distance(MemberId(99), 1.0),
            Err(FrameError::MemberNotFound(_))
        ));
    }

    #[test]
    fn test_one_support_per_node() {
        let (mut model, sec) = model_with_section();
        let (left, _, _) = portal(&mut model, sec);
        let base = model.member(left).unwrap().begin();

        let first = model.fixed_support(base).unwrap();
        let second = model.add_support(Support::pinned(base)).unwrap();
        assert_eq!(first, second);
        assert_eq!(model.supports().len(), 1);
        assert_eq!(model.supports()[0].restraint_code, "FFFFFF");
        assert_eq!(model.node(base).unwrap().support(), Some(first));
        assert!(model.fixed_support(NodeId(77)).is_err());
    }

    #[test]
    fn test_area_load_validation() {
        let mut model = FrameModel::new();
        let a = model.new_node(0.0, 0.0, 0.0);
        let b = model.new_node(1.0, 0.0, 0.0);
        let c = model.new_node(1.0, 0.0, 1.0);

        assert!(matches!(
            model.new_area_load(&[a, b], -1.0, Axis::Y, "snow"),
            Err(FrameError::TooFewAreaLoadNodes(2))
        ));
        assert!(matches!(
            model.new_area_load(&[a, b, NodeId(9)], -1.0, Axis::Y, "snow"),
            Err(FrameError::NodeNotFound(_))
        ));
        assert!(model.area_loads().is_empty());

        let id = model.new_area_load(&[a, b, c], -1.0, Axis::Y, "snow").unwrap();
        assert_eq!(id, AreaLoadId(1));
    }

    #[test]
    fn test_single_self_weight() {
        let mut model = FrameModel::new();
        assert_eq!(model.new_self_weight(), SelfWeightId(1));
        assert_eq!(model.new_self_weight(), SelfWeightId(1));
        assert_eq!(model.self_weights().len(), 1);
        assert_eq!(model.self_weights()[0].y, -1.0);
    }

    #[test]
    fn test_summary_counts_segments() {
        let (mut model, sec) = model_with_section();
        let (left, _, tie) = portal(&mut model, sec);
        model.brace(left, tie, sec, 3.0, Quadrant::NP).unwrap();

        let summary = model.summary();
        assert_eq!(summary.members, 4);
        assert_eq!(summary.segments, 6);
        assert_eq!(summary.nodes, 6);
        assert!(summary.to_string().starts_with("6 nodes, 4 members (6 segments)"));
    }

    #[test]
    fn test_with_material_file() {
        let file = MaterialFile {
            units: crate::document::Units::System("metric".to_string()),
            materials: Material::presets(),
        };
        let model = FrameModel::with_material_file(file);
        assert_eq!(model.materials().len(), 3);
        assert_eq!(model.material_by_name("Aspen").unwrap(), MaterialId(3));
        assert_eq!(
            model.settings.units,
            crate::document::Units::System("metric".to_string())
        );
    }
}
