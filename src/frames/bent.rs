//! Gable-roofed bent frame
//!
//! A row of identical bents, each two posts with a tie and knee braces under
//! a pair of rafters. Neighbouring bents are joined by top plates running
//! along the eaves, braced down to the posts, with a rafter pair at mid-bay.

use serde::{Deserialize, Serialize};

use super::{load_groups, node_at, require_positive, sawn_lumber, wind_pressure, FrameGenerator};
use crate::elements::Quadrant;
use crate::error::{FrameError, FrameResult};
use crate::ids::{MemberId, NodeId, SectionId};
use crate::loads::LoadCombinations;
use crate::math::Axis;
use crate::model::FrameModel;

/// Bent frame parameters, in feet, ksf, ft/s and kip/ft³
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BentFrameConfig {
    /// Post to post, across the building
    pub width: f64,
    /// Eave height
    pub height: f64,
    /// First bent to last bent
    pub length: f64,
    pub tie_height: f64,
    pub brace_rise: f64,
    pub roof_rise: f64,
    pub roof_run: f64,
    pub bents: usize,
    pub roof_snow_load: f64,
    pub roof_live_load: f64,
    pub roof_dead_load: f64,
    pub wind_speed: f64,
    pub air_density: f64,
    pub material: String,
}

impl Default for BentFrameConfig {
    fn default() -> Self {
        Self {
            width: 12.0,
            height: 10.0,
            length: 20.0,
            tie_height: 8.5,
            brace_rise: 3.0,
            roof_rise: 8.0,
            roof_run: 12.0,
            bents: 3,
            roof_snow_load: 0.06,
            roof_live_load: 0.02,
            roof_dead_load: 0.02,
            wind_speed: 177.0,
            air_density: 0.000075,
            material: "Red Pine (green)".to_string(),
        }
    }
}

struct BentSections {
    post: SectionId,
    tie: SectionId,
    rafter: SectionId,
    brace: SectionId,
    plate: SectionId,
}

/// Post tops of one bent
#[derive(Clone, Copy)]
struct Eaves {
    left: NodeId,
    right: NodeId,
}

impl BentFrameConfig {
    pub fn with_size(mut self, width: f64, height: f64, length: f64) -> Self {
        self.width = width;
        self.height = height;
        self.length = length;
        self
    }

    pub fn with_tie_height(mut self, tie_height: f64) -> Self {
        self.tie_height = tie_height;
        self
    }

    pub fn with_brace_rise(mut self, rise: f64) -> Self {
        self.brace_rise = rise;
        self
    }

    /// Set the roof pitch as rise over run
    pub fn with_roof_pitch(mut self, rise: f64, run: f64) -> Self {
        self.roof_rise = rise;
        self.roof_run = run;
        self
    }

    pub fn with_bents(mut self, bents: usize) -> Self {
        self.bents = bents;
        self
    }

    /// Set snow, live and dead roof loads
    pub fn with_roof_loads(mut self, snow: f64, live: f64, dead: f64) -> Self {
        self.roof_snow_load = snow;
        self.roof_live_load = live;
        self.roof_dead_load = dead;
        self
    }

    pub fn with_wind(mut self, speed: f64, air_density: f64) -> Self {
        self.wind_speed = speed;
        self.air_density = air_density;
        self
    }

    pub fn with_material(mut self, name: &str) -> Self {
        self.material = name.to_string();
        self
    }

    /// Spacing between neighbouring bents
    pub fn bay(&self) -> f64 {
        self.length / (self.bents.max(2) - 1) as f64
    }

    pub fn ridge_height(&self) -> f64 {
        self.height + self.width / 2.0 * self.roof_rise / self.roof_run
    }

    /// Wind pressure on walls and the windward roof
    pub fn wind_pressure(&self) -> f64 {
        wind_pressure(self.air_density, self.wind_speed)
    }

    pub fn validate(&self) -> FrameResult<()> {
        if self.bents < 2 {
            return Err(FrameError::InvalidInput(format!(
                "a bent frame needs at least 2 bents, got {}",
                self.bents
            )));
        }
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("length", self.length)?;
        require_positive("roof_run", self.roof_run)?;
        require_positive("brace_rise", self.brace_rise)?;
        if self.roof_rise < 0.0 {
            return Err(FrameError::InvalidInput(format!(
                "roof_rise must not be negative, got {}",
                self.roof_rise
            )));
        }
        if self.tie_height <= self.brace_rise || self.tie_height > self.height {
            return Err(FrameError::InvalidInput(format!(
                "tie_height {} must be above brace_rise {} and at most height {}",
                self.tie_height, self.brace_rise, self.height
            )));
        }
        if self.brace_rise >= self.bay() / 2.0 || self.brace_rise >= self.width / 2.0 {
            return Err(FrameError::InvalidInput(format!(
                "brace_rise {} must be under half the bay ({}) and half the width ({})",
                self.brace_rise,
                self.bay(),
                self.width
            )));
        }
        Ok(())
    }

    fn sections(&self, model: &mut FrameModel) -> FrameResult<BentSections> {
        let material = model.material_by_name(&self.material)?;
        Ok(BentSections {
            post: sawn_lumber(model, material, "8 x 10")?,
            tie: sawn_lumber(model, material, "8 x 10")?,
            rafter: sawn_lumber(model, material, "8 x 10")?,
            brace: sawn_lumber(model, material, "4 x 8")?,
            plate: sawn_lumber(model, material, "8 x 10")?,
        })
    }

    /// Post with a fixed base at (x, z); returns the post and its top
    fn post(&self, model: &mut FrameModel, section: SectionId, x: f64, z: f64) -> FrameResult<(MemberId, NodeId)> {
        let post = model.new_continuous_member(section, (x, 0.0, z), (x, self.height, z))?;
        let (base, top) = model.member_ends(post)?;
        model.fixed_support(base)?;
        Ok((post, top))
    }

    /// One bent at `z`: posts, rafters to the ridge, tie and knee braces
    fn bent(&self, model: &mut FrameModel, sections: &BentSections, z: f64) -> FrameResult<Eaves> {
        let half = self.width / 2.0;
        let (left, left_top) = self.post(model, sections.post, -half, z)?;
        let (right, right_top) = self.post(model, sections.post, half, z)?;

        let ridge = model.new_node(0.0, self.ridge_height(), z);
        model.new_continuous_member_between_nodes(sections.rafter, left_top, ridge)?;
        model.new_continuous_member_between_nodes(sections.rafter, right_top, ridge)?;

        let left_joint = model.split_member_at_distance(left, self.tie_height)?;
        let right_joint = model.split_member_at_distance(right, self.tie_height)?;
        let tie = model.new_continuous_member_between_nodes(sections.tie, left_joint, right_joint)?;

        model.brace(left, tie, sections.brace, self.brace_rise, Quadrant::NP)?;
        model.brace(right, tie, sections.brace, self.brace_rise, Quadrant::NN)?;

        Ok(Eaves {
            left: left_top,
            right: right_top,
        })
    }

    /// Mid-bay rafters, top plates and plate braces between two bents
    fn connect(
        &self,
        model: &mut FrameModel,
        sections: &BentSections,
        previous: Eaves,
        current: Eaves,
        z: f64,
    ) -> FrameResult<()> {
        let half = self.width / 2.0;
        let mid_z = z - self.bay() / 2.0;

        let ridge = model.new_node(0.0, self.ridge_height(), mid_z);
        for (x, from_previous, from_current) in [
            (-half, previous.left, current.left),
            (half, previous.right, current.right),
        ] {
            let eave = model.new_node(x, self.height, mid_z);
            model.new_continuous_member_between_nodes(sections.rafter, eave, ridge)?;

            for top in [from_current, from_previous] {
                let plate = model.new_continuous_member_between_nodes(sections.plate, top, eave)?;
                self.plate_brace(model, sections.brace, plate, top)?;
            }
        }
        Ok(())
    }

    /// Brace from `brace_rise` along the plate down to the post under `top`
    fn plate_brace(
        &self,
        model: &mut FrameModel,
        section: SectionId,
        plate: MemberId,
        top: NodeId,
    ) -> FrameResult<MemberId> {
        let on_plate = model.split_member_at_distance(plate, self.brace_rise)?;
        let p = model.nodes().position(top)?;
        let on_post = model.find_nearest_member_and_split_at(p.x, p.y - self.brace_rise, p.z)?;
        model.new_continuous_member_between_nodes(section, on_plate, on_post)
    }

    /// Corner nodes of the roof panel on the `x` eave between `z0` and `z1`
    fn roof_panel(&self, model: &FrameModel, x: f64, z0: f64, z1: f64) -> FrameResult<[NodeId; 4]> {
        let ridge = self.ridge_height();
        Ok([
            node_at(model, x, self.height, z0)?,
            node_at(model, 0.0, ridge, z0)?,
            node_at(model, 0.0, ridge, z1)?,
            node_at(model, x, self.height, z1)?,
        ])
    }

    fn wall_panel(&self, model: &FrameModel, x: f64, z0: f64, z1: f64) -> FrameResult<[NodeId; 4]> {
        Ok([
            node_at(model, x, 0.0, z0)?,
            node_at(model, x, self.height, z0)?,
            node_at(model, x, self.height, z1)?,
            node_at(model, x, 0.0, z1)?,
        ])
    }

    /// Gravity roof loads on both slopes of every half bay
    fn roof_loads(&self, model: &mut FrameModel) -> FrameResult<()> {
        let half = self.width / 2.0;
        let step = self.bay() / 2.0;

        for k in 0..2 * (self.bents - 1) {
            let (z0, z1) = (k as f64 * step, (k + 1) as f64 * step);
            for x in [-half, half] {
                let panel = self.roof_panel(model, x, z0, z1)?;
                for (load, group) in [
                    (self.roof_snow_load, load_groups::SNOW),
                    (self.roof_dead_load, load_groups::DEAD),
                    (self.roof_live_load, load_groups::LIVE),
                ] {
                    if load != 0.0 {
                        model.new_area_load(&panel, -load, Axis::Y, group)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Wind along +X on both side walls and the windward roof slope
    fn wind_loads(&self, model: &mut FrameModel) -> FrameResult<()> {
        let pressure = self.wind_pressure();
        if pressure == 0.0 {
            return Ok(());
        }
        let half = self.width / 2.0;
        let bay = self.bay();

        for j in 0..self.bents - 1 {
            let (z0, z1) = (j as f64 * bay, (j + 1) as f64 * bay);
            for x in [-half, half] {
                let wall = self.wall_panel(model, x, z0, z1)?;
                model.new_area_load(&wall, pressure, Axis::X, load_groups::WIND)?;
            }
        }
        for k in 0..2 * (self.bents - 1) {
            let (z0, z1) = (k as f64 * bay / 2.0, (k + 1) as f64 * bay / 2.0);
            let roof = self.roof_panel(model, -half, z0, z1)?;
            model.new_area_load(&roof, pressure, Axis::X, load_groups::WIND)?;
        }
        Ok(())
    }
}

impl FrameGenerator for BentFrameConfig {
    fn material_name(&self) -> &str {
        &self.material
    }

    fn build(&self, model: &mut FrameModel) -> FrameResult<()> {
        self.validate()?;
        let sections = self.sections(model)?;

        let mut previous: Option<Eaves> = None;
        for i in 0..self.bents {
            let z = i as f64 * self.bay();
            let eaves = self.bent(model, &sections, z)?;
            if let Some(previous) = previous {
                self.connect(model, &sections, previous, eaves, z)?;
            }
            previous = Some(eaves);
        }

        self.roof_loads(model)?;
        self.wind_loads(model)?;

        model.new_self_weight();
        model.load_combinations = LoadCombinations::ultimate_limit_states();

        log::info!(
            "bent frame: {} bents over {} ft, {}",
            self.bents,
            self.length,
            model.summary()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_geometry_helpers() {
        let config = BentFrameConfig::default();
        assert_relative_eq!(config.bay(), 10.0);
        assert_relative_eq!(config.ridge_height(), 14.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_frames() {
        assert!(BentFrameConfig::default().with_bents(1).validate().is_err());
        assert!(BentFrameConfig::default().with_tie_height(11.0).validate().is_err());
        assert!(BentFrameConfig::default().with_tie_height(2.0).validate().is_err());
        // bay of 5 leaves no room for a 3 ft plate brace
        assert!(BentFrameConfig::default().with_bents(5).validate().is_err());
    }

    #[test]
    fn test_two_bent_frame() {
        let model = BentFrameConfig::default()
            .with_bents(2)
            .with_size(12.0, 10.0, 10.0)
            .generate()
            .unwrap();
        let summary = model.summary();

        // per bent: 2 posts, 2 rafters, tie, 2 braces
        // per bay: 2 rafters, 4 plates, 4 plate braces
        assert_eq!(summary.members, 2 * 7 + 10);
        assert_eq!(summary.supports, 4);
        // roof: 2 half bays x 2 slopes x 3 groups; wind: 2 walls + 2 roof panels
        assert_eq!(summary.area_loads, 12 + 4);
    }

    #[test]
    fn test_plate_braces_land_on_posts() {
        let config = BentFrameConfig::default();
        let model = config.generate().unwrap();
        let attach_y = config.height - config.brace_rise;

        for i in 0..config.bents {
            let z = i as f64 * config.bay();
            for x in [-6.0, 6.0] {
                let node = model.nodes().find_coincident(x, attach_y, z).unwrap();
                let post = model
                    .members()
                    .find(|m| m.begin() == model.nodes().find_coincident(x, 0.0, z).unwrap())
                    .unwrap();
                assert!(post.contains(node));
            }
        }
    }

    #[test]
    fn test_wind_loads_follow_pressure() {
        let config = BentFrameConfig::default();
        let model = config.generate().unwrap();
        let wind: Vec<_> = model
            .area_loads()
            .iter()
            .filter(|load| load.load_group == "wind")
            .collect();

        // 2 bays x 2 walls + 4 windward roof panels
        assert_eq!(wind.len(), 8);
        for load in wind {
            assert_eq!(load.direction, Axis::X);
            assert_relative_eq!(load.magnitude, config.wind_pressure());
        }
    }
}
