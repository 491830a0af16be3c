//! Round timber-frame yurt
//!
//! Posts stand on a circle and are tied together at the top by a closed ring
//! of ties. Each tie is knee-braced to both of its posts, and rafters run
//! from the post tops up to a single apex or, when a crown diameter is set,
//! to a compression ring.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{load_groups, require_positive, sawn_lumber, FrameGenerator};
use crate::elements::Quadrant;
use crate::error::{FrameError, FrameResult};
use crate::ids::{MemberId, NodeId, SectionId};
use crate::loads::LoadCombinations;
use crate::math::Axis;
use crate::model::FrameModel;

/// Yurt parameters, in feet and ksf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YurtConfig {
    pub diameter: f64,
    /// Largest allowed arc distance between neighbouring posts
    pub max_post_spacing: f64,
    pub height: f64,
    pub roof_rise: f64,
    pub roof_run: f64,
    /// Distance from the post/tie joint to each end of a knee brace
    pub brace_rise: f64,
    /// Diameter of the compression ring at the roof peak; 0 for a single apex
    pub crown_diameter: f64,
    /// Add a rafter from each tie midpoint
    pub intermediate_rafters: bool,
    pub roof_snow_load: f64,
    pub roof_live_load: f64,
    pub roof_dead_load: f64,
    /// Catalog material for every member
    pub material: String,
}

impl Default for YurtConfig {
    fn default() -> Self {
        Self {
            diameter: 24.0,
            max_post_spacing: 12.0,
            height: 10.0,
            roof_rise: 4.0,
            roof_run: 12.0,
            brace_rise: 3.0,
            crown_diameter: 0.0,
            intermediate_rafters: false,
            roof_snow_load: 0.06,
            roof_live_load: 0.02,
            roof_dead_load: 0.02,
            material: "Red Pine".to_string(),
        }
    }
}

struct YurtSections {
    post: SectionId,
    tie: SectionId,
    rafter: SectionId,
    brace: SectionId,
}

/// One bay of the wall: a post top, the tie to the next post, its midpoint
struct Bay {
    top: NodeId,
    next_top: NodeId,
    midpoint: NodeId,
}

impl YurtConfig {
    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }

    pub fn with_max_post_spacing(mut self, spacing: f64) -> Self {
        self.max_post_spacing = spacing;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the roof pitch as rise over run
    pub fn with_roof_pitch(mut self, rise: f64, run: f64) -> Self {
        self.roof_rise = rise;
        self.roof_run = run;
        self
    }

    pub fn with_brace_rise(mut self, rise: f64) -> Self {
        self.brace_rise = rise;
        self
    }

    pub fn with_crown_diameter(mut self, diameter: f64) -> Self {
        self.crown_diameter = diameter;
        self
    }

    pub fn with_intermediate_rafters(mut self, enabled: bool) -> Self {
        self.intermediate_rafters = enabled;
        self
    }

    /// Set snow, live and dead roof loads
    pub fn with_roof_loads(mut self, snow: f64, live: f64, dead: f64) -> Self {
        self.roof_snow_load = snow;
        self.roof_live_load = live;
        self.roof_dead_load = dead;
        self
    }

    pub fn with_material(mut self, name: &str) -> Self {
        self.material = name.to_string();
        self
    }

    /// Number of posts needed to keep their spacing under the maximum
    pub fn post_count(&self) -> usize {
        let count = (PI * self.diameter / self.max_post_spacing).ceil();
        (count as usize).max(3)
    }

    /// Height of the apex
    pub fn apex_height(&self) -> f64 {
        self.height + self.roof_rise * 0.5 * self.diameter / self.roof_run
    }

    /// Height of the crown ring
    pub fn crown_height(&self) -> f64 {
        self.height + self.roof_rise * 0.5 * (self.diameter - self.crown_diameter) / self.roof_run
    }

    pub fn validate(&self) -> FrameResult<()> {
        require_positive("diameter", self.diameter)?;
        require_positive("max_post_spacing", self.max_post_spacing)?;
        require_positive("height", self.height)?;
        require_positive("roof_run", self.roof_run)?;
        require_positive("brace_rise", self.brace_rise)?;
        if self.roof_rise < 0.0 {
            return Err(FrameError::InvalidInput(format!(
                "roof_rise must not be negative, got {}",
                self.roof_rise
            )));
        }
        if !(0.0..self.diameter).contains(&self.crown_diameter) {
            return Err(FrameError::InvalidInput(format!(
                "crown_diameter {} must be in [0, {})",
                self.crown_diameter, self.diameter
            )));
        }
        Ok(())
    }

    fn sections(&self, model: &mut FrameModel) -> FrameResult<YurtSections> {
        let material = model.material_by_name(&self.material)?;
        Ok(YurtSections {
            post: sawn_lumber(model, material, "8 x 10")?,
            tie: sawn_lumber(model, material, "8 x 10")?,
            rafter: sawn_lumber(model, material, "8 x 10")?,
            brace: sawn_lumber(model, material, "4 x 8")?,
        })
    }

    /// Point on a circle of `radius` at the angle of post `i` of `count`
    fn on_circle(radius: f64, i: f64, count: usize) -> (f64, f64) {
        let angle = 2.0 * PI * i / count as f64;
        (radius * angle.cos(), radius * angle.sin())
    }

    /// Posts with fixed bases; returns each post and its top node
    fn posts(&self, model: &mut FrameModel, section: SectionId) -> FrameResult<Vec<(MemberId, NodeId)>> {
        let count = self.post_count();
        let mut posts = Vec::with_capacity(count);
        for i in 0..count {
            let (x, z) = Self::on_circle(self.diameter / 2.0, i as f64, count);
            let post = model.new_continuous_member(section, (x, 0.0, z), (x, self.height, z))?;
            let (base, top) = model.member_ends(post)?;
            model.fixed_support(base)?;
            posts.push((post, top));
        }
        Ok(posts)
    }

    /// Tie ring across the post tops, each tie split at its midpoint and
    /// braced to both posts
    fn ties(
        &self,
        model: &mut FrameModel,
        sections: &YurtSections,
        posts: &[(MemberId, NodeId)],
    ) -> FrameResult<Vec<Bay>> {
        let mut bays = Vec::with_capacity(posts.len());
        for (i, &(post, top)) in posts.iter().enumerate() {
            let (next_post, next_top) = posts[(i + 1) % posts.len()];
            let tie = model.new_continuous_member_between_nodes(sections.tie, top, next_top)?;
            let midpoint = model.split_member_at_percent(tie, 0.5)?;

            model.brace(post, tie, sections.brace, self.brace_rise, Quadrant::NP)?;
            model.brace(next_post, tie, sections.brace, self.brace_rise, Quadrant::NN)?;

            bays.push(Bay {
                top,
                next_top,
                midpoint,
            });
        }
        Ok(bays)
    }

    /// Rafters up to the apex or crown ring; returns each bay's roof-edge
    /// nodes from the next post's side back to this post's side
    fn roof(&self, model: &mut FrameModel, rafter: SectionId, bays: &[Bay]) -> FrameResult<Vec<Vec<NodeId>>> {
        let count = bays.len();

        if self.crown_diameter == 0.0 {
            let apex = model.new_node(0.0, self.apex_height(), 0.0);
            for bay in bays {
                model.new_continuous_member_between_nodes(rafter, bay.top, apex)?;
                if self.intermediate_rafters {
                    model.new_continuous_member_between_nodes(rafter, bay.midpoint, apex)?;
                }
            }
            return Ok(vec![vec![apex]; count]);
        }

        let y = self.crown_height();
        let crown: Vec<NodeId> = (0..count)
            .map(|i| {
                let (x, z) = Self::on_circle(self.crown_diameter / 2.0, i as f64, count);
                model.new_node(x, y, z)
            })
            .collect();

        let mut ridges = Vec::with_capacity(count);
        for (i, bay) in bays.iter().enumerate() {
            let (here, next) = (crown[i], crown[(i + 1) % count]);
            let ring = model.new_continuous_member_between_nodes(rafter, here, next)?;
            model.new_continuous_member_between_nodes(rafter, bay.top, here)?;

            if self.intermediate_rafters {
                let ring_mid = model.split_member_at_percent(ring, 0.5)?;
                model.new_continuous_member_between_nodes(rafter, bay.midpoint, ring_mid)?;
                ridges.push(vec![next, ring_mid, here]);
            } else {
                ridges.push(vec![next, here]);
            }
        }
        Ok(ridges)
    }

    fn roof_loads(&self, model: &mut FrameModel, bays: &[Bay], ridges: &[Vec<NodeId>]) -> FrameResult<()> {
        for (bay, ridge) in bays.iter().zip(ridges) {
            let mut panel = vec![bay.top, bay.midpoint, bay.next_top];
            panel.extend(ridge);

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
        Ok(())
    }
}

impl FrameGenerator for YurtConfig {
    fn material_name(&self) -> &str {
        &self.material
    }

    fn build(&self, model: &mut FrameModel) -> FrameResult<()> {
        self.validate()?;
        let sections = self.sections(model)?;

        let posts = self.posts(model, sections.post)?;
        let bays = self.ties(model, &sections, &posts)?;
        let ridges = self.roof(model, sections.rafter, &bays)?;
        self.roof_loads(model, &bays, &ridges)?;

        model.new_self_weight();
        model.load_combinations = LoadCombinations::ultimate_limit_states();

        log::info!(
            "yurt: {} posts on {} ft diameter, {}",
            posts.len(),
            self.diameter,
            model.summary()
        );
        Ok(())
    }
}
