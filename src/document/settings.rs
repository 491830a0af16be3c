//! Project settings block

use serde::{Deserialize, Serialize};

use crate::math::Axis;

/// Unit names for each physical quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitTable {
    pub length: String,
    pub section_length: String,
    pub material_strength: String,
    pub density: String,
    pub force: String,
    pub moment: String,
    pub pressure: String,
    pub mass: String,
    pub translation: String,
    pub stress: String,
}

/// Unit system: a named preset ("imperial", "metric") or an explicit table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Units {
    System(String),
    Table(UnitTable),
}

impl Default for Units {
    fn default() -> Self {
        Units::System("imperial".to_string())
    }
}

/// Solver and display settings sent with every project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub units: Units,
    pub precision: String,
    pub precision_values: u32,
    pub evaluation_points: u32,
    pub vertical_axis: Axis,
    pub member_offsets_axis: String,
    pub projection_system: String,
    /// Seconds
    pub solver_timeout: u32,
    pub accurate_buckling_shape: bool,
    pub buckling_johnson: bool,
    pub non_linear_tolerance: String,
    pub non_linear_theory: String,
    pub auto_stabilize_model: bool,
    pub only_solve_user_defined_load_combinations: bool,
    pub include_rigid_links_for_area_loads: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            units: Units::default(),
            precision: "fixed".to_string(),
            precision_values: 3,
            evaluation_points: 9,
            vertical_axis: Axis::Y,
            member_offsets_axis: "local".to_string(),
            projection_system: "orthographic".to_string(),
            solver_timeout: 600,
            accurate_buckling_shape: false,
            buckling_johnson: false,
            non_linear_tolerance: "1".to_string(),
            non_linear_theory: "small".to_string(),
            auto_stabilize_model: false,
            only_solve_user_defined_load_combinations: false,
            include_rigid_links_for_area_loads: false,
        }
    }
}

impl Settings {
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    pub fn with_vertical_axis(mut self, axis: Axis) -> Self {
        self.vertical_axis = axis;
        self
    }
}
