//! Parametric timber frame generators
//!
//! Each generator is a plain serde config with defaults. `build` adds the
//! frame to an existing model whose material catalog already holds the
//! configured material; `generate` starts from the built-in presets.

mod bent;
mod yurt;

pub use bent::BentFrameConfig;
pub use yurt::YurtConfig;

use crate::elements::Material;
use crate::error::{FrameError, FrameResult};
use crate::ids::{MaterialId, NodeId, SectionId};
use crate::model::FrameModel;

/// Standard gravity in ft/s²
pub const GRAVITY: f64 = 32.174048554;

/// Library path prefix for sawn lumber sections
pub const SAWN_LUMBER: [&str; 3] = ["American", "NDS", "Sawn Lumber"];

/// Load groups the generators file their loads under
pub mod load_groups {
    pub const DEAD: &str = "dead";
    pub const LIVE: &str = "live";
    pub const SNOW: &str = "snow";
    pub const WIND: &str = "wind";
}

/// Dynamic wind pressure `0.5 ρ v²`, with ρ given as a weight density
///
/// With air density in kip/ft³ and speed in ft/s the result is in ksf.
pub fn wind_pressure(air_density: f64, wind_speed: f64) -> f64 {
    0.5 * air_density / GRAVITY * wind_speed * wind_speed
}

/// Something that lays out a frame in a model
pub trait FrameGenerator {
    /// Name of the catalog material the frame is cut from
    fn material_name(&self) -> &str;

    /// Add the frame to `model`
    fn build(&self, model: &mut FrameModel) -> FrameResult<()>;

    /// Build into a fresh model seeded with the built-in material presets
    fn generate(&self) -> FrameResult<FrameModel> {
        let mut model = FrameModel::new();
        for material in Material::presets() {
            model.new_material(material);
        }
        self.build(&mut model)?;
        Ok(model)
    }
}

/// Sawn lumber library section of the given nominal size, e.g. `"8 x 10"`
pub(crate) fn sawn_lumber(model: &mut FrameModel, material: MaterialId, size: &str) -> FrameResult<SectionId> {
    let path: Vec<&str> = SAWN_LUMBER.iter().copied().chain([size]).collect();
    model.new_section_from_library(material, &path)
}

/// Existing node at (x, y, z)
pub(crate) fn node_at(model: &FrameModel, x: f64, y: f64, z: f64) -> FrameResult<NodeId> {
    model
        .nodes()
        .find_coincident(x, y, z)
        .ok_or_else(|| FrameError::InvalidInput(format!("no node at ({}, {}, {})", x, y, z)))
}

pub(crate) fn require_positive(name: &str, value: f64) -> FrameResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(FrameError::InvalidInput(format!("{} must be positive, got {}", name, value)))
    }
}
