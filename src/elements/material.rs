//! Material properties and the material library file

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::document::Units;
use crate::error::FrameResult;
use crate::ids::MaterialId;

/// Class tag for timber materials
pub const MATERIAL_CLASS_WOOD: &str = "wood";

/// Material properties as consumed by the analysis service
///
/// Units follow the model settings; the presets below are imperial
/// (ksi, lb/ft³).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    #[serde(default)]
    pub elasticity_modulus: f64,
    #[serde(default)]
    pub density: f64,
    #[serde(default)]
    pub poissons_ratio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_strength: Option<f64>,
    #[serde(default)]
    pub ultimate_strength: f64,
    #[serde(default)]
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elasticity_modulus_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elasticity_modulus_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shear_modulus_xy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shear_modulus_xz: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shear_modulus_yz: Option<f64>,
    /// Catalog id, assigned when the material is added to a model
    #[serde(default = "unassigned_id")]
    pub id: MaterialId,
}

fn unassigned_id() -> MaterialId {
    MaterialId(0)
}

impl Material {
    /// Create a material with only a name; properties default to zero
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            elasticity_modulus: 0.0,
            density: 0.0,
            poissons_ratio: 0.0,
            yield_strength: None,
            ultimate_strength: 0.0,
            class: String::new(),
            elasticity_modulus_x: None,
            elasticity_modulus_y: None,
            shear_modulus_xy: None,
            shear_modulus_xz: None,
            shear_modulus_yz: None,
            id: unassigned_id(),
        }
    }

    /// Create an isotropic timber material
    pub fn wood(name: &str, elasticity_modulus: f64, density: f64, poissons_ratio: f64) -> Self {
        Self {
            elasticity_modulus,
            density,
            poissons_ratio,
            class: MATERIAL_CLASS_WOOD.to_string(),
            ..Self::new(name)
        }
    }

    /// Set yield and ultimate strength
    pub fn with_strength(mut self, yield_strength: f64, ultimate_strength: f64) -> Self {
        self.yield_strength = Some(yield_strength);
        self.ultimate_strength = ultimate_strength;
        self
    }

    /// Red pine, green (ksi, lb/ft³)
    pub fn red_pine_green() -> Self {
        Self::wood("Red Pine (green)", 1280.0, 25.0, 0.27).with_strength(0.26, 0.3)
    }

    /// Red pine, dry (ksi, lb/ft³)
    pub fn red_pine() -> Self {
        Self::wood("Red Pine", 1630.0, 28.7168619, 0.27).with_strength(0.300, 0.460)
    }

    /// Aspen (ksi, lb/ft³); strengths not published
    pub fn aspen() -> Self {
        Self::wood("Aspen", 1170.0, 23.7, 0.37)
    }

    /// All built-in timber presets
    pub fn presets() -> Vec<Self> {
        vec![Self::red_pine_green(), Self::red_pine(), Self::aspen()]
    }
}

/// Material library file: a unit system plus a list of materials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialFile {
    #[serde(default)]
    pub units: Units,
    pub materials: Vec<Material>,
}

impl MaterialFile {
    /// Parse a material library from JSON
    pub fn read<R: Read>(reader: R) -> FrameResult<Self> {
        let file: Self = serde_json::from_reader(reader)?;
        log::debug!("read {} materials from library", file.materials.len());
        Ok(file)
    }

    /// Read a material library from a path
    pub fn open(path: impl AsRef<std::path::Path>) -> FrameResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::read(std::io::BufReader::new(file))
    }
}
