//! Section properties for frame members

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::ids::MaterialId;

/// Schema version the analysis service expects on computed sections
pub const SECTION_VERSION: u32 = 4;

/// Geometric properties of a solid rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularProperties {
    /// Breadth (local z extent)
    pub breadth: f64,
    /// Depth (local y extent)
    pub depth: f64,
    /// Cross-sectional area
    pub area: f64,
    /// Moment of inertia about local z
    pub iz: f64,
    /// Moment of inertia about local y
    pub iy: f64,
    /// Torsion constant
    pub j: f64,
}

impl RectangularProperties {
    pub fn new(breadth: f64, depth: f64) -> Self {
        Self {
            breadth,
            depth,
            area: breadth * depth,
            iz: breadth * depth.powi(3) / 12.0,
            iy: depth * breadth.powi(3) / 12.0,
            j: torsion_constant(breadth, depth),
        }
    }
}

/// Torsion constant of a solid rectangle (Roark's approximation)
pub fn torsion_constant(breadth: f64, depth: f64) -> f64 {
    // a is the long half-side, b the short one
    let (a, b) = if depth >= breadth {
        (depth / 2.0, breadth / 2.0)
    } else {
        (breadth / 2.0, depth / 2.0)
    };
    a * b.powi(3) * (16.0 / 3.0 - 3.36 * b / a * (1.0 - b.powi(4) / (12.0 * a.powi(4))))
}

/// How the section's properties are supplied
#[derive(Debug, Clone, PartialEq)]
pub enum SectionShape {
    /// Resolved by name in the analysis service's section library
    Library(Vec<String>),
    /// Computed locally
    Rectangular {
        name: String,
        properties: RectangularProperties,
    },
}

/// Cross-section assigned to members
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub material: MaterialId,
    pub shape: SectionShape,
}

impl Section {
    /// Section looked up by library path, e.g.
    /// `["American", "NDS", "Sawn Lumber", "8 x 10"]`
    pub fn library<S: AsRef<str>>(material: MaterialId, path: &[S]) -> Self {
        Self {
            material,
            shape: SectionShape::Library(path.iter().map(|s| s.as_ref().to_string()).collect()),
        }
    }

    /// Solid rectangular section named after its material and size
    pub fn rectangular(material: MaterialId, material_name: &str, breadth: f64, depth: f64) -> Self {
        Self {
            material,
            shape: SectionShape::Rectangular {
                name: format!("{} {}x{}", material_name, breadth, depth),
                properties: RectangularProperties::new(breadth, depth),
            },
        }
    }

    /// Locally computed properties, if any
    pub fn properties(&self) -> Option<&RectangularProperties> {
        match &self.shape {
            SectionShape::Rectangular { properties, .. } => Some(properties),
            SectionShape::Library(_) => None,
        }
    }
}

#[derive(Serialize)]
struct SectionAux {
    composite: bool,
    centroid_point: [f64; 2],
    centroid_length: [f64; 2],
    depth: f64,
    width: f64,
    alpha: f64,
    polygons: [(); 0],
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.shape {
            SectionShape::Library(path) => {
                let mut s = serializer.serialize_struct("Section", 2)?;
                s.serialize_field("material_id", &self.material)?;
                s.serialize_field("load_section", path)?;
                s.end()
            }
            SectionShape::Rectangular { name, properties: p } => {
                let aux = SectionAux {
                    composite: false,
                    centroid_point: [p.breadth / 2.0, p.depth / 2.0],
                    centroid_length: [p.breadth / 2.0, p.depth / 2.0],
                    depth: p.depth,
                    width: p.breadth,
                    alpha: 0.0,
                    polygons: [],
                };
                let mut s = serializer.serialize_struct("Section", 8)?;
                s.serialize_field("version", &SECTION_VERSION)?;
                s.serialize_field("name", name)?;
                s.serialize_field("area", &p.area)?;
                s.serialize_field("Iz", &p.iz)?;
                s.serialize_field("Iy", &p.iy)?;
                s.serialize_field("material_id", &self.material)?;
                s.serialize_field("aux", &aux)?;
                s.serialize_field("J", &p.j)?;
                s.end()
            }
        }
    }
}
