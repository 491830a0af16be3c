//! Structural elements module

mod material;
mod member;
mod node;
mod section;
mod support;

pub use material::{Material, MaterialFile, MATERIAL_CLASS_WOOD};
pub use member::{ContinuousMember, Quadrant};
pub(crate) use member::SplitTarget;
pub use node::Node;
pub use section::{torsion_constant, RectangularProperties, Section, SectionShape, SECTION_VERSION};
pub use support::{Support, BOTH_DIRECTIONS, FIXED_RESTRAINT, PINNED_RESTRAINT};
