//! Timber Frames - parametric timber-frame models for structural analysis
//!
//! This library builds 3D timber frames as a graph of nodes and continuous
//! members and writes them out as a structural-analysis project document:
//! - Coordinate-deduplicated node registry
//! - Continuous members that are split in place as joinery is added
//! - Knee braces between members sharing a node
//! - Area loads, self weight and ULS load combinations
//! - Yurt and bent-frame generators
//!
//! ## Example
//! ```rust
//! use timber_frames::prelude::*;
//!
//! let mut model = FrameModel::new();
//! let pine = model.new_material(Material::red_pine());
//! let post = model.new_rectangular_section(pine, 8.0, 10.0).unwrap();
//! let brace = model.new_rectangular_section(pine, 4.0, 8.0).unwrap();
//!
//! // two posts and a tie across their tops
//! let left = model.new_continuous_member(post, (-6.0, 0.0, 0.0), (-6.0, 10.0, 0.0)).unwrap();
//! let right = model.new_continuous_member(post, (6.0, 0.0, 0.0), (6.0, 10.0, 0.0)).unwrap();
//! let tie = model.new_continuous_member(post, (-6.0, 10.0, 0.0), (6.0, 10.0, 0.0)).unwrap();
//!
//! for id in [left, right] {
//!     let (base, _) = model.member_ends(id).unwrap();
//!     model.fixed_support(base).unwrap();
//! }
//!
//! // knee braces 3 ft down each post and 3 ft along the tie
//! model.brace(left, tie, brace, 3.0, Quadrant::NP).unwrap();
//! model.brace(right, tie, brace, 3.0, Quadrant::NN).unwrap();
//!
//! let json = model.to_json(false).unwrap();
//! assert!(json.contains("\"dataVersion\": 30"));
//! ```

pub mod document;
pub mod elements;
pub mod error;
pub mod frames;
pub mod ids;
pub mod loads;
pub mod math;
pub mod model;
pub mod registry;

// Re-export common types
pub mod prelude {
    pub use crate::document::{ProjectDocument, Settings, Units};
    pub use crate::elements::{ContinuousMember, Material, MaterialFile, Node, Quadrant, Section, Support};
    pub use crate::error::{FrameError, FrameResult};
    pub use crate::frames::{wind_pressure, BentFrameConfig, FrameGenerator, YurtConfig};
    pub use crate::ids::{AreaLoadId, MaterialId, MemberId, NodeId, SectionId, SelfWeightId, SupportId};
    pub use crate::loads::{AreaLoad, CaseMapping, FactorCase, LoadCombinations, SelfWeight};
    pub use crate::math::Axis;
    pub use crate::model::{FrameModel, ModelSummary};
    pub use crate::registry::NodeRegistry;
}
