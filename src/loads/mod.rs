//! Load types and load combinations

mod area_load;
mod load_combo;
mod self_weight;

pub use area_load::{AreaLoad, AreaLoadKind, MIN_AREA_LOAD_NODES};
pub use load_combo::{CaseMapping, FactorCase, LoadCombinations};
pub use self_weight::{SelfWeight, SELF_WEIGHT_GROUP};
