//! Suppression state: which entities the service UI hides per view

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Entity ids hidden in one suppression view
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Suppression {
    pub members: Vec<String>,
    pub plates: Vec<String>,
    pub supports: Vec<String>,
    pub moments: Vec<String>,
    pub distributed_loads: Vec<String>,
    pub point_loads: Vec<String>,
    pub area_loads: Vec<String>,
    pub pressures: Vec<String>,
    pub load_combinations: Vec<String>,
}

/// Named suppression views plus the one currently selected
#[derive(Debug, Clone, PartialEq)]
pub struct Suppress {
    pub suppressions: BTreeMap<String, Suppression>,
    pub current_case: String,
}

impl Default for Suppress {
    fn default() -> Self {
        let mut suppressions = BTreeMap::new();
        suppressions.insert("All On".to_string(), Suppression::default());
        suppressions.insert("User Defined".to_string(), Suppression::default());
        Self {
            suppressions,
            current_case: "User Defined".to_string(),
        }
    }
}

impl Serialize for Suppress {
    /// Views and `current_case` share one flat object
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.suppressions.len() + 1))?;
        for (name, suppression) in &self.suppressions {
            map.serialize_entry(name, suppression)?;
        }
        map.serialize_entry("current_case", &self.current_case)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suppress_json() {
        let json = serde_json::to_value(Suppress::default()).unwrap();
        assert_eq!(json["current_case"], "User Defined");
        assert!(json["All On"]["members"].as_array().unwrap().is_empty());
        assert!(json["User Defined"]["load_combinations"].is_array());
    }
}
