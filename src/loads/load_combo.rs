//! Load combinations
//!
//! Combinations are defined over four load categories (dead, live, snow,
//! wind). A [`CaseMapping`] says which load groups belong to each category,
//! and each [`FactorCase`] gives one factor per category. On the wire every
//! mapped group gets its category's factor.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use super::self_weight::SELF_WEIGHT_GROUP;

/// Load groups assigned to each load category
#[derive(Debug, Clone, Default, PartialEq, Deserialize, serde::Serialize)]
pub struct CaseMapping {
    pub dead: Vec<String>,
    pub live: Vec<String>,
    pub snow: Vec<String>,
    pub wind: Vec<String>,
}

fn groups(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl CaseMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dead_cases(mut self, load_groups: &[&str]) -> Self {
        self.dead = groups(load_groups);
        self
    }

    pub fn live_cases(mut self, load_groups: &[&str]) -> Self {
        self.live = groups(load_groups);
        self
    }

    pub fn snow_cases(mut self, load_groups: &[&str]) -> Self {
        self.snow = groups(load_groups);
        self
    }

    pub fn wind_cases(mut self, load_groups: &[&str]) -> Self {
        self.wind = groups(load_groups);
        self
    }

    /// dead + self weight, live, snow and wind groups as the generators name them
    pub fn standard() -> Self {
        Self::new()
            .dead_cases(&["dead", SELF_WEIGHT_GROUP])
            .live_cases(&["live"])
            .snow_cases(&["snow"])
            .wind_cases(&["wind"])
    }
}

/// One load combination: a factor per load category
#[derive(Debug, Clone, Default, PartialEq, Deserialize, serde::Serialize)]
pub struct FactorCase {
    pub name: String,
    #[serde(default)]
    pub dead: f64,
    #[serde(default)]
    pub live: f64,
    #[serde(default)]
    pub snow: f64,
    #[serde(default)]
    pub wind: f64,
}

impl FactorCase {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn dead(mut self, factor: f64) -> Self {
        self.dead = factor;
        self
    }

    pub fn live(mut self, factor: f64) -> Self {
        self.live = factor;
        self
    }

    pub fn snow(mut self, factor: f64) -> Self {
        self.snow = factor;
        self
    }

    pub fn wind(mut self, factor: f64) -> Self {
        self.wind = factor;
        self
    }
}

/// The model's load-combination table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadCombinations {
    pub mapping: CaseMapping,
    pub cases: Vec<FactorCase>,
}

impl LoadCombinations {
    pub fn new(mapping: CaseMapping) -> Self {
        Self {
            mapping,
            cases: Vec::new(),
        }
    }

    pub fn with_case(mut self, case: FactorCase) -> Self {
        self.cases.push(case);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Ultimate limit state combinations for gravity, snow and wind
    pub fn ultimate_limit_states() -> Self {
        Self::new(CaseMapping::standard())
            .with_case(FactorCase::new("ULS: 1. 1.4D").dead(1.4))
            .with_case(
                FactorCase::new("ULS: 2. 1.2D + 1.6L + 0.5S")
                    .dead(1.2)
                    .live(1.6)
                    .snow(0.5),
            )
            .with_case(
                FactorCase::new("ULS: 3. 1.2D + 1.6S + L")
                    .dead(1.2)
                    .snow(1.6)
                    .live(1.0),
            )
            .with_case(
                FactorCase::new("ULS: 3. 1.2D + 1.6S + 0.5W")
                    .dead(1.2)
                    .snow(1.6)
                    .wind(0.5),
            )
            .with_case(
                FactorCase::new("ULS: 4. 1.2D + W + L + 0.5S")
                    .dead(1.2)
                    .wind(1.0)
                    .live(1.0)
                    .snow(0.5),
            )
            .with_case(
                FactorCase::new("ULS: 5. 1.2D + L + 0.2S")
                    .dead(1.2)
                    .live(1.0)
                    .snow(0.2),
            )
            .with_case(FactorCase::new("ULS: 6. 0.9D + W").dead(0.9).wind(1.0))
    }
}

/// One row of the table as it appears on the wire
struct CombinationRow<'a> {
    mapping: &'a CaseMapping,
    case: &'a FactorCase,
}

impl Serialize for CombinationRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let m = self.mapping;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.case.name)?;
        for (groups, factor) in [
            (&m.dead, self.case.dead),
            (&m.live, self.case.live),
            (&m.snow, self.case.snow),
            (&m.wind, self.case.wind),
        ] {
            for group in groups {
                map.serialize_entry(group, &factor)?;
            }
        }
        map.end()
    }
}

impl Serialize for LoadCombinations {
    /// Rows keyed "1", "2", ... in table order
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cases.len()))?;
        for (i, case) in self.cases.iter().enumerate() {
            let row = CombinationRow {
                mapping: &self.mapping,
                case,
            };
            map.serialize_entry(&(i + 1), &row)?;
        }
        map.end()
    }
}
