//! Custom measurement registry

use serde::Deserialize;
use std::collections::BTreeMap;
use crate::field::OutputType;

/// A user-defined measurement and the aggregate functions that accept it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomMeasurement {
    pub key: String,
    /// Aggregate function names allowed to take this measurement as a parameter
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(rename = "fieldType", default)]
    pub field_type: Option<OutputType>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl CustomMeasurement {
    pub fn supports(&self, function: &str) -> bool {
        self.functions.iter().any(|f| f == function)
    }
}

/// Registry of custom measurements keyed by measurement key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomMeasurements(BTreeMap<String, CustomMeasurement>);

impl CustomMeasurements {
    pub fn new(measurements: impl IntoIterator<Item = CustomMeasurement>) -> Self {
        Self(
            measurements
                .into_iter()
                .map(|m| (m.key.clone(), m))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&CustomMeasurement> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomMeasurement> {
        self.0.values()
    }
}

// Settings files list measurements as a sequence; the key inside each entry
// is authoritative.
impl<'de> Deserialize<'de> for CustomMeasurements {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let list = Vec::<CustomMeasurement>::deserialize(deserializer)?;
        Ok(Self::new(list))
    }
}
