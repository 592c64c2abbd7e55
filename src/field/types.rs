//! Output type definitions for fields and aggregates

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Declared output type of a field, as reported in response meta
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OutputType {
    /// Whole number
    Integer,
    /// Floating point number
    Number,
    /// Duration, milliseconds unless meta declares a unit
    Duration,
    /// Ratio in 0..=1, displayed as a percentage
    Percentage,
    /// Free text
    String,
    /// Timestamp
    Date,
    /// Boolean
    Boolean,
    /// Byte size
    Size,
    /// Events per time unit
    Rate,
    /// A type this crate doesn't know; preserved verbatim
    Other(String),
}

impl OutputType {
    /// Types that can be plotted on a time-series y-axis
    pub fn is_legal_y_axis(&self) -> bool {
        matches!(
            self,
            OutputType::Integer | OutputType::Number | OutputType::Duration | OutputType::Percentage
        )
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::Integer => write!(f, "integer"),
            OutputType::Number => write!(f, "number"),
            OutputType::Duration => write!(f, "duration"),
            OutputType::Percentage => write!(f, "percentage"),
            OutputType::String => write!(f, "string"),
            OutputType::Date => write!(f, "date"),
            OutputType::Boolean => write!(f, "boolean"),
            OutputType::Size => write!(f, "size"),
            OutputType::Rate => write!(f, "rate"),
            OutputType::Other(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for OutputType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "integer" => OutputType::Integer,
            "number" => OutputType::Number,
            "duration" => OutputType::Duration,
            "percentage" => OutputType::Percentage,
            "string" => OutputType::String,
            "date" => OutputType::Date,
            "boolean" => OutputType::Boolean,
            "size" => OutputType::Size,
            "rate" => OutputType::Rate,
            _ => OutputType::Other(s.to_string()),
        }
    }
}

// Custom deserialize from string
impl<'de> Deserialize<'de> for OutputType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(OutputType::from(s.as_str()))
    }
}

// Serialize back to string
impl Serialize for OutputType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(OutputType::from("integer"), OutputType::Integer);
        assert_eq!(OutputType::from("Duration"), OutputType::Duration);
        assert_eq!(OutputType::from("percentage"), OutputType::Percentage);
    }

    #[test]
    fn test_unknown_type_preserved() {
        let t = OutputType::from("percent_change");
        assert_eq!(t, OutputType::Other("percent_change".to_string()));
        assert_eq!(t.to_string(), "percent_change");
    }

    #[test]
    fn test_legal_y_axis() {
        assert!(OutputType::Duration.is_legal_y_axis());
        assert!(OutputType::Integer.is_legal_y_axis());
        assert!(!OutputType::String.is_legal_y_axis());
        assert!(!OutputType::Date.is_legal_y_axis());
    }

    #[test]
    fn test_serde_as_string() {
        let t: OutputType = serde_json::from_str("\"size\"").unwrap();
        assert_eq!(t, OutputType::Size);
        assert_eq!(serde_json::to_string(&OutputType::Rate).unwrap(), "\"rate\"");
    }
}
