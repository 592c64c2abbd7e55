use crate::field::catalog::Parameter;
use crate::field::OutputType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldValueKind {
    Field,
    Tag,
    Measurement,
    CustomMeasurement,
    Breakdown,
    Function,
    Equation,
}

/// A selectable field in a widget editor
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Field { name: String, data_type: OutputType },
    Tag { name: String },
    Measurement { name: String, data_type: OutputType },
    CustomMeasurement {
        name: String,
        data_type: OutputType,
        /// Functions that accept this measurement as a parameter
        functions: Vec<String>,
    },
    Breakdown { name: String },
    Function { name: String, parameters: &'static [Parameter] },
    Equation { name: String },
}

impl FieldValue {
    pub fn kind(&self) -> FieldValueKind {
        match self {
            FieldValue::Field { .. } => FieldValueKind::Field,
            FieldValue::Tag { .. } => FieldValueKind::Tag,
            FieldValue::Measurement { .. } => FieldValueKind::Measurement,
            FieldValue::CustomMeasurement { .. } => FieldValueKind::CustomMeasurement,
            FieldValue::Breakdown { .. } => FieldValueKind::Breakdown,
            FieldValue::Function { .. } => FieldValueKind::Function,
            FieldValue::Equation { .. } => FieldValueKind::Equation,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FieldValue::Field { name, .. }
            | FieldValue::Tag { name }
            | FieldValue::Measurement { name, .. }
            | FieldValue::CustomMeasurement { name, .. }
            | FieldValue::Breakdown { name }
            | FieldValue::Function { name, .. }
            | FieldValue::Equation { name } => name,
        }
    }

    /// Declared type of a column-like value; functions and equations have none
    pub fn data_type(&self) -> Option<OutputType> {
        match self {
            FieldValue::Field { data_type, .. }
            | FieldValue::Measurement { data_type, .. }
            | FieldValue::CustomMeasurement { data_type, .. } => Some(data_type.clone()),
            FieldValue::Tag { .. } => Some(OutputType::String),
            FieldValue::Breakdown { .. } => Some(OutputType::Duration),
            FieldValue::Function { .. } | FieldValue::Equation { .. } => None,
        }
    }

    pub fn is_function_or_equation(&self) -> bool {
        matches!(self.kind(), FieldValueKind::Function | FieldValueKind::Equation)
    }
}

/// A labelled field option
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValueOption {
    pub label: String,
    pub value: FieldValue,
}

/// A plain labelled value, e.g. a table sort key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectValue {
    pub label: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::catalog::aggregation;

    fn function(name: &str) -> FieldValue {
        FieldValue::Function {
            name: name.to_string(),
            parameters: aggregation(name).map(|a| a.parameters).unwrap_or(&[]),
        }
    }

    #[test]
    fn test_functions_compare_by_name_and_parameters() {
        assert_eq!(function("p95"), function("p95"));
        assert_ne!(function("p95"), function("avg"));
        assert_eq!(function("p95").data_type(), None);
        assert!(function("count").is_function_or_equation());
    }
}
