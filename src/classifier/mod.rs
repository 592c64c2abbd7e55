//! Field classifier (verb module)
//!
//! Field expression string → what kind of field it is.

use crate::field::{is_equation, parse_function, strip_equation_prefix};
use crate::settings::CustomMeasurements;

/// The kind of a field expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Field,
    Function,
    Equation,
    CustomMeasurement,
}

/// A field expression broken into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFieldValue {
    Field(String),
    Function { name: String, arguments: Vec<String> },
    /// Equation expression without the `equation|` prefix
    Equation(String),
}

impl QueryFieldValue {
    pub fn function_name(&self) -> Option<&str> {
        match self {
            QueryFieldValue::Function { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Classify a field expression.
///
/// Never fails: anything that is neither an equation nor a function is a
/// field, and a field listed in `registry` is a custom measurement.
pub fn classify(expr: &str, registry: &CustomMeasurements) -> FieldKind {
    if is_equation(expr) {
        return FieldKind::Equation;
    }
    if parse_function(expr).is_some() {
        return FieldKind::Function;
    }
    if registry.contains(expr) {
        FieldKind::CustomMeasurement
    } else {
        FieldKind::Field
    }
}

pub fn explode_field(expr: &str) -> QueryFieldValue {
    if is_equation(expr) {
        return QueryFieldValue::Equation(strip_equation_prefix(expr).to_string());
    }
    match parse_function(expr) {
        Some(parsed) => QueryFieldValue::Function {
            name: parsed.name,
            arguments: parsed.arguments,
        },
        None => QueryFieldValue::Field(expr.to_string()),
    }
}
