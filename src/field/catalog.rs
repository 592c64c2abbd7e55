//! Built-in catalog of aggregate functions, fields, measurements and span
//! operation breakdowns known to the events dataset.

use super::types::OutputType;

/// What an aggregate parameter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// A column whose type is one of `column_types`
    Column { column_types: &'static [&'static str] },
    /// A literal value (threshold, percentile)
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub kind: ParameterKind,
    pub required: bool,
    pub default_value: Option<&'static str>,
}

/// An aggregate function the dataset understands
#[derive(Debug, Clone, Copy)]
pub struct AggregateDefinition {
    pub name: &'static str,
    /// Fixed output type; `None` when the output follows the column parameter
    output_type: Option<&'static str>,
    pub parameters: &'static [Parameter],
}

impl AggregateDefinition {
    pub fn output_type(&self) -> Option<OutputType> {
        self.output_type.map(OutputType::from)
    }
}

const NUMERIC_COLUMNS: &[&str] = &["duration", "number", "integer", "percentage"];
const ORDERED_COLUMNS: &[&str] = &["duration", "number", "integer", "percentage", "date"];
const ANY_COLUMN: &[&str] = &["string", "integer", "number", "duration", "date", "boolean"];

const NUMERIC_COLUMN: Parameter = Parameter {
    kind: ParameterKind::Column { column_types: NUMERIC_COLUMNS },
    required: true,
    default_value: None,
};

const PERCENTILE_COLUMN: Parameter = Parameter {
    kind: ParameterKind::Column { column_types: NUMERIC_COLUMNS },
    required: false,
    default_value: Some("transaction.duration"),
};

pub const AGGREGATIONS: &[AggregateDefinition] = &[
    AggregateDefinition { name: "count", output_type: Some("integer"), parameters: &[] },
    AggregateDefinition {
        name: "count_unique",
        output_type: Some("integer"),
        parameters: &[Parameter {
            kind: ParameterKind::Column { column_types: ANY_COLUMN },
            required: true,
            default_value: None,
        }],
    },
    AggregateDefinition { name: "failure_count", output_type: Some("integer"), parameters: &[] },
    AggregateDefinition { name: "failure_rate", output_type: Some("percentage"), parameters: &[] },
    AggregateDefinition {
        name: "apdex",
        output_type: Some("number"),
        parameters: &[Parameter { kind: ParameterKind::Value, required: false, default_value: None }],
    },
    AggregateDefinition {
        name: "user_misery",
        output_type: Some("number"),
        parameters: &[Parameter { kind: ParameterKind::Value, required: true, default_value: Some("300") }],
    },
    AggregateDefinition { name: "eps", output_type: Some("number"), parameters: &[] },
    AggregateDefinition { name: "epm", output_type: Some("number"), parameters: &[] },
    AggregateDefinition { name: "last_seen", output_type: Some("date"), parameters: &[] },
    AggregateDefinition { name: "avg", output_type: None, parameters: &[NUMERIC_COLUMN] },
    AggregateDefinition { name: "sum", output_type: None, parameters: &[NUMERIC_COLUMN] },
    AggregateDefinition {
        name: "min",
        output_type: None,
        parameters: &[Parameter {
            kind: ParameterKind::Column { column_types: ORDERED_COLUMNS },
            required: true,
            default_value: None,
        }],
    },
    AggregateDefinition {
        name: "max",
        output_type: None,
        parameters: &[Parameter {
            kind: ParameterKind::Column { column_types: ORDERED_COLUMNS },
            required: true,
            default_value: None,
        }],
    },
    AggregateDefinition { name: "p50", output_type: None, parameters: &[PERCENTILE_COLUMN] },
    AggregateDefinition { name: "p75", output_type: None, parameters: &[PERCENTILE_COLUMN] },
    AggregateDefinition { name: "p95", output_type: None, parameters: &[PERCENTILE_COLUMN] },
    AggregateDefinition { name: "p99", output_type: None, parameters: &[PERCENTILE_COLUMN] },
    AggregateDefinition { name: "p100", output_type: None, parameters: &[PERCENTILE_COLUMN] },
    AggregateDefinition {
        name: "percentile",
        output_type: None,
        parameters: &[
            NUMERIC_COLUMN,
            Parameter { kind: ParameterKind::Value, required: true, default_value: Some("0.5") },
        ],
    },
    AggregateDefinition {
        name: "any",
        output_type: None,
        parameters: &[Parameter {
            kind: ParameterKind::Column { column_types: ANY_COLUMN },
            required: true,
            default_value: None,
        }],
    },
];

/// Fields with a known output type
pub const FIELDS: &[(&str, &str)] = &[
    ("id", "string"),
    ("title", "string"),
    ("project", "string"),
    ("environment", "string"),
    ("release", "string"),
    ("dist", "string"),
    ("platform.name", "string"),
    ("message", "string"),
    ("location", "string"),
    ("culprit", "string"),
    ("user", "string"),
    ("user.id", "string"),
    ("user.email", "string"),
    ("user.display", "string"),
    ("issue", "string"),
    ("level", "string"),
    ("timestamp", "date"),
    ("event.type", "string"),
    ("error.type", "string"),
    ("error.handled", "boolean"),
    ("browser.name", "string"),
    ("os.name", "string"),
    ("device", "string"),
    ("geo.country_code", "string"),
    ("http.method", "string"),
    ("http.url", "string"),
    ("trace", "string"),
    ("transaction", "string"),
    ("transaction.op", "string"),
    ("transaction.status", "string"),
    ("transaction.duration", "duration"),
];

pub const MEASUREMENTS: &[(&str, &str)] = &[
    ("measurements.fp", "duration"),
    ("measurements.fcp", "duration"),
    ("measurements.lcp", "duration"),
    ("measurements.fid", "duration"),
    ("measurements.cls", "number"),
    ("measurements.ttfb", "duration"),
    ("measurements.ttfb.requesttime", "duration"),
];

pub const SPAN_OP_BREAKDOWN_FIELDS: &[&str] = &[
    "spans.http",
    "spans.db",
    "spans.browser",
    "spans.resource",
];

pub fn aggregation(name: &str) -> Option<&'static AggregateDefinition> {
    AGGREGATIONS.iter().find(|a| a.name == name)
}

pub fn field_type(name: &str) -> Option<OutputType> {
    FIELDS
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, ty)| OutputType::from(*ty))
}

pub fn is_measurement(field: &str) -> bool {
    field.starts_with("measurements.")
}

pub fn is_span_operation_breakdown(field: &str) -> bool {
    field.starts_with("spans.")
}

/// Known measurements have a declared type; any other measurement is numeric
pub fn measurement_type(field: &str) -> OutputType {
    MEASUREMENTS
        .iter()
        .find(|(m, _)| *m == field)
        .map(|(_, ty)| OutputType::from(*ty))
        .unwrap_or(OutputType::Number)
}

/// The output type of `function(field)`.
///
/// A function with a fixed output type wins; otherwise the type follows the
/// column argument, falling back to the parameter's default when the
/// argument is absent and optional.
pub fn aggregate_output_type(function: &str, field: Option<&str>) -> Option<OutputType> {
    let definition = aggregation(function);
    if let Some(fixed) = definition.and_then(|d| d.output_type()) {
        return Some(fixed);
    }

    let field = match field.filter(|f| !f.is_empty()) {
        Some(field) => Some(field),
        None => definition
            .and_then(|d| d.parameters.first())
            .filter(|p| !p.required)
            .and_then(|p| p.default_value),
    }?;

    if let Some(ty) = field_type(field) {
        return Some(ty);
    }
    if is_measurement(field) {
        return Some(measurement_type(field));
    }
    if is_span_operation_breakdown(field) {
        return Some(OutputType::Duration);
    }
    None
}
