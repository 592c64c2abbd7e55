use std::collections::BTreeMap;
use crate::field::catalog::{AGGREGATIONS, FIELDS, MEASUREMENTS, SPAN_OP_BREAKDOWN_FIELDS};
use crate::field::OutputType;
use crate::settings::{CustomMeasurements, Organization};
use super::types::{FieldValue, FieldValueOption};

/// Every field, tag, measurement, breakdown and function a table or y-axis
/// can select, keyed `<kind>:<name>`.
///
/// Tags that shadow a built-in field are dropped. Custom measurements are
/// only offered with metrics-enhanced performance, and replace a built-in
/// measurement of the same key.
pub fn table_field_options(
    organization: &Organization,
    tag_keys: &[String],
    custom_measurements: &CustomMeasurements,
) -> BTreeMap<String, FieldValueOption> {
    let mut options = BTreeMap::new();

    for aggregate in AGGREGATIONS {
        options.insert(
            format!("function:{}", aggregate.name),
            FieldValueOption {
                label: format!("{}(\u{2026})", aggregate.name),
                value: FieldValue::Function {
                    name: aggregate.name.to_string(),
                    parameters: aggregate.parameters,
                },
            },
        );
    }

    for (name, ty) in FIELDS {
        options.insert(
            format!("field:{}", name),
            FieldValueOption {
                label: name.to_string(),
                value: FieldValue::Field {
                    name: name.to_string(),
                    data_type: OutputType::from(*ty),
                },
            },
        );
    }

    for tag in tag_keys {
        if options.contains_key(&format!("field:{}", tag)) {
            continue;
        }
        options.insert(
            format!("tag:{}", tag),
            FieldValueOption {
                label: tag.clone(),
                value: FieldValue::Tag { name: tag.clone() },
            },
        );
    }

    for (name, ty) in MEASUREMENTS {
        options.insert(
            format!("measurement:{}", name),
            FieldValueOption {
                label: name.to_string(),
                value: FieldValue::Measurement {
                    name: name.to_string(),
                    data_type: OutputType::from(*ty),
                },
            },
        );
    }

    for name in SPAN_OP_BREAKDOWN_FIELDS {
        options.insert(
            format!("span_op_breakdown:{}", name),
            FieldValueOption {
                label: name.to_string(),
                value: FieldValue::Breakdown { name: name.to_string() },
            },
        );
    }

    if organization.features.mep_enabled() {
        for measurement in custom_measurements.iter() {
            options.insert(
                format!("measurement:{}", measurement.key),
                FieldValueOption {
                    label: measurement.key.clone(),
                    value: FieldValue::CustomMeasurement {
                        name: measurement.key.clone(),
                        data_type: measurement.field_type.clone().unwrap_or(OutputType::Number),
                        functions: measurement.functions.clone(),
                    },
                },
            );
        }
    }

    options
}
