use std::collections::BTreeMap;
use crate::settings::{CustomMeasurements, Organization};
use crate::widget::DisplayType;
use super::field_options::table_field_options;
use super::types::{FieldValueKind, FieldValueOption};

/// Columns a widget can group by.
///
/// Only column-like values qualify. Displays that cannot group get nothing.
pub fn group_by_options(
    organization: &Organization,
    tag_keys: &[String],
    display: DisplayType,
) -> BTreeMap<String, FieldValueOption> {
    if !display.supports_grouping() {
        return BTreeMap::new();
    }
    table_field_options(organization, tag_keys, &CustomMeasurements::default())
        .into_iter()
        .filter(|(_, option)| {
            matches!(
                option.value.kind(),
                FieldValueKind::Field
                    | FieldValueKind::Tag
                    | FieldValueKind::Measurement
                    | FieldValueKind::Breakdown
            )
        })
        .collect()
}
