use serde_json::{Map, Value};
use tracing::debug;
use crate::response::TableData;
use crate::settings::Organization;
use crate::widget::WidgetQuery;

/// Reshape a tabular response into canonical table data.
///
/// The `/events/` endpoint nests field types under `meta.fields`; they are
/// lifted to the top of `meta`, with the remaining meta keys winning on
/// collision. Responses from `/eventsv2/` already have that shape and pass
/// through untouched.
pub fn transform_table(raw: &Value, _query: &WidgetQuery, organization: &Organization) -> TableData {
    let mut table: TableData = match serde_json::from_value(raw.clone()) {
        Ok(table) => table,
        Err(err) => {
            debug!(error = %err, "table response is malformed, returning empty table");
            return TableData::default();
        }
    };

    if organization.features.use_events_endpoint() {
        table.meta = Some(flatten_meta(table.meta.take().unwrap_or_default()));
    }
    table
}

fn flatten_meta(mut meta: Map<String, Value>) -> Map<String, Value> {
    let fields = match meta.remove("fields") {
        Some(Value::Object(fields)) => fields,
        _ => Map::new(),
    };
    let mut flattened = fields;
    flattened.extend(meta);
    flattened
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::settings::{FeatureSet, USE_EVENTS_ENDPOINT};

    fn org(features: &[&str]) -> Organization {
        Organization::new("acme", FeatureSet::new(features.iter().copied()))
    }

    #[test]
    fn test_events_meta_is_flattened() {
        let raw = json!({
            "data": [{"count": 3}],
            "meta": {"fields": {"count": "integer"}, "isMetricsData": true}
        });
        let table = transform_table(&raw, &WidgetQuery::default(), &org(&[USE_EVENTS_ENDPOINT]));
        assert_eq!(
            Value::Object(table.meta.clone().unwrap()),
            json!({"count": "integer", "isMetricsData": true})
        );
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.field_type("count"), Some("integer"));
    }

    #[test]
    fn test_other_meta_keys_win() {
        let raw = json!({"data": [], "meta": {"fields": {"units": "string"}, "units": {}}});
        let table = transform_table(&raw, &WidgetQuery::default(), &org(&[USE_EVENTS_ENDPOINT]));
        assert_eq!(table.meta.unwrap()["units"], json!({}));
    }

    #[test]
    fn test_missing_meta_becomes_empty() {
        let raw = json!({"data": []});
        let table = transform_table(&raw, &WidgetQuery::default(), &org(&[USE_EVENTS_ENDPOINT]));
        assert_eq!(table.meta, Some(Map::new()));
    }

    #[test]
    fn test_passthrough_without_flag() {
        let raw = json!({
            "data": [{"title": "boom", "count": 3}],
            "meta": {"title": "string", "count": "integer"},
            "isMetricsData": false
        });
        let table = transform_table(&raw, &WidgetQuery::default(), &org(&[]));
        assert_eq!(serde_json::to_value(&table).unwrap(), raw);
    }

    #[test]
    fn test_malformed_table() {
        let table = transform_table(&json!({"data": 7}), &WidgetQuery::default(), &org(&[]));
        assert_eq!(table, TableData::default());
    }
}
