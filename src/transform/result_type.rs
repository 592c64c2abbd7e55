use serde_json::Value;
use std::collections::BTreeMap;
use crate::field::{aggregate_alias, OutputType};
use crate::response::{decode_stats, EventsStats, StatsResponse};
use crate::widget::WidgetQuery;

fn lookup(stats: &EventsStats, key: &str) -> Option<OutputType> {
    stats.field_type(&aggregate_alias(key)).cloned()
}

/// Output type of each series, keyed the way `transform_series` names them
/// before any alias prefix.
///
/// Types are read from `meta.fields` under the same alias the request used,
/// so request and meta keys line up. Series without a declared type are
/// left out.
pub fn series_result_type(raw: &Value, query: &WidgetQuery) -> BTreeMap<String, OutputType> {
    let mut types = BTreeMap::new();
    let Some(response) = StatsResponse::from_value(raw) else {
        return types;
    };

    match response {
        StatsResponse::Single(stats) => {
            if let Some(field) = query.aggregates.first() {
                if let Some(ty) = lookup(&stats, field) {
                    types.insert(field.clone(), ty);
                }
            }
        }
        StatsResponse::Multi(entries) if query.aggregates.len() > 1 && query.is_grouped() => {
            // Every group carries the same aggregates; the first one is enough
            let Some(group) = entries.first().and_then(|(_, g)| g.as_object()) else {
                return types;
            };
            for (aggregate, payload) in group.iter().filter(|(k, _)| k.as_str() != "order") {
                if let Some(ty) = decode_stats(payload).and_then(|s| lookup(&s, aggregate)) {
                    types.insert(aggregate.clone(), ty);
                }
            }
        }
        StatsResponse::Multi(entries) => {
            for (key, payload) in &entries {
                if let Some(ty) = decode_stats(payload).and_then(|s| lookup(&s, key)) {
                    types.insert(key.clone(), ty);
                }
            }
        }
    }
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(columns: &[&str], aggregates: &[&str]) -> WidgetQuery {
        WidgetQuery {
            columns: columns.iter().map(|s| s.to_string()).collect(),
            aggregates: aggregates.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_result_type() {
        let raw = json!({"data": [], "meta": {"fields": {"p95_transaction_duration": "duration"}}});
        let types = series_result_type(&raw, &query(&[], &["p95(transaction.duration)"]));
        assert_eq!(types.get("p95(transaction.duration)"), Some(&OutputType::Duration));
    }

    #[test]
    fn test_multi_result_types() {
        let raw = json!({
            "count()": {"data": [], "meta": {"fields": {"count": "integer"}}},
            "failure_rate()": {"data": [], "meta": {"fields": {"failure_rate": "percentage"}}},
            "epm()": {"data": []}
        });
        let types = series_result_type(&raw, &query(&[], &["count()", "failure_rate()", "epm()"]));
        assert_eq!(types.len(), 2);
        assert_eq!(types["count()"], OutputType::Integer);
        assert_eq!(types["failure_rate()"], OutputType::Percentage);
    }

    #[test]
    fn test_grouped_result_types() {
        let raw = json!({
            "Chrome": {
                "count()": {"data": [], "meta": {"fields": {"count": "integer"}}},
                "p50()": {"data": [], "meta": {"fields": {"p50": "duration"}}},
                "order": 0
            }
        });
        let types = series_result_type(&raw, &query(&["browser.name"], &["count()", "p50()"]));
        assert_eq!(types["count()"], OutputType::Integer);
        assert_eq!(types["p50()"], OutputType::Duration);
    }

    #[test]
    fn test_malformed_result_type() {
        assert!(series_result_type(&json!("nope"), &query(&[], &["count()"])).is_empty());
    }
}
