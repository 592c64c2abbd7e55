use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use crate::field::OutputType;

/// One `{count}` entry of a bucket
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CountEntry {
    #[serde(default)]
    pub count: Option<f64>,
}

/// `[timestamp_seconds, [{count}, ...]]`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatsBucket(pub f64, pub Vec<CountEntry>);

impl StatsBucket {
    pub fn timestamp_ms(&self) -> i64 {
        (self.0 * 1000.0) as i64
    }

    /// Sum of the bucket's counts; null counts contribute nothing
    pub fn total(&self) -> f64 {
        self.1.iter().filter_map(|c| c.count).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StatsMeta {
    #[serde(default)]
    pub fields: BTreeMap<String, OutputType>,
    #[serde(default)]
    pub units: BTreeMap<String, Option<String>>,
    #[serde(rename = "isMetricsData", default, skip_serializing_if = "Option::is_none")]
    pub is_metrics_data: Option<bool>,
}

/// A single time series payload from `events-stats`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EventsStats {
    #[serde(default)]
    pub data: Vec<StatsBucket>,
    /// Position among sibling series; lower sorts first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<StatsMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(rename = "isMetricsData", default, skip_serializing_if = "Option::is_none")]
    pub is_metrics_data: Option<bool>,
}

impl EventsStats {
    pub fn order(&self) -> f64 {
        self.order.unwrap_or(0.0)
    }

    pub fn field_type(&self, alias: &str) -> Option<&OutputType> {
        self.meta.as_ref()?.fields.get(alias)
    }

    pub fn unit(&self, alias: &str) -> Option<&str> {
        self.meta.as_ref()?.units.get(alias)?.as_deref()
    }
}

/// The two shapes `events-stats` answers with
#[derive(Debug, Clone, PartialEq)]
pub enum StatsResponse {
    /// One series: the payload itself carries `data`
    Single(EventsStats),
    /// A map of label to payload, in response order. Values are left raw:
    /// for grouped queries they nest one payload per aggregate.
    Multi(Vec<(String, Value)>),
}

impl StatsResponse {
    /// Detect the response shape. Anything that isn't a JSON object is
    /// `None`; a single payload that fails to decode is `None` as well.
    pub fn from_value(raw: &Value) -> Option<Self> {
        let object = raw.as_object()?;
        if object.contains_key("data") {
            return serde_json::from_value(raw.clone()).ok().map(StatsResponse::Single);
        }
        Some(StatsResponse::Multi(
            object.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        ))
    }
}

/// Decode one payload of a multi-series response
pub fn decode_stats(raw: &Value) -> Option<EventsStats> {
    serde_json::from_value(raw.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_payload() {
        let raw = json!({
            "data": [[1650000000, [{"count": 2}, {"count": 3}]], [1650000060, [{"count": null}]]],
            "meta": {"fields": {"count": "integer"}, "units": {"count": null}}
        });
        let Some(StatsResponse::Single(stats)) = StatsResponse::from_value(&raw) else {
            panic!("expected a single series");
        };
        assert_eq!(stats.data.len(), 2);
        assert_eq!(stats.data[0].timestamp_ms(), 1_650_000_000_000);
        assert_eq!(stats.data[0].total(), 5.0);
        assert_eq!(stats.data[1].total(), 0.0);
        assert_eq!(stats.field_type("count"), Some(&OutputType::Integer));
        assert_eq!(stats.unit("count"), None);
        assert_eq!(stats.order(), 0.0);
    }

    #[test]
    fn test_multi_payload_keeps_response_order() {
        let raw = json!({
            "p95()": {"data": [], "order": 1},
            "count()": {"data": [], "order": 0}
        });
        let Some(StatsResponse::Multi(entries)) = StatsResponse::from_value(&raw) else {
            panic!("expected multiple series");
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["p95()", "count()"]);
    }

    #[test]
    fn test_not_an_object() {
        assert!(StatsResponse::from_value(&json!([1, 2])).is_none());
        assert!(StatsResponse::from_value(&json!({"data": "nope"})).is_none());
    }
}
