//! Flattening of grouped multi-aggregate series
//!
//! A grouped query with several aggregates answers with one entry per group,
//! each nesting one payload per aggregate next to the group's `order`:
//!
//! ```text
//! { "Chrome": { "count()": {...}, "p95()": {...}, "order": 0 }, ... }
//! ```

use serde_json::Value;
use tracing::debug;
use crate::response::{decode_stats, Series};
use super::series::transform_stats;

/// Turns a grouped multi-series response into `(order, series)` pairs.
///
/// The caller sorts the pairs by order; implementations only need to assign
/// each series its order.
pub trait SeriesFlattener: Send + Sync {
    fn flatten(&self, entries: &[(String, Value)], query_alias: Option<&str>) -> Vec<(f64, Series)>;
}

/// Emits `"<group> : <aggregate>"` for every group and aggregate, prefixed
/// with `"<alias> > "` when the query has an alias. Every series takes its
/// group's order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedFlattener;

impl SeriesFlattener for GroupedFlattener {
    fn flatten(&self, entries: &[(String, Value)], query_alias: Option<&str>) -> Vec<(f64, Series)> {
        let mut flattened = Vec::new();

        for (group, payload) in entries {
            let Some(aggregates) = payload.as_object() else {
                debug!(group = %group, "skipping group that is not an object");
                continue;
            };
            let order = aggregates.get("order").and_then(Value::as_f64).unwrap_or(0.0);

            for (aggregate, stats) in aggregates.iter().filter(|(k, _)| k.as_str() != "order") {
                let series_name = format!("{} : {}", group, aggregate);
                let prefixed = match query_alias {
                    Some(alias) => format!("{} > {}", alias, series_name),
                    None => series_name,
                };
                let stats = decode_stats(stats).unwrap_or_default();
                flattened.push((order, transform_stats(&stats, prefixed, aggregate)));
            }
        }
        flattened
    }
}
