use serde_json::Value;
use tracing::debug;
use crate::field::aggregate_alias;
use crate::response::{decode_stats, EventsStats, Series, SeriesDataPoint, StatsResponse};
use crate::settings::Organization;
use crate::widget::WidgetQuery;
use super::flatten::SeriesFlattener;
use super::units::unit_scale;

/// Turn one stats payload into a named series.
///
/// `field` is the aggregate the payload holds; its alias keys the unit and
/// type lookups in the payload's meta.
pub fn transform_stats(stats: &EventsStats, series_name: String, field: &str) -> Series {
    let alias = aggregate_alias(field);
    let scale = unit_scale(stats.unit(&alias));
    Series {
        series_name,
        data: stats
            .data
            .iter()
            .map(|bucket| SeriesDataPoint {
                name: bucket.timestamp_ms(),
                value: bucket.total() * scale,
            })
            .collect(),
        output_type: stats.field_type(&alias).cloned(),
    }
}

fn prefixed(alias: Option<&str>, name: &str) -> String {
    match alias {
        Some(alias) => format!("{} : {}", alias, name),
        None => name.to_string(),
    }
}

/// Reshape an `events-stats` response into series ordered for display.
///
/// Multi-series output is sorted by each payload's `order`, keeping response
/// order for ties. Malformed input yields no series.
pub fn transform_series(
    raw: &Value,
    query: &WidgetQuery,
    organization: &Organization,
    flattener: &dyn SeriesFlattener,
) -> Vec<Series> {
    let Some(response) = StatsResponse::from_value(raw) else {
        debug!("stats response is malformed, returning no series");
        return vec![];
    };
    let alias = query.alias();

    match response {
        StatsResponse::Single(stats) => {
            let Some(field) = query.aggregates.first() else {
                debug!("single series response for a query without aggregates");
                return vec![];
            };
            vec![transform_stats(&stats, prefixed(alias, field), field)]
        }
        StatsResponse::Multi(entries) => {
            let grouped = query.aggregates.len() > 1 && query.is_grouped();
            let mut ordered = if grouped && organization.features.new_widget_builder() {
                flattener.flatten(&entries, alias)
            } else {
                entries
                    .iter()
                    .map(|(name, payload)| {
                        let stats = decode_stats(payload).unwrap_or_else(|| {
                            debug!(series = %name, "series payload is malformed");
                            EventsStats::default()
                        });
                        (stats.order(), transform_stats(&stats, prefixed(alias, name), name))
                    })
                    .collect::<Vec<_>>()
            };
            ordered.sort_by(|a, b| a.0.total_cmp(&b.0));
            ordered.into_iter().map(|(_, series)| series).collect()
        }
    }
}
