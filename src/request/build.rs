use tracing::debug;
use crate::field::{equation_alias, equation_count, is_equation, is_equation_alias, split_orderby};
use crate::settings::{Organization, Settings};
use crate::widget::{DisplayType, PageFilters, Widget, WidgetQuery};
use super::interval::widget_interval;
use super::params::{Endpoint, SeriesRequest, TablePage, TableRequest, METRICS_ENHANCED_DATASET};

fn mep_dataset(organization: &Organization) -> Option<String> {
    organization
        .features
        .mep_enabled()
        .then(|| METRICS_ENHANCED_DATASET.to_string())
}

fn table_endpoint(organization: &Organization) -> Endpoint {
    if organization.features.use_events_endpoint() {
        Endpoint::Events(organization.slug.clone())
    } else {
        Endpoint::EventsV2(organization.slug.clone())
    }
}

fn tabular_request(
    endpoint: Endpoint,
    field: Vec<String>,
    query: &WidgetQuery,
    settings: &Settings,
    page_filters: &PageFilters,
    page: &TablePage,
) -> TableRequest {
    let referrer = page.referrer.clone().or_else(|| settings.table_referrer.clone());
    TableRequest {
        endpoint,
        field,
        query: query.conditions.clone(),
        project: page_filters.projects.clone(),
        environment: page_filters.environments.clone(),
        period: page_filters.datetime.period_params(),
        sort: query.orderby().map(|o| vec![o.to_string()]).unwrap_or_default(),
        per_page: page.limit,
        cursor: page.cursor.clone(),
        referrer,
        dataset: mep_dataset(&settings.organization),
    }
}

/// Build a tabular request for a widget query
pub fn build_table_request(
    query: &WidgetQuery,
    settings: &Settings,
    page_filters: &PageFilters,
    page: &TablePage,
) -> TableRequest {
    let endpoint = table_endpoint(&settings.organization);
    debug!(endpoint = %endpoint, fields = query.columns.len() + query.aggregates.len(), "building table request");
    tabular_request(endpoint, query.fields(), query, settings, page_filters, page)
}

/// Build a geo request. The geo endpoint takes the aggregate only; results
/// are always keyed by country code.
pub fn build_world_map_request(
    query: &WidgetQuery,
    settings: &Settings,
    page_filters: &PageFilters,
    page: &TablePage,
) -> TableRequest {
    let endpoint = Endpoint::EventsGeo(settings.organization.slug.clone());
    debug!(endpoint = %endpoint, "building world map request");
    tabular_request(endpoint, query.aggregates.clone(), query, settings, page_filters, page)
}

/// Build the `events-stats` request for one query of a widget.
///
/// Returns `None` when `query_index` is out of range.
pub fn build_series_request(
    widget: &Widget,
    query_index: usize,
    settings: &Settings,
    page_filters: &PageFilters,
    referrer: Option<&str>,
) -> Option<SeriesRequest> {
    let query = widget.queries.get(query_index)?;
    let datetime = &page_filters.datetime;

    let mut request = SeriesRequest {
        endpoint: Endpoint::EventsStats(settings.organization.slug.clone()),
        interval: widget_interval(widget.display_type, datetime, &widget.interval),
        period: datetime.period_params(),
        project: page_filters.projects.clone(),
        environment: page_filters.environments.clone(),
        query: query.conditions.clone(),
        y_axis: query.aggregates.clone(),
        field: vec![],
        top_events: None,
        orderby: query.orderby().map(str::to_string),
        exclude_other: None,
        partial: true,
        include_all_args: true,
        include_previous: false,
        referrer: referrer
            .map(str::to_string)
            .unwrap_or_else(|| settings.series_referrer.clone()),
        dataset: mep_dataset(&settings.organization),
    };

    if widget.display_type == DisplayType::TopN {
        // The last aggregate is the plotted one; the others only rank groups
        request.y_axis = query.aggregates.last().cloned().into_iter().collect();
        request.field = query.fields();
        request.top_events = Some(settings.top_events);
    } else if query.is_grouped() {
        apply_grouping(&mut request, widget, query, settings);
    }

    debug!(
        endpoint = %request.endpoint,
        display = %widget.display_type,
        interval = %request.interval,
        top_events = ?request.top_events,
        "built series request"
    );
    Some(request)
}

fn apply_grouping(request: &mut SeriesRequest, widget: &Widget, query: &WidgetQuery, settings: &Settings) {
    request.top_events = Some(widget.limit.unwrap_or(settings.top_events));
    request.field = query.fields();

    // The sort field has to be selected, unless it is an equation alias the
    // server derives on its own.
    let bare = query.bare_orderby();
    if !bare.is_empty() && !is_equation_alias(bare) && !request.field.iter().any(|f| f == bare) {
        request.field.push(bare.to_string());
    }

    // "Other" only makes sense with a single y-axis and a single query
    request.exclude_other = Some(query.aggregates.len() != 1 || widget.queries.len() != 1);

    if is_equation(bare) {
        let (_, descending) = split_orderby(&query.orderby);
        let alias = equation_alias(equation_count(&query.aggregates));
        let prefix = if descending { "-" } else { "" };
        request.orderby = Some(format!("{}{}", prefix, alias));
        let mut field = query.fields();
        field.push(bare.to_string());
        request.field = field;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::EventsRequest;
    use crate::settings::{FeatureSet, DASHBOARDS_MEP, USE_EVENTS_ENDPOINT};

    fn settings(features: &[&str]) -> Settings {
        Settings::for_organization(Organization::new("acme", FeatureSet::new(features.iter().copied())))
    }

    fn query(columns: &[&str], aggregates: &[&str], orderby: &str) -> WidgetQuery {
        WidgetQuery {
            columns: columns.iter().map(|s| s.to_string()).collect(),
            aggregates: aggregates.iter().map(|s| s.to_string()).collect(),
            orderby: orderby.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_table_request_passes_page_through() {
        let q = query(&["title"], &["count()"], "-count()");
        let page = TablePage {
            limit: Some(20),
            cursor: Some("0:20:0".to_string()),
            referrer: Some("api.dashboards.tablewidget".to_string()),
        };
        let request = build_table_request(&q, &settings(&[]), &PageFilters::default(), &page);
        assert_eq!(request.endpoint, Endpoint::EventsV2("acme".to_string()));
        assert_eq!(request.field, vec!["title", "count()"]);
        assert_eq!(request.sort, vec!["-count()"]);
        assert_eq!(request.per_page, Some(20));
        assert_eq!(request.cursor.as_deref(), Some("0:20:0"));
        assert!(request.dataset.is_none());
    }

    #[test]
    fn test_table_request_with_flags() {
        let q = query(&["title"], &["count()"], "");
        let request = build_table_request(
            &q,
            &settings(&[DASHBOARDS_MEP, USE_EVENTS_ENDPOINT]),
            &PageFilters::default(),
            &TablePage::default(),
        );
        assert_eq!(request.endpoint, Endpoint::Events("acme".to_string()));
        assert_eq!(request.dataset.as_deref(), Some("metricsEnhanced"));
        assert!(request.sort.is_empty());
    }

    #[test]
    fn test_world_map_request_selects_aggregates_only() {
        let q = query(&[], &["count()"], "");
        let request = build_world_map_request(&q, &settings(&[]), &PageFilters::default(), &TablePage::default());
        assert_eq!(request.endpoint, Endpoint::EventsGeo("acme".to_string()));
        assert_eq!(request.field, vec!["count()"]);
    }

    #[test]
    fn test_series_index_out_of_range() {
        let widget = Widget::new(DisplayType::Line, vec![query(&[], &["count()"], "")]);
        assert!(build_series_request(&widget, 1, &settings(&[]), &PageFilters::default(), None).is_none());
    }

    #[test]
    fn test_ungrouped_series_request() {
        let widget = Widget::new(DisplayType::Line, vec![query(&[], &["count()", "p95()"], "")]);
        let request = build_series_request(&widget, 0, &settings(&[]), &PageFilters::default(), None).unwrap();
        assert_eq!(request.y_axis, vec!["count()", "p95()"]);
        assert!(request.field.is_empty());
        assert!(request.top_events.is_none());
        assert!(request.exclude_other.is_none());
        assert!(request.orderby.is_none());
        assert_eq!(request.referrer, "api.organization-event-stats");
        assert!(request.include_all_args);
        assert!(!request.include_previous);

        let pairs = EventsRequest::Series(request).query_pairs();
        assert!(pairs.contains(&("includeAllArgs".to_string(), "1".to_string())));
        assert!(pairs.contains(&("partial".to_string(), "1".to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "includePrevious"));
    }

    #[test]
    fn test_top_n_uses_last_aggregate() {
        let widget = Widget::new(
            DisplayType::TopN,
            vec![query(&["transaction"], &["count()", "p75(transaction.duration)"], "-count()")],
        );
        let request = build_series_request(&widget, 0, &settings(&[]), &PageFilters::default(), None).unwrap();
        assert_eq!(request.y_axis, vec!["p75(transaction.duration)"]);
        assert_eq!(request.field, vec!["transaction", "count()", "p75(transaction.duration)"]);
        assert_eq!(request.top_events, Some(5));
        assert_eq!(request.orderby.as_deref(), Some("-count()"));
        assert!(request.exclude_other.is_none());
    }

    #[test]
    fn test_grouped_equation_alias_orderby_not_selected() {
        let widget = Widget::new(
            DisplayType::Line,
            vec![query(&["browser"], &["count()", "equation|count() * 2"], "-equation[0]")],
        );
        let request = build_series_request(&widget, 0, &settings(&[]), &PageFilters::default(), None).unwrap();
        assert_eq!(request.field, vec!["browser", "count()", "equation|count() * 2"]);
        assert_eq!(request.orderby.as_deref(), Some("-equation[0]"));
    }

    #[test]
    fn test_widget_limit_overrides_default() {
        let mut widget = Widget::new(DisplayType::Area, vec![query(&["browser"], &["count()"], "")]);
        widget.limit = Some(3);
        let request = build_series_request(&widget, 0, &settings(&[]), &PageFilters::default(), None).unwrap();
        assert_eq!(request.top_events, Some(3));
        assert_eq!(request.exclude_other, Some(false));
    }
}
