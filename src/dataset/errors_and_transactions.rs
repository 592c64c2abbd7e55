use std::collections::BTreeMap;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use crate::classifier::QueryFieldValue;
use crate::client::{execute_request, ClientError, EventsClient};
use crate::field::OutputType;
use crate::options::{self, FieldValueOption, SelectValue};
use crate::render::{custom_field_renderer, FieldRenderer};
use crate::request::{
    build_series_request, build_table_request, build_world_map_request, EventsRequest, TablePage,
};
use crate::response::{Series, TableData};
use crate::settings::Settings;
use crate::transform::{self, GroupedFlattener, SeriesFlattener};
use crate::widget::{DisplayType, PageFilters, Widget, WidgetQuery};
use super::{DatasetConfig, OptionFilter};

const SUPPORTED_DISPLAY_TYPES: &[DisplayType] = &[
    DisplayType::Area,
    DisplayType::Bar,
    DisplayType::Line,
    DisplayType::Table,
    DisplayType::WorldMap,
    DisplayType::BigNumber,
    DisplayType::TopN,
];

/// The errors and transactions dataset
pub struct ErrorsAndTransactionsConfig {
    settings: Settings,
    flattener: Box<dyn SeriesFlattener>,
}

impl ErrorsAndTransactionsConfig {
    pub fn new(settings: Settings) -> Self {
        Self::with_flattener(settings, Box::new(GroupedFlattener))
    }

    pub fn with_flattener(settings: Settings, flattener: Box<dyn SeriesFlattener>) -> Self {
        Self { settings, flattener }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[async_trait]
impl DatasetConfig for ErrorsAndTransactionsConfig {
    fn supported_display_types(&self) -> &'static [DisplayType] {
        SUPPORTED_DISPLAY_TYPES
    }

    fn default_widget_query(&self) -> WidgetQuery {
        WidgetQuery {
            aggregates: vec!["count()".to_string()],
            orderby: "-count()".to_string(),
            ..Default::default()
        }
    }

    fn enable_equations(&self) -> bool {
        true
    }

    async fn table_request(
        &self,
        client: &dyn EventsClient,
        query: &WidgetQuery,
        page_filters: &PageFilters,
        page: &TablePage,
    ) -> Result<Value, ClientError> {
        let request = build_table_request(query, &self.settings, page_filters, page);
        execute_request(client, &EventsRequest::Table(request)).await
    }

    async fn world_map_request(
        &self,
        client: &dyn EventsClient,
        query: &WidgetQuery,
        page_filters: &PageFilters,
        page: &TablePage,
    ) -> Result<Value, ClientError> {
        let request = build_world_map_request(query, &self.settings, page_filters, page);
        execute_request(client, &EventsRequest::Table(request)).await
    }

    async fn series_request(
        &self,
        client: &dyn EventsClient,
        widget: &Widget,
        query_index: usize,
        page_filters: &PageFilters,
        referrer: Option<&str>,
    ) -> Result<Option<Value>, ClientError> {
        let Some(request) = build_series_request(widget, query_index, &self.settings, page_filters, referrer) else {
            debug!(query_index, queries = widget.queries.len(), "no query at index");
            return Ok(None);
        };
        execute_request(client, &EventsRequest::Series(request)).await.map(Some)
    }

    fn transform_table(&self, raw: &Value, query: &WidgetQuery) -> TableData {
        transform::transform_table(raw, query, &self.settings.organization)
    }

    fn transform_series(&self, raw: &Value, query: &WidgetQuery) -> Vec<Series> {
        transform::transform_series(raw, query, &self.settings.organization, self.flattener.as_ref())
    }

    fn series_result_type(&self, raw: &Value, query: &WidgetQuery) -> BTreeMap<String, OutputType> {
        transform::series_result_type(raw, query)
    }

    fn table_field_options(&self, tag_keys: &[String]) -> BTreeMap<String, FieldValueOption> {
        options::table_field_options(&self.settings.organization, tag_keys, &self.settings.custom_measurements)
    }

    fn group_by_options(&self, tag_keys: &[String], display: DisplayType) -> BTreeMap<String, FieldValueOption> {
        options::group_by_options(&self.settings.organization, tag_keys, display)
    }

    fn table_sort_options(&self, query: &WidgetQuery) -> Vec<SelectValue> {
        options::table_sort_options(query)
    }

    fn timeseries_sort_options(&self, query: &WidgetQuery, tag_keys: &[String]) -> BTreeMap<String, FieldValueOption> {
        options::timeseries_sort_options(
            &self.settings.organization,
            query,
            tag_keys,
            &self.settings.custom_measurements,
        )
    }

    fn filter_series_sort_options(&self, query: &WidgetQuery) -> OptionFilter<'static> {
        Box::new(options::filter_series_sort_options(&query.columns))
    }

    fn filter_y_axis_options(&self, display: DisplayType) -> OptionFilter<'static> {
        Box::new(options::filter_y_axis_options(display))
    }

    fn filter_y_axis_aggregate_params<'a>(&self, field_value: &'a QueryFieldValue, display: DisplayType) -> OptionFilter<'a> {
        Box::new(options::filter_y_axis_aggregate_params(field_value, display))
    }

    fn filter_table_column_options(&self) -> OptionFilter<'static> {
        Box::new(options::filter_table_column_options)
    }

    fn field_renderer(&self, field: &str) -> FieldRenderer {
        custom_field_renderer(field)
    }

    fn handle_orderby_reset(&self, query: &WidgetQuery, new_fields: &[String]) -> WidgetQuery {
        options::handle_orderby_reset(query, new_fields)
    }
}
