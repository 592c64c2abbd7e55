//! Dataset configuration
//!
//! One object per dataset tying the pieces together: which displays it
//! supports, how its widgets are requested and transformed, and which field
//! options and renderers its editor uses.

mod errors_and_transactions;

use std::collections::BTreeMap;
use async_trait::async_trait;
use serde_json::Value;
use crate::classifier::QueryFieldValue;
use crate::client::{ClientError, EventsClient};
use crate::field::OutputType;
use crate::options::{FieldValueOption, SelectValue};
use crate::render::FieldRenderer;
use crate::request::TablePage;
use crate::response::{Series, TableData};
use crate::widget::{DisplayType, PageFilters, Widget, WidgetQuery};

pub use errors_and_transactions::ErrorsAndTransactionsConfig;

/// A predicate over field options
pub type OptionFilter<'a> = Box<dyn Fn(&FieldValueOption) -> bool + Send + Sync + 'a>;

#[async_trait]
pub trait DatasetConfig: Send + Sync {
    fn supported_display_types(&self) -> &'static [DisplayType];

    /// Query a new widget starts with
    fn default_widget_query(&self) -> WidgetQuery;

    fn enable_equations(&self) -> bool;

    async fn table_request(
        &self,
        client: &dyn EventsClient,
        query: &WidgetQuery,
        page_filters: &PageFilters,
        page: &TablePage,
    ) -> Result<Value, ClientError>;

    async fn world_map_request(
        &self,
        client: &dyn EventsClient,
        query: &WidgetQuery,
        page_filters: &PageFilters,
        page: &TablePage,
    ) -> Result<Value, ClientError>;

    /// Fetch the series of one query of `widget`; `None` when the widget has
    /// no query at `query_index`.
    async fn series_request(
        &self,
        client: &dyn EventsClient,
        widget: &Widget,
        query_index: usize,
        page_filters: &PageFilters,
        referrer: Option<&str>,
    ) -> Result<Option<Value>, ClientError>;

    fn transform_table(&self, raw: &Value, query: &WidgetQuery) -> TableData;

    fn transform_series(&self, raw: &Value, query: &WidgetQuery) -> Vec<Series>;

    fn series_result_type(&self, raw: &Value, query: &WidgetQuery) -> BTreeMap<String, OutputType>;

    fn table_field_options(&self, tag_keys: &[String]) -> BTreeMap<String, FieldValueOption>;

    fn group_by_options(&self, tag_keys: &[String], display: DisplayType) -> BTreeMap<String, FieldValueOption>;

    fn table_sort_options(&self, query: &WidgetQuery) -> Vec<SelectValue>;

    fn timeseries_sort_options(&self, query: &WidgetQuery, tag_keys: &[String]) -> BTreeMap<String, FieldValueOption>;

    fn filter_series_sort_options(&self, query: &WidgetQuery) -> OptionFilter<'static>;

    fn filter_y_axis_options(&self, display: DisplayType) -> OptionFilter<'static>;

    fn filter_y_axis_aggregate_params<'a>(&self, field_value: &'a QueryFieldValue, display: DisplayType) -> OptionFilter<'a>;

    fn filter_table_column_options(&self) -> OptionFilter<'static>;

    fn field_renderer(&self, field: &str) -> FieldRenderer;

    fn handle_orderby_reset(&self, query: &WidgetQuery, new_fields: &[String]) -> WidgetQuery;
}
