//! dashquery - Dashboard widget queries to events API requests and back
//!
//! This library provides:
//! - Widget, query and page filter types
//! - Settings parsing from YAML (organization, feature flags, custom measurements)
//! - Field classification (fields, functions, equations, custom measurements)
//! - Request building for the tabular, geo and time-series endpoints
//! - Response transformation into tables, ordered chart series and result types
//! - Field options and cell renderers for widget editors
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `settings/` - organization, feature flags, custom measurements
//! - `widget/` - Widget, WidgetQuery, DisplayType, PageFilters
//! - `field/` - field expression grammar, equations, the aggregate catalog
//! - `response/` - raw payload shapes and canonical outputs (TableData, Series)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → Settings
//! - `classifier/` - field expression → FieldKind
//! - `request/` - WidgetQuery + Settings + PageFilters → EventsRequest
//! - `client/` - EventsRequest → raw JSON (through a caller-supplied client)
//! - `transform/` - raw JSON → TableData / Vec<Series> / result types
//! - `options/` - catalog + tags → editor field options
//! - `render/` - table cell → display text and link
//!
//! `dataset/` ties them together behind the `DatasetConfig` trait.
//!
//! # Example
//!
//! ```ignore
//! use dashquery::{DatasetConfig, ErrorsAndTransactionsConfig, Settings, Widget};
//!
//! let settings = Settings::from_file("settings.yaml")?;
//! let dataset = ErrorsAndTransactionsConfig::new(settings);
//! let raw = dataset.series_request(&client, &widget, 0, &page_filters, None).await?;
//! let series = dataset.transform_series(&raw.unwrap_or_default(), &widget.queries[0]);
//! ```

pub mod settings;
pub mod widget;
pub mod field;
pub mod response;
pub mod parser;
pub mod classifier;
pub mod request;
pub mod client;
pub mod transform;
pub mod options;
pub mod render;
pub mod dataset;
pub mod error;

// Re-export commonly used types
pub use settings::{CustomMeasurement, CustomMeasurements, FeatureSet, Organization, Settings};
pub use widget::{DateTimeSelection, DisplayType, PageFilters, Widget, WidgetQuery};
pub use field::OutputType;
pub use response::{Series, SeriesDataPoint, TableData};
pub use classifier::{classify, explode_field, FieldKind, QueryFieldValue};
pub use request::{build_series_request, build_table_request, build_world_map_request, EventsRequest, TablePage};
pub use client::{execute_request, ClientError, EventsClient};
pub use transform::{series_result_type, transform_series, transform_table, GroupedFlattener, SeriesFlattener};
pub use render::{custom_field_renderer, FieldRenderer, RenderContext, RenderedCell};
pub use dataset::{DatasetConfig, ErrorsAndTransactionsConfig};
pub use error::ParseError;
