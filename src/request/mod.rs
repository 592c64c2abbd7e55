//! Request builder (verb module)
//!
//! WidgetQuery + Settings + PageFilters → endpoint-specific request
//! parameters for the tabular, geo and time-series endpoints.

mod build;
pub mod interval;
mod params;

pub use build::{build_series_request, build_table_request, build_world_map_request};
pub use interval::{widget_interval, Fidelity};
pub use params::{
    Endpoint, EventsRequest, SeriesRequest, TablePage, TableRequest, METRICS_ENHANCED_DATASET,
};
