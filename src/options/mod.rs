//! Field option providers
//!
//! Catalog, tags and custom measurements → the options a widget editor offers
//! for y-axes, table columns, group-bys and sort keys.

mod field_options;
mod group_by;
mod orderby;
mod sort;
mod types;
mod yaxis;

pub use field_options::table_field_options;
pub use group_by::group_by_options;
pub use orderby::handle_orderby_reset;
pub use sort::{filter_series_sort_options, table_sort_options, timeseries_sort_options, CUSTOM_EQUATION_VALUE};
pub use types::{FieldValue, FieldValueKind, FieldValueOption, SelectValue};
pub use yaxis::{filter_table_column_options, filter_y_axis_aggregate_params, filter_y_axis_options};
