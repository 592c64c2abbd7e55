//! Response transformer (verb module)
//!
//! Raw events API JSON → canonical table data, ordered chart series and
//! per-series result types.

mod flatten;
mod result_type;
mod series;
mod table;
mod units;

pub use flatten::{GroupedFlattener, SeriesFlattener};
pub use result_type::series_result_type;
pub use series::{transform_series, transform_stats};
pub use table::transform_table;
pub use units::unit_scale;
