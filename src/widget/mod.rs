//! Widget types (nouns)
//!
//! What a dashboard widget asks for: its display, queries and the page
//! filters it is rendered under.

mod display;
mod page_filters;
mod query;

pub use display::DisplayType;
pub use page_filters::{DateTimeSelection, PageFilters, PeriodParams, DEFAULT_STATS_PERIOD};
pub use query::{Widget, WidgetQuery};
