//! Response types (nouns)
//!
//! Raw payloads from the events API and the shapes handed to charts and
//! tables.

mod series;
mod stats;
mod table;

pub use series::{Series, SeriesDataPoint};
pub use stats::{decode_stats, CountEntry, EventsStats, StatsBucket, StatsMeta, StatsResponse};
pub use table::{TableData, TableMeta, TableRow};
