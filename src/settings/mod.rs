//! Settings types (nouns)
//!
//! Feature flags, the custom measurement registry and limits live here and
//! are passed explicitly.

mod features;
mod measurement;
mod organization;

use serde::Deserialize;
use std::path::Path;
use crate::error::ParseError;

pub use features::{FeatureSet, DASHBOARDS_MEP, MEP_ROLLOUT, NEW_WIDGET_BUILDER, USE_EVENTS_ENDPOINT};
pub use measurement::{CustomMeasurement, CustomMeasurements};
pub use organization::Organization;

/// Default number of top groups requested for grouped time series
pub const TOP_N: u32 = 5;

/// Default referrer sent with series requests
pub const DEFAULT_SERIES_REFERRER: &str = "api.organization-event-stats";

/// Root settings document
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub organization: Organization,
    #[serde(rename = "customMeasurements", default)]
    pub custom_measurements: CustomMeasurements,
    /// Top-events limit used when a grouped widget sets none
    #[serde(rename = "topEvents", default = "default_top_events")]
    pub top_events: u32,
    #[serde(rename = "seriesReferrer", default = "default_series_referrer")]
    pub series_referrer: String,
    #[serde(rename = "tableReferrer", default)]
    pub table_referrer: Option<String>,
}

fn default_top_events() -> u32 {
    TOP_N
}

fn default_series_referrer() -> String {
    DEFAULT_SERIES_REFERRER.to_string()
}

impl Settings {
    /// Settings for an organization with defaults everywhere else
    pub fn for_organization(organization: Organization) -> Self {
        Self {
            organization,
            custom_measurements: CustomMeasurements::default(),
            top_events: TOP_N,
            series_referrer: default_series_referrer(),
            table_referrer: None,
        }
    }

    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        crate::parser::parse_file(path)
    }
}
