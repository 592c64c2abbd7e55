//! Feature flags

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Route table queries through the metrics-enhanced dataset
pub const DASHBOARDS_MEP: &str = "dashboards-mep";
/// Org-wide rollout of metrics-enhanced performance
pub const MEP_ROLLOUT: &str = "mep-rollout-flag";
/// Query `/events/` instead of `/eventsv2/`; changes the table meta shape
pub const USE_EVENTS_ENDPOINT: &str = "discover-frontend-use-events-endpoint";
/// Grouped flattening of multi-aggregate, multi-group series
pub const NEW_WIDGET_BUILDER: &str = "new-widget-builder-experience-design";

/// The set of feature flags enabled for an organization.
///
/// Passed explicitly to every builder and transformer; there is no global
/// flag store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FeatureSet(BTreeSet<String>);

impl FeatureSet {
    pub fn new<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(flags.into_iter().map(Into::into).collect())
    }

    pub fn has(&self, flag: &str) -> bool {
        self.0.contains(flag)
    }

    /// Metrics-enhanced performance is on through either flag
    pub fn mep_enabled(&self) -> bool {
        self.has(DASHBOARDS_MEP) || self.has(MEP_ROLLOUT)
    }

    pub fn use_events_endpoint(&self) -> bool {
        self.has(USE_EVENTS_ENDPOINT)
    }

    pub fn new_widget_builder(&self) -> bool {
        self.has(NEW_WIDGET_BUILDER)
    }
}
