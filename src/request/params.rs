//! Outbound request parameter types

use std::fmt;
use crate::widget::PeriodParams;

/// `dataset` value that switches the backend to metrics-enhanced queries
pub const METRICS_ENHANCED_DATASET: &str = "metricsEnhanced";

/// The events API endpoint a request targets, scoped to an organization slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Tabular results with the nested `meta.fields` shape
    Events(String),
    /// Legacy tabular results with flat meta
    EventsV2(String),
    /// Results keyed by country code
    EventsGeo(String),
    /// Time series
    EventsStats(String),
}

impl Endpoint {
    pub fn path(&self) -> String {
        let (slug, resource) = match self {
            Endpoint::Events(slug) => (slug, "events"),
            Endpoint::EventsV2(slug) => (slug, "eventsv2"),
            Endpoint::EventsGeo(slug) => (slug, "events-geo"),
            Endpoint::EventsStats(slug) => (slug, "events-stats"),
        };
        format!("/organizations/{}/{}/", slug, resource)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Pagination and attribution for tabular requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablePage {
    /// Rows per page
    pub limit: Option<u32>,
    pub cursor: Option<String>,
    pub referrer: Option<String>,
}

/// Parameters for the tabular and geo endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct TableRequest {
    pub endpoint: Endpoint,
    pub field: Vec<String>,
    pub query: String,
    pub project: Vec<i64>,
    pub environment: Vec<String>,
    pub period: PeriodParams,
    pub sort: Vec<String>,
    pub per_page: Option<u32>,
    pub cursor: Option<String>,
    pub referrer: Option<String>,
    pub dataset: Option<String>,
}

/// Parameters for the `events-stats` endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRequest {
    pub endpoint: Endpoint,
    pub interval: String,
    pub period: PeriodParams,
    pub project: Vec<i64>,
    pub environment: Vec<String>,
    pub query: String,
    pub y_axis: Vec<String>,
    /// Requested fields; only set for grouped queries
    pub field: Vec<String>,
    pub top_events: Option<u32>,
    pub orderby: Option<String>,
    /// Only set for grouped queries
    pub exclude_other: Option<bool>,
    pub partial: bool,
    /// Ask for every function argument in the response meta
    pub include_all_args: bool,
    pub include_previous: bool,
    pub referrer: String,
    pub dataset: Option<String>,
}

/// A built request ready for a client
#[derive(Debug, Clone, PartialEq)]
pub enum EventsRequest {
    Table(TableRequest),
    Series(SeriesRequest),
}

impl EventsRequest {
    pub fn endpoint(&self) -> &Endpoint {
        match self {
            EventsRequest::Table(r) => &r.endpoint,
            EventsRequest::Series(r) => &r.endpoint,
        }
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match self {
            EventsRequest::Table(r) => r.query_pairs(),
            EventsRequest::Series(r) => r.query_pairs(),
        }
    }
}

/// Collects query parameters, repeating keys for lists
#[derive(Default)]
struct Pairs(Vec<(String, String)>);

impl Pairs {
    fn one(&mut self, key: &str, value: impl ToString) {
        self.0.push((key.to_string(), value.to_string()));
    }

    fn opt<T: ToString>(&mut self, key: &str, value: Option<T>) {
        if let Some(value) = value {
            self.one(key, value);
        }
    }

    fn many<T: ToString>(&mut self, key: &str, values: &[T]) {
        for value in values {
            self.one(key, value.to_string());
        }
    }

    fn flag(&mut self, key: &str, set: bool) {
        if set {
            self.one(key, "1");
        }
    }
}

impl TableRequest {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Pairs::default();
        pairs.many("field", &self.field);
        pairs.one("query", &self.query);
        pairs.many("project", &self.project);
        pairs.many("environment", &self.environment);
        pairs.0.extend(self.period.query_pairs());
        pairs.many("sort", &self.sort);
        pairs.opt("per_page", self.per_page);
        pairs.opt("cursor", self.cursor.as_deref());
        pairs.opt("referrer", self.referrer.as_deref());
        pairs.opt("dataset", self.dataset.as_deref());
        pairs.0
    }
}

impl SeriesRequest {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Pairs::default();
        pairs.one("interval", &self.interval);
        pairs.many("project", &self.project);
        pairs.many("environment", &self.environment);
        pairs.one("query", &self.query);
        pairs.many("yAxis", &self.y_axis);
        pairs.many("field", &self.field);
        pairs.opt("topEvents", self.top_events);
        pairs.opt("orderby", self.orderby.as_deref());
        pairs.flag("partial", self.partial);
        pairs.flag("includeAllArgs", self.include_all_args);
        pairs.flag("includePrevious", self.include_previous);
        pairs.flag("excludeOther", self.exclude_other.unwrap_or(false));
        pairs.one("referrer", &self.referrer);
        pairs.0.extend(self.period.query_pairs());
        pairs.opt("dataset", self.dataset.as_deref());
        pairs.0
    }
}
