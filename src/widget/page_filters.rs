use chrono::{DateTime, Utc};

/// Relative period used when the selection has neither a period nor a range
pub const DEFAULT_STATS_PERIOD: &str = "14d";

const UTC_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The time selection of the current view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateTimeSelection {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// Relative period such as `24h` or `14d`
    pub period: Option<String>,
    pub utc: bool,
}

/// Period parameters as the API expects them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParams {
    Relative { stats_period: String },
    Absolute { start: String, end: String },
}

impl PeriodParams {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match self {
            PeriodParams::Relative { stats_period } => {
                vec![("statsPeriod".to_string(), stats_period.clone())]
            }
            PeriodParams::Absolute { start, end } => vec![
                ("start".to_string(), start.clone()),
                ("end".to_string(), end.clone()),
            ],
        }
    }
}

impl DateTimeSelection {
    pub fn relative(period: impl Into<String>) -> Self {
        Self {
            period: Some(period.into()),
            ..Default::default()
        }
    }

    pub fn absolute(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            period: None,
            utc: true,
        }
    }

    /// An absolute range wins over a relative period when both ends are set
    pub fn period_params(&self) -> PeriodParams {
        match (self.start, self.end) {
            (Some(start), Some(end)) => PeriodParams::Absolute {
                start: start.format(UTC_DATE_FORMAT).to_string(),
                end: end.format(UTC_DATE_FORMAT).to_string(),
            },
            _ => PeriodParams::Relative {
                stats_period: self
                    .period
                    .clone()
                    .filter(|p| !p.is_empty())
                    .unwrap_or_else(|| DEFAULT_STATS_PERIOD.to_string()),
            },
        }
    }
}

/// Global filters of the page a widget is rendered on
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageFilters {
    pub projects: Vec<i64>,
    pub environments: Vec<String>,
    pub datetime: DateTimeSelection,
}
