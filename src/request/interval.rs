//! Bucket interval selection for time-series requests

use regex::Regex;
use std::sync::LazyLock;
use crate::widget::{DateTimeSelection, DisplayType, DEFAULT_STATS_PERIOD};

/// Charts are small; more buckets than this are not worth fetching
const MAX_BIN_COUNT: f64 = 66.0;

const ONE_HOUR: f64 = 60.0;
const TWENTY_FOUR_HOURS: f64 = 1440.0;
const THIRTY_DAYS: f64 = 43200.0;
const SIXTY_DAYS: f64 = 86400.0;

static PERIOD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([smhdw])$").expect("valid period pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fidelity {
    High,
    Medium,
    Low,
}

/// `30m` -> 0.5, `2d` -> 48.0
pub fn parse_period_to_hours(period: &str) -> Option<f64> {
    let captures = PERIOD_PATTERN.captures(period)?;
    let amount: f64 = captures.get(1)?.as_str().parse().ok()?;
    let hours = match captures.get(2)?.as_str() {
        "s" => amount / 3600.0,
        "m" => amount / 60.0,
        "h" => amount,
        "d" => amount * 24.0,
        "w" => amount * 24.0 * 7.0,
        _ => return None,
    };
    Some(hours)
}

/// Length of the selected range in minutes
pub fn diff_in_minutes(datetime: &DateTimeSelection) -> f64 {
    if let (Some(start), Some(end)) = (datetime.start, datetime.end) {
        return (end - start).num_seconds() as f64 / 60.0;
    }
    let period = datetime
        .period
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_STATS_PERIOD);
    parse_period_to_hours(period).unwrap_or(0.0) * 60.0
}

/// Interval for a range at the given fidelity
pub fn interval_for_range(datetime: &DateTimeSelection, fidelity: Fidelity) -> &'static str {
    let minutes = diff_in_minutes(datetime);
    let (high, medium, low) = if minutes >= SIXTY_DAYS {
        ("4h", "1d", "2d")
    } else if minutes >= THIRTY_DAYS {
        ("1h", "4h", "1d")
    } else if minutes > TWENTY_FOUR_HOURS {
        ("30m", "1h", "2h")
    } else if minutes <= ONE_HOUR {
        ("1m", "1m", "5m")
    } else {
        ("5m", "15m", "1h")
    };
    match fidelity {
        Fidelity::High => high,
        Fidelity::Medium => medium,
        Fidelity::Low => low,
    }
}

/// The interval a widget's series request should use.
///
/// Bar charts plot daily totals. Everything else uses the widget's interval
/// unless that would produce too many buckets for the range, in which case
/// the high-fidelity interval for the range takes over.
pub fn widget_interval(display: DisplayType, datetime: &DateTimeSelection, interval: &str) -> String {
    let interval = if display == DisplayType::Bar {
        "1d"
    } else if interval.is_empty() {
        "5m"
    } else {
        interval
    };

    let Some(desired_hours) = parse_period_to_hours(interval) else {
        return interval.to_string();
    };
    let selected_minutes = diff_in_minutes(datetime);

    if selected_minutes / (desired_hours * 60.0) > MAX_BIN_COUNT {
        let high = interval_for_range(datetime, Fidelity::High);
        if parse_period_to_hours(high).is_some_and(|h| desired_hours < h) {
            return high.to_string();
        }
    }
    interval.to_string()
}
