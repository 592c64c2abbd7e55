use serde::{Deserialize, Serialize};
use std::fmt;

/// How a widget renders its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayType {
    Area,
    Bar,
    #[default]
    Line,
    Table,
    WorldMap,
    BigNumber,
    TopN,
}

impl DisplayType {
    /// Displays that request `events-stats` and plot series over time
    pub fn is_timeseries(self) -> bool {
        matches!(self, DisplayType::Area | DisplayType::Bar | DisplayType::Line | DisplayType::TopN)
    }

    /// Displays whose queries may group by columns
    pub fn supports_grouping(self) -> bool {
        !matches!(self, DisplayType::BigNumber | DisplayType::WorldMap)
    }
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayType::Area => "area",
            DisplayType::Bar => "bar",
            DisplayType::Line => "line",
            DisplayType::Table => "table",
            DisplayType::WorldMap => "world_map",
            DisplayType::BigNumber => "big_number",
            DisplayType::TopN => "top_n",
        };
        write!(f, "{}", name)
    }
}
