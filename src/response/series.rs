use serde::Serialize;
use crate::field::OutputType;

/// A point on a chart: `name` is the bucket timestamp in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesDataPoint {
    pub name: i64,
    pub value: f64,
}

/// A named series ready for a charting surface
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub series_name: String,
    pub data: Vec<SeriesDataPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_type: Option<OutputType>,
}

impl Series {
    pub fn values(&self) -> Vec<f64> {
        self.data.iter().map(|p| p.value).collect()
    }
}
