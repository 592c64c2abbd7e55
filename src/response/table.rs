use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A row: field name to value
pub type TableRow = Map<String, Value>;

/// Field name to declared type, plus response-level keys such as
/// `isMetricsData`
pub type TableMeta = Map<String, Value>;

/// Tabular results as consumed by table widgets
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TableData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<TableRow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<TableMeta>,
    /// Keys this crate doesn't interpret, passed through
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TableData {
    pub fn rows(&self) -> &[TableRow] {
        self.data.as_deref().unwrap_or_default()
    }

    /// Declared type of a field in canonical (flat) meta
    pub fn field_type(&self, field: &str) -> Option<&str> {
        self.meta.as_ref()?.get(field)?.as_str()
    }
}
