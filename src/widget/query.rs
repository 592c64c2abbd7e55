use serde::Deserialize;
use crate::field::split_orderby;
use super::display::DisplayType;

/// One query of a widget
///
/// `columns` group the results, `aggregates` are the plotted or tabulated
/// values. `orderby` names one of them (or an equation alias), with a
/// leading `-` for descending.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetQuery {
    /// Query alias, used to prefix series names
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub aggregates: Vec<String>,
    /// Search-syntax conditions
    #[serde(default)]
    pub conditions: String,
    #[serde(default)]
    pub orderby: String,
    #[serde(default)]
    pub field_aliases: Vec<String>,
}

impl WidgetQuery {
    /// `columns ++ aggregates`, the field list sent to the API
    pub fn fields(&self) -> Vec<String> {
        self.columns
            .iter()
            .chain(self.aggregates.iter())
            .cloned()
            .collect()
    }

    /// Query alias if one is set
    pub fn alias(&self) -> Option<&str> {
        Some(self.name.as_str()).filter(|n| !n.is_empty())
    }

    pub fn orderby(&self) -> Option<&str> {
        Some(self.orderby.as_str()).filter(|o| !o.is_empty())
    }

    /// The orderby without its sort direction
    pub fn bare_orderby(&self) -> &str {
        split_orderby(&self.orderby).0
    }

    pub fn is_grouped(&self) -> bool {
        !self.columns.is_empty()
    }
}

fn default_interval() -> String {
    "5m".to_string()
}

/// A configured visualization with one or more queries
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    #[serde(default)]
    pub title: String,
    pub display_type: DisplayType,
    #[serde(default = "default_interval")]
    pub interval: String,
    /// Top-events limit for grouped series
    #[serde(default)]
    pub limit: Option<u32>,
    pub queries: Vec<WidgetQuery>,
}

impl Widget {
    pub fn new(display_type: DisplayType, queries: Vec<WidgetQuery>) -> Self {
        Self {
            title: String::new(),
            display_type,
            interval: default_interval(),
            limit: None,
            queries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_widget() {
        let json = serde_json::json!({
            "title": "Errors by browser",
            "displayType": "top_n",
            "queries": [{
                "name": "Errors",
                "columns": ["browser.name"],
                "aggregates": ["count()"],
                "conditions": "event.type:error",
                "orderby": "-count()",
                "fieldAliases": []
            }]
        });
        let widget: Widget = serde_json::from_value(json).unwrap();
        assert_eq!(widget.display_type, DisplayType::TopN);
        assert_eq!(widget.interval, "5m");
        assert!(widget.limit.is_none());
        let query = &widget.queries[0];
        assert_eq!(query.alias(), Some("Errors"));
        assert_eq!(query.bare_orderby(), "count()");
        assert_eq!(query.fields(), vec!["browser.name", "count()"]);
    }

    #[test]
    fn test_empty_alias_and_orderby() {
        let query = WidgetQuery::default();
        assert!(query.alias().is_none());
        assert!(query.orderby().is_none());
        assert!(!query.is_grouped());
    }
}
