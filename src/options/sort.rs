use std::collections::{BTreeMap, HashSet};
use crate::field::{equation_aliases, strip_equation_prefix};
use crate::settings::{CustomMeasurements, Organization};
use crate::widget::WidgetQuery;
use super::field_options::table_field_options;
use super::types::{FieldValue, FieldValueOption, SelectValue};

/// Name of the placeholder option that opens the custom equation editor
pub const CUSTOM_EQUATION_VALUE: &str = "custom-equation";

/// Sort keys for a table widget: every selected field, equations referenced
/// by their positional alias.
pub fn table_sort_options(query: &WidgetQuery) -> Vec<SelectValue> {
    equation_aliases(&query.aggregates, &query.columns)
        .into_iter()
        .map(|(field, alias)| SelectValue {
            label: strip_equation_prefix(field).to_string(),
            value: alias.unwrap_or_else(|| field.to_string()),
        })
        .collect()
}

/// Sort keys for a grouped time-series widget.
///
/// Offers the custom equation placeholder, the query's own equations by
/// alias, and every table field option.
pub fn timeseries_sort_options(
    organization: &Organization,
    query: &WidgetQuery,
    tag_keys: &[String],
    custom_measurements: &CustomMeasurements,
) -> BTreeMap<String, FieldValueOption> {
    let mut options = BTreeMap::new();
    options.insert(
        format!("field:{}", CUSTOM_EQUATION_VALUE),
        FieldValueOption {
            label: "Custom Equation".to_string(),
            value: FieldValue::Equation { name: CUSTOM_EQUATION_VALUE.to_string() },
        },
    );

    for (field, alias) in equation_aliases(&query.aggregates, &query.columns) {
        let Some(alias) = alias else {
            continue;
        };
        options.insert(
            format!("equation:{}", alias),
            FieldValueOption {
                label: strip_equation_prefix(field).to_string(),
                value: FieldValue::Equation { name: alias },
            },
        );
    }

    options.extend(table_field_options(organization, tag_keys, custom_measurements));
    options
}

/// Keep functions and equations; keep a column only when the widget groups
/// by it.
pub fn filter_series_sort_options(columns: &[String]) -> impl Fn(&FieldValueOption) -> bool {
    let columns: HashSet<String> = columns.iter().cloned().collect();
    move |option| {
        if option.value.is_function_or_equation() {
            return true;
        }
        let name = option.value.name();
        columns.contains(name) || name == CUSTOM_EQUATION_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(columns: &[&str], aggregates: &[&str]) -> WidgetQuery {
        WidgetQuery {
            columns: columns.iter().map(|s| s.to_string()).collect(),
            aggregates: aggregates.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_table_sort_options() {
        let q = query(&["title", ""], &["count()", "equation|count() * 2"]);
        let options = table_sort_options(&q);
        assert_eq!(
            options,
            vec![
                SelectValue { label: "count()".to_string(), value: "count()".to_string() },
                SelectValue { label: "count() * 2".to_string(), value: "equation[0]".to_string() },
                SelectValue { label: "title".to_string(), value: "title".to_string() },
            ]
        );
    }

    #[test]
    fn test_timeseries_sort_options_include_equations() {
        let q = query(&["browser"], &["count()", "equation|count() / 2"]);
        let options = timeseries_sort_options(&Organization::default(), &q, &[], &CustomMeasurements::default());
        let equation = &options["equation:equation[0]"];
        assert_eq!(equation.label, "count() / 2");
        assert_eq!(equation.value.name(), "equation[0]");
        assert!(options.contains_key("field:custom-equation"));
        assert!(options.contains_key("function:p95"));
    }

    #[test]
    fn test_filter_series_sort_options() {
        let q = query(&["browser"], &["count()"]);
        let options = timeseries_sort_options(
            &Organization::default(),
            &q,
            &["browser".to_string(), "os".to_string()],
            &CustomMeasurements::default(),
        );
        let keep = filter_series_sort_options(&q.columns);
        assert!(keep(&options["tag:browser"]));
        assert!(!keep(&options["tag:os"]));
        assert!(!keep(&options["field:transaction"]));
        assert!(keep(&options["function:count"]));
        assert!(keep(&options["field:custom-equation"]));
    }
}
