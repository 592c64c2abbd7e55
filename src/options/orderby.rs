use tracing::debug;
use crate::field::{equation_alias, equation_count, is_equation, split_orderby};
use crate::widget::WidgetQuery;

/// Reconcile a query's orderby after its fields change.
///
/// An orderby that still names one of `new_fields`, an aggregate, a grouping
/// column or an equation is kept. Otherwise it moves, with the same
/// direction, to the alias of the last equation when the first aggregate is
/// an equation, or else to the first new field. With nothing to move to the
/// orderby is cleared.
pub fn handle_orderby_reset(query: &WidgetQuery, new_fields: &[String]) -> WidgetQuery {
    let mut query = query.clone();
    let Some(orderby) = query.orderby() else {
        return query;
    };
    let (bare, descending) = split_orderby(orderby);

    let still_valid = new_fields.iter().any(|f| f == bare)
        || query.aggregates.iter().any(|f| f == bare)
        || query.columns.iter().any(|f| f == bare)
        || is_equation(bare);
    if still_valid {
        return query;
    }

    let replacement = match query.aggregates.first() {
        Some(first) if is_equation(first) => {
            equation_alias(equation_count(&query.aggregates).saturating_sub(1))
        }
        _ => new_fields.first().cloned().unwrap_or_default(),
    };
    debug!(from = %query.orderby, to = %replacement, "resetting orderby");

    query.orderby = if descending && !replacement.is_empty() {
        format!("-{}", replacement)
    } else {
        replacement
    };
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(columns: &[&str], aggregates: &[&str], orderby: &str) -> WidgetQuery {
        WidgetQuery {
            columns: columns.iter().map(|s| s.to_string()).collect(),
            aggregates: aggregates.iter().map(|s| s.to_string()).collect(),
            orderby: orderby.to_string(),
            ..Default::default()
        }
    }

    fn fields(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keeps_orderby_still_selected() {
        let q = query(&[], &["count()"], "-p95()");
        let reset = handle_orderby_reset(&q, &fields(&["p95()", "count()"]));
        assert_eq!(reset.orderby, "-p95()");
    }

    #[test]
    fn test_keeps_aggregate_and_grouping_column() {
        let q = query(&["browser"], &["count()"], "count()");
        assert_eq!(handle_orderby_reset(&q, &fields(&["p50()"])).orderby, "count()");

        let q = query(&["browser"], &["count()"], "-browser");
        assert_eq!(handle_orderby_reset(&q, &fields(&["p50()"])).orderby, "-browser");
    }

    #[test]
    fn test_keeps_custom_equation() {
        let q = query(&[], &["count()"], "-equation|count() * 2");
        let reset = handle_orderby_reset(&q, &fields(&["p50()"]));
        assert_eq!(reset.orderby, "-equation|count() * 2");
    }

    #[test]
    fn test_stale_equation_alias_is_replaced() {
        let q = query(&[], &["count()"], "-equation[0]");
        assert_eq!(handle_orderby_reset(&q, &fields(&["p50()"])).orderby, "-p50()");
    }

    #[test]
    fn test_replaces_stale_orderby_keeping_direction() {
        let q = query(&[], &["count()"], "-epm()");
        let reset = handle_orderby_reset(&q, &fields(&["p75()", "count()"]));
        assert_eq!(reset.orderby, "-p75()");
    }

    #[test]
    fn test_first_aggregate_equation_uses_last_alias() {
        let q = query(&[], &["equation|count() * 2", "count()"], "epm()");
        assert_eq!(handle_orderby_reset(&q, &fields(&["count()"])).orderby, "equation[0]");

        let q = query(&[], &["equation|count() * 2", "count()", "equation|count() + 1"], "-epm()");
        assert_eq!(handle_orderby_reset(&q, &fields(&["count()"])).orderby, "-equation[1]");
    }

    #[test]
    fn test_equation_in_new_fields_only_is_not_aliased() {
        let q = query(&[], &["count()"], "epm()");
        let new_fields = fields(&["equation|count() / 2", "count()"]);
        assert_eq!(handle_orderby_reset(&q, &new_fields).orderby, "equation|count() / 2");
    }

    #[test]
    fn test_clears_without_replacement() {
        let q = query(&[], &["count()"], "-epm()");
        assert_eq!(handle_orderby_reset(&q, &[]).orderby, "");
    }

    #[test]
    fn test_empty_orderby_untouched() {
        let q = query(&[], &["count()"], "");
        assert_eq!(handle_orderby_reset(&q, &fields(&["p50()"])), q);
    }
}
