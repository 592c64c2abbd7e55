//! Equation fields and their positional aliases
//!
//! An equation is a field prefixed with `equation|`. The server refers to the
//! Nth equation of a query (left to right over `aggregates ++ columns`) as
//! `equation[N]`.

use regex::Regex;
use std::sync::LazyLock;

pub const EQUATION_PREFIX: &str = "equation|";

static EQUATION_ALIAS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^equation\[(\d+)\]$").expect("valid equation alias pattern"));

pub fn is_equation(field: &str) -> bool {
    field.starts_with(EQUATION_PREFIX)
}

pub fn is_equation_alias(field: &str) -> bool {
    EQUATION_ALIAS_PATTERN.is_match(field)
}

/// `equation|a + b` -> `a + b`; other fields are returned as-is
pub fn strip_equation_prefix(field: &str) -> &str {
    field.strip_prefix(EQUATION_PREFIX).unwrap_or(field)
}

pub fn equation_alias(index: usize) -> String {
    format!("equation[{}]", index)
}

/// Number of equations in a field list
pub fn equation_count<S: AsRef<str>>(fields: &[S]) -> usize {
    fields.iter().filter(|f| is_equation(f.as_ref())).count()
}

/// Pair every non-empty field of `aggregates ++ columns` with its equation
/// alias, if it is an equation.
pub fn equation_aliases<'a>(
    aggregates: &'a [String],
    columns: &'a [String],
) -> Vec<(&'a str, Option<String>)> {
    let mut next = 0;
    aggregates
        .iter()
        .chain(columns.iter())
        .filter(|field| !field.is_empty())
        .map(|field| {
            if is_equation(field) {
                let alias = equation_alias(next);
                next += 1;
                (field.as_str(), Some(alias))
            } else {
                (field.as_str(), None)
            }
        })
        .collect()
}

/// Strip leading `-` from an orderby, returning the bare field and whether
/// it was descending. Repeated dashes are all stripped and count as one.
pub fn split_orderby(orderby: &str) -> (&str, bool) {
    let bare = orderby.trim_start_matches('-');
    (bare, bare.len() != orderby.len())
}
