//! Aggregate function parsing and aliasing

use regex::Regex;
use std::sync::LazyLock;

static FUNCTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)\((.*)?\)$").expect("valid function pattern"));

/// Functions whose arguments may be quoted strings containing commas
const QUOTED_ARGUMENT_FUNCTIONS: &[&str] = &["to_other", "count_if", "spans_histogram"];

/// A parsed `name(arg, ...)` expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFunction {
    pub name: String,
    pub arguments: Vec<String>,
}

/// Parse a `name(args...)` expression. Returns `None` for anything else.
pub fn parse_function(field: &str) -> Option<ParsedFunction> {
    let captures = FUNCTION_PATTERN.captures(field)?;
    let name = captures.get(1)?.as_str();
    let args = captures.get(2).map(|m| m.as_str()).unwrap_or("");
    Some(ParsedFunction {
        name: name.to_string(),
        arguments: parse_arguments(name, args),
    })
}

pub fn is_function(field: &str) -> bool {
    FUNCTION_PATTERN.is_match(field)
}

/// Split a function's argument text.
///
/// Most functions split on every comma. Functions that accept quoted strings
/// keep commas inside `"..."`, honoring backslash escapes.
pub fn parse_arguments(function: &str, text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    if !QUOTED_ARGUMENT_FUNCTIONS.contains(&function) {
        return text.split(',').map(|arg| arg.trim().to_string()).collect();
    }

    let bytes = text.as_bytes();
    let mut args = Vec::new();
    let mut quoted = false;
    let mut escaped = false;
    let mut start = 0;

    for (pos, &b) in bytes.iter().enumerate() {
        if start == pos && b == b'"' {
            quoted = true;
        } else if start == pos && b == b' ' {
            start += 1;
        } else if quoted && !escaped && b == b'\\' {
            escaped = true;
        } else if quoted && !escaped && b == b'"' {
            quoted = false;
        } else if quoted && escaped {
            escaped = false;
        } else if quoted && b == b',' {
            // comma inside a quoted argument
        } else if b == b',' {
            args.push(text[start..pos].trim().to_string());
            start = pos + 1;
        }
    }
    if start != bytes.len() {
        args.push(text[start..].trim().to_string());
    }
    args
}

/// Normalize a field to the alias the events-stats API keys its meta by.
///
/// `p95(transaction.duration)` becomes `p95_transaction_duration`; plain
/// fields come back unchanged.
pub fn aggregate_alias(field: &str) -> String {
    let Some(parsed) = parse_function(field) else {
        return field.to_string();
    };

    let mut alias = parsed.name;
    if !parsed.arguments.is_empty() {
        alias.push('_');
        alias.push_str(&parsed.arguments.join("_"));
    }

    let replaced: String = alias
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    replaced.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_function_without_args() {
        let parsed = parse_function("count()").unwrap();
        assert_eq!(parsed.name, "count");
        assert!(parsed.arguments.is_empty());
    }

    #[test]
    fn test_parse_function_with_args() {
        let parsed = parse_function("percentile(transaction.duration, 0.95)").unwrap();
        assert_eq!(parsed.name, "percentile");
        assert_eq!(parsed.arguments, vec!["transaction.duration", "0.95"]);
    }

    #[test]
    fn test_not_a_function() {
        assert!(parse_function("transaction").is_none());
        assert!(parse_function("equation|count() * 2").is_none());
        assert!(parse_function("count(").is_none());
    }

    #[test]
    fn test_quoted_arguments_keep_commas() {
        let args = parse_arguments("to_other", r#"release,"a,b",others,current"#);
        assert_eq!(args, vec!["release", r#""a,b""#, "others", "current"]);
    }

    #[test]
    fn test_quoted_arguments_with_escape() {
        let args = parse_arguments("count_if", r#"message, equals, "say \"hi\", ok""#);
        assert_eq!(args, vec!["message", "equals", r#""say \"hi\", ok""#]);
    }

    #[test]
    fn test_aggregate_alias() {
        assert_eq!(aggregate_alias("count()"), "count");
        assert_eq!(aggregate_alias("p95()"), "p95");
        assert_eq!(aggregate_alias("p95(transaction.duration)"), "p95_transaction_duration");
        assert_eq!(aggregate_alias("count_unique(user)"), "count_unique_user");
        assert_eq!(
            aggregate_alias("percentile(transaction.duration, 0.95)"),
            "percentile_transaction_duration_0_95"
        );
        assert_eq!(aggregate_alias("transaction"), "transaction");
    }
}
