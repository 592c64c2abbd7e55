//! Field expression types and helpers (nouns)
//!
//! A field expression is a plain column (`transaction`), an aggregate
//! function (`p95(transaction.duration)`) or an equation
//! (`equation|count() / 2`).

pub mod catalog;
mod equation;
mod function;
mod types;

pub use equation::{
    equation_alias, equation_aliases, equation_count, is_equation, is_equation_alias,
    split_orderby, strip_equation_prefix, EQUATION_PREFIX,
};
pub use function::{aggregate_alias, is_function, parse_arguments, parse_function, ParsedFunction};
pub use types::OutputType;
