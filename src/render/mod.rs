//! Field renderers
//!
//! Table cell → display text, optionally linked to the event or trace it
//! came from.

use serde_json::Value;
use crate::field::OutputType;
use crate::response::{TableMeta, TableRow};
use crate::settings::Organization;
use crate::widget::PageFilters;

const SHORT_ID_LENGTH: usize = 8;

/// What a rendered cell links to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub pathname: String,
    pub query: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    pub text: String,
    pub link: Option<LinkTarget>,
}

impl RenderedCell {
    fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), link: None }
    }
}

/// Where a cell is being rendered. Links need both.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    pub organization: Option<&'a Organization>,
    pub page_filters: Option<&'a PageFilters>,
}

/// How to render one column of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRenderer {
    /// `id`: link to the event details
    EventId,
    /// `trace`: link to the trace view
    Trace,
    /// Format by the column's declared type
    Default,
}

pub fn custom_field_renderer(field: &str) -> FieldRenderer {
    match field {
        "id" => FieldRenderer::EventId,
        "trace" => FieldRenderer::Trace,
        _ => FieldRenderer::Default,
    }
}

impl FieldRenderer {
    pub fn render(&self, field: &str, row: &TableRow, meta: &TableMeta, context: &RenderContext<'_>) -> RenderedCell {
        let value = row.get(field).unwrap_or(&Value::Null);
        match self {
            FieldRenderer::EventId => render_event_id(value, row, context),
            FieldRenderer::Trace => render_trace(value, context),
            FieldRenderer::Default => {
                let ty = meta.get(field).and_then(Value::as_str).map(OutputType::from);
                RenderedCell::plain(format_value(value, ty.as_ref()))
            }
        }
    }
}

fn render_event_id(value: &Value, row: &TableRow, context: &RenderContext<'_>) -> RenderedCell {
    let Value::String(id) = value else {
        return RenderedCell::plain(format_value(value, None));
    };
    let (Some(organization), Some(filters)) = (context.organization, context.page_filters) else {
        return RenderedCell::plain(id.clone());
    };
    let project = row
        .get("project")
        .or_else(|| row.get("project.name"))
        .and_then(Value::as_str);
    let Some(project) = project else {
        return RenderedCell::plain(id.clone());
    };

    let slug = format!("{}:{}", project, id);
    RenderedCell {
        text: short_id(id),
        link: Some(LinkTarget {
            pathname: format!("/organizations/{}/discover/{}/", organization.slug, slug),
            query: filters.datetime.period_params().query_pairs(),
        }),
    }
}

fn render_trace(value: &Value, context: &RenderContext<'_>) -> RenderedCell {
    let Value::String(trace) = value else {
        return RenderedCell::plain(format_value(value, None));
    };
    let (Some(organization), Some(filters)) = (context.organization, context.page_filters) else {
        return RenderedCell::plain(trace.clone());
    };
    RenderedCell {
        text: short_id(trace),
        link: Some(LinkTarget {
            pathname: format!("/organizations/{}/performance/trace/{}/", organization.slug, trace),
            query: filters.datetime.period_params().query_pairs(),
        }),
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LENGTH).collect()
}

/// Text for a cell of the given declared type
pub fn format_value(value: &Value, ty: Option<&OutputType>) -> String {
    match (value, ty) {
        (Value::Null, _) => String::new(),
        (Value::Number(n), Some(OutputType::Duration)) => {
            format!("{:.2}ms", n.as_f64().unwrap_or_default())
        }
        (Value::Number(n), Some(OutputType::Percentage)) => {
            format!("{:.2}%", n.as_f64().unwrap_or_default() * 100.0)
        }
        (Value::Number(n), Some(OutputType::Integer)) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => format!("{:.0}", n.as_f64().unwrap_or_default()),
        },
        (Value::Number(n), _) => n.to_string(),
        (Value::String(s), _) => s.clone(),
        (Value::Bool(b), _) => b.to_string(),
        (other, _) => other.to_string(),
    }
}
