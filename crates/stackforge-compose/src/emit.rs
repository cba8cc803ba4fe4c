//! Deterministic rendering of value trees into compose-file text.
//!
//! The emitter is a pure, total function over the [`Value`] variants. Given
//! equal input it produces byte-identical output, and mapping insertion
//! order is preserved end-to-end, so generated files diff stably.

use indexmap::IndexMap;

use crate::model::Document;
use crate::value::Value;

const INDENT: &str = "  ";

/// Characters that force a string scalar into double quotes.
///
/// An unquoted colon or hash would corrupt the output format, so quoting
/// stays conservative: quote whenever one of these appears, or when the
/// string opens with a structural bracket.
const QUOTE_TRIGGERS: [char; 3] = [':', '#', '\''];

/// Renders a value at the given indentation level (two spaces per level).
///
/// Scalars render inline without indentation; sequences and mappings render
/// one entry per line at the given level, with nested blocks one level
/// deeper. Empty containers render as the inline `[]` / `{}` literals.
#[must_use]
pub fn emit(value: &Value, indent_level: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Str(s) => emit_str(s),
        Value::Seq(items) => emit_seq(items, indent_level),
        Value::Map(entries) => emit_map(entries, indent_level),
    }
}

/// Renders a complete document, terminated by exactly one trailing newline.
#[must_use]
pub fn emit_document(doc: &Document) -> String {
    tracing::debug!(services = doc.services.len(), "emitting document");
    let mut text = emit(&doc.to_value(), 0);
    text.push('\n');
    text
}

fn pad(level: usize) -> String {
    INDENT.repeat(level)
}

fn needs_quoting(s: &str) -> bool {
    s.contains(QUOTE_TRIGGERS) || s.starts_with('[') || s.starts_with('{')
}

fn emit_str(s: &str) -> String {
    if needs_quoting(s) {
        format!("\"{}\"", s.replace('"', "\\\""))
    } else {
        s.to_string()
    }
}

fn emit_seq(items: &[Value], level: usize) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let indent = pad(level);
    items
        .iter()
        .map(|item| {
            if item.is_block() {
                format!("{indent}-\n{}", emit(item, level + 1))
            } else {
                format!("{indent}- {}", emit(item, level))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn emit_map(entries: &IndexMap<String, Value>, level: usize) -> String {
    if entries.is_empty() {
        return "{}".to_string();
    }
    let indent = pad(level);
    entries
        .iter()
        .map(|(key, value)| match value {
            // Bare `key:` is how volume names with no options are declared.
            Value::Null => format!("{indent}{key}:"),
            v if v.is_block() => format!("{indent}{key}:\n{}", emit(v, level + 1)),
            v => format!("{indent}{key}: {}", emit(v, level)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
