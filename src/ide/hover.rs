//! Hover information for `@name` references.

use smol_str::SmolStr;

use crate::base::{LineCol, LineIndex};
use crate::parser::reference_at;
use crate::semantic::{CanonicalColor, DefinitionTable, to_canonical_hex};

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Hovered variable name, without the `@`.
    pub name: SmolStr,
    /// Raw value bound to the name.
    pub value: String,
    /// Canonical color, when the value is readable as one.
    pub color: Option<CanonicalColor>,
    /// Start line of the hovered range (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
}

/// Get hover information for a position.
///
/// # Arguments
/// * `text` - Document text
/// * `table` - Definitions resolved for this document
/// * `line` - Cursor line (0-indexed)
/// * `col` - Cursor column (0-indexed, UTF-16 units)
///
/// # Returns
/// Hover information, or None if the cursor is not on a known `@name`.
pub fn hover(text: &str, table: &DefinitionTable, line: u32, col: u32) -> Option<HoverResult> {
    let line_index = LineIndex::new(text);
    let offset = line_index.offset(LineCol { line, col });
    let reference = reference_at(text, offset)?;
    let value = table.get(&reference.name)?;
    let color = to_canonical_hex(value);
    let span = line_index.span(reference.range);

    Some(HoverResult {
        contents: build_hover_content(&reference.name, value, color),
        name: reference.name,
        value: value.to_string(),
        color,
        start_line: span.start.line,
        start_col: span.start.column,
        end_line: span.end.line,
        end_col: span.end.column,
    })
}

/// Build markdown hover content for a variable.
fn build_hover_content(name: &str, value: &str, color: Option<CanonicalColor>) -> String {
    let mut content = format!("**{name}** = {value}\n");
    if let Some(color) = color {
        let tone = if color.is_light() { "light" } else { "dark" };
        content.push_str(&format!("\n`{color}` ({tone})\n"));
    }
    content
}
