use treescope_core::Result;
use treescope_core::model::{SourceLines, Span};
use tree_sitter::Node;

/// Converts a tree-sitter range to our Span model.
pub(crate) fn span_from_ts(range: tree_sitter::Range) -> Span {
    Span::new(
        range.start_point.row,
        range.start_point.column,
        range.end_point.row,
        range.end_point.column,
    )
}

/// Source text covered by `node`.
pub(crate) fn contents(node: Node, lines: &SourceLines) -> Result<String> {
    lines.extract(span_from_ts(node.range()))
}

/// Modifier text with runs of whitespace collapsed, so annotations on their
/// own line read as `@Override public`.
pub(crate) fn modifiers_text(node: Node, lines: &SourceLines) -> Result<String> {
    let text = contents(node, lines)?;
    Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
}
