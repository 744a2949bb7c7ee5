use super::contents::contents;
use tree_sitter::Node;
use treescope_core::Result;
use treescope_core::model::SourceLines;

/// Collects the segments of a dotted name such as `java.util.*`.
///
/// Tokens (`.`, `;`, keywords) and annotations are skipped; a trailing
/// `asterisk` becomes the `*` segment.
pub(crate) fn dotted_identifiers(node: Node, lines: &SourceLines) -> Result<Vec<String>> {
    let mut segments = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        push_segments(child, lines, &mut segments)?;
    }
    Ok(segments)
}

fn push_segments(node: Node, lines: &SourceLines, segments: &mut Vec<String>) -> Result<()> {
    match node.kind() {
        "identifier" => segments.push(contents(node, lines)?),
        "asterisk" => segments.push("*".to_string()),
        "scoped_identifier" => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                push_segments(child, lines, segments)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Whether an import declaration carries the `static` keyword.
pub(crate) fn is_static_import(node: Node) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|c| c.kind() == "static")
}
