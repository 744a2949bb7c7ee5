use super::contents::contents;
use tree_sitter::Node;
use treescope_core::model::{SourceLines, TypeIdentifier, WildcardBound};
use treescope_core::{Result, TreescopeError};

/// Resolves a type-bearing node into its structural shape.
///
/// Generic arguments are resolved recursively, left to right, so
/// `Map<Int, List<String>>` keeps its full nesting. Any node that is not type
/// syntax fails with [`TreescopeError::UnrecognizedTypeSyntax`].
pub(crate) fn resolve_type(node: Node, lines: &SourceLines) -> Result<TypeIdentifier> {
    match node.kind() {
        "type_identifier"
        | "scoped_type_identifier"
        | "integral_type"
        | "floating_point_type"
        | "boolean_type"
        | "void_type" => Ok(TypeIdentifier::Concrete {
            name: contents(node, lines)?,
        }),
        "generic_type" => {
            let mut name = None;
            let mut type_parameters = Vec::new();

            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                match child.kind() {
                    "type_identifier" | "scoped_type_identifier" => {
                        name = Some(contents(child, lines)?);
                    }
                    "type_arguments" => {
                        let mut args_cursor = child.walk();
                        for arg in child.children(&mut args_cursor) {
                            if arg.is_extra() || matches!(arg.kind(), "<" | ">" | ",") {
                                continue;
                            }
                            type_parameters.push(resolve_type(arg, lines)?);
                        }
                    }
                    _ => {}
                }
            }

            match name {
                Some(name) => Ok(TypeIdentifier::Generic {
                    name,
                    type_parameters,
                }),
                None => Err(unrecognized(node, lines)),
            }
        }
        "array_type" => {
            let element = node
                .child_by_field_name("element")
                .ok_or_else(|| unrecognized(node, lines))?;
            let dimensions = match node.child_by_field_name("dimensions") {
                Some(d) => contents(d, lines)?.matches('[').count(),
                None => 1,
            };
            Ok(TypeIdentifier::Array {
                element: Box::new(resolve_type(element, lines)?),
                dimensions,
            })
        }
        "wildcard" => {
            let mut is_upper = true;
            let mut bound = None;

            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                match child.kind() {
                    "super" => is_upper = false,
                    "extends" => is_upper = true,
                    "?" => {}
                    k if k.ends_with("annotation") || child.is_extra() => {}
                    _ => bound = Some(Box::new(resolve_type(child, lines)?)),
                }
            }

            Ok(TypeIdentifier::Wildcard {
                bound: bound.map(|bound| WildcardBound { is_upper, bound }),
            })
        }
        "annotated_type" => {
            // The annotations come first, the type they annotate last.
            let mut cursor = node.walk();
            let inner = node
                .named_children(&mut cursor)
                .last()
                .ok_or_else(|| unrecognized(node, lines))?;
            resolve_type(inner, lines)
        }
        _ => Err(unrecognized(node, lines)),
    }
}

pub(crate) fn unrecognized(node: Node, lines: &SourceLines) -> TreescopeError {
    let position = node.start_position();
    TreescopeError::UnrecognizedTypeSyntax {
        kind: node.kind().to_string(),
        text: contents(node, lines).unwrap_or_default(),
        row: position.row,
        column: position.column,
    }
}
