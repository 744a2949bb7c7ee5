use super::contents::{contents, modifiers_text};
use super::naming::{dotted_identifiers, is_static_import};
use super::types::{resolve_type, unrecognized};
use tree_sitter::Node;
use treescope_core::model::{
    ClassScope, Field, FunctionInvocation, FunctionScope, Import, Invocation, ObjectCreation,
    PackageScope, RecordScope, ScopeKind, ScopeNode, SourceLines,
};
use treescope_core::{Result, TreescopeError};

/// Where the walk continues after a node has been handled.
enum Descent {
    /// The node's subtree holds nothing more to record.
    Stop,
    /// Visit children from this index, staying in the current scope.
    From(usize),
    /// Visit children from `start` inside the scope just opened at `scope`.
    Into { start: usize, scope: usize },
}

/// Single depth-first walk that turns syntax nodes into scopes and facts.
///
/// The walk keeps its own work stack, so syntax tree depth never grows the
/// thread stack. Each entry carries the scope it belongs to as a path of child
/// indices from the File root.
pub(crate) struct Traversal<'s> {
    lines: &'s SourceLines,
}

impl<'s> Traversal<'s> {
    pub(crate) fn new(lines: &'s SourceLines) -> Self {
        Self { lines }
    }

    pub(crate) fn run(&self, root: Node, file: &mut ScopeNode) -> Result<()> {
        let mut stack: Vec<(Node, Vec<usize>)> = vec![(root, Vec::new())];

        while let Some((node, path)) = stack.pop() {
            let scope = file.descendant_mut(&path).ok_or_else(|| {
                TreescopeError::Internal(format!("no scope at path {:?}", path))
            })?;

            let (start, path) = match self.visit(node, scope)? {
                Descent::Stop => continue,
                Descent::From(start) => (start, path),
                Descent::Into { start, scope } => {
                    let mut inner = path;
                    inner.push(scope);
                    (start, inner)
                }
            };

            let mut cursor = node.walk();
            let children: Vec<_> = node.children(&mut cursor).skip(start).collect();
            for child in children.into_iter().rev() {
                stack.push((child, path.clone()));
            }
        }
        Ok(())
    }

    fn visit(&self, node: Node, scope: &mut ScopeNode) -> Result<Descent> {
        tracing::trace!(kind = node.kind(), row = node.start_position().row, "visit");
        match node.kind() {
            "package_declaration" => {
                let identifiers = dotted_identifiers(node, self.lines)?;
                scope.open_child(ScopeKind::Package(PackageScope { identifiers }));
                Ok(Descent::Stop)
            }
            "import_declaration" => {
                let identifiers = dotted_identifiers(node, self.lines)?;
                scope.add_import(Import::new(identifiers, is_static_import(node)));
                Ok(Descent::Stop)
            }
            "class_declaration" | "record_declaration" => {
                let (kind, body_index) = self.type_header(node)?;
                scope.open_child(kind);
                Ok(match body_index {
                    Some(start) => Descent::Into {
                        start,
                        scope: scope.children().len() - 1,
                    },
                    None => Descent::Stop,
                })
            }
            "field_declaration" => Ok(match self.field_declaration(node, scope)? {
                Some(start) => Descent::From(start),
                None => Descent::Stop,
            }),
            "method_declaration" => {
                let kind = self.method_header(node)?;
                scope.open_child(kind);
                Ok(Descent::Into {
                    start: 0,
                    scope: scope.children().len() - 1,
                })
            }
            "method_invocation" => {
                scope.add_invocation(self.method_invocation(node)?);
                Ok(Descent::From(0))
            }
            "object_creation_expression" => {
                scope.add_invocation(self.object_creation(node)?);
                Ok(Descent::From(0))
            }
            _ => Ok(Descent::From(0)),
        }
    }

    /// Builds the Class or Record scope and finds where its body starts.
    fn type_header(&self, node: Node) -> Result<(ScopeKind, Option<usize>)> {
        let mut modifiers = String::new();
        let mut identifier = String::new();
        let mut formal_parameters = String::new();
        let mut body_index = None;

        let mut cursor = node.walk();
        for (index, child) in node.children(&mut cursor).enumerate() {
            match child.kind() {
                "modifiers" => modifiers = modifiers_text(child, self.lines)?,
                "identifier" => identifier = contents(child, self.lines)?,
                "formal_parameters" => formal_parameters = contents(child, self.lines)?,
                "class_body" => {
                    body_index = Some(index);
                    break;
                }
                _ => {}
            }
        }

        let kind = if node.kind() == "record_declaration" {
            ScopeKind::Record(RecordScope {
                modifiers,
                identifier,
                formal_parameters,
            })
        } else {
            ScopeKind::Class(ClassScope {
                modifiers,
                identifier,
            })
        };
        Ok((kind, body_index))
    }

    /// Appends one Field per declarator and returns the index of the first
    /// declarator, where traversal resumes so initializers are still visited.
    /// Brackets after a declarator name (`int a[]`) deepen that field's type only.
    fn field_declaration(&self, node: Node, scope: &mut ScopeNode) -> Result<Option<usize>> {
        let type_node = node
            .child_by_field_name("type")
            .ok_or_else(|| unrecognized(node, self.lines))?;
        let type_identifier = resolve_type(type_node, self.lines)?;

        let mut modifiers = String::new();
        let mut declarators = Vec::new();
        let mut first_declarator = None;

        let mut cursor = node.walk();
        for (index, child) in node.children(&mut cursor).enumerate() {
            match child.kind() {
                "modifiers" => modifiers = modifiers_text(child, self.lines)?,
                "variable_declarator" => {
                    first_declarator.get_or_insert(index);
                    if let Some(name) = self.first_identifier(child)? {
                        declarators.push((name, self.declarator_dimensions(child)?));
                    }
                }
                _ => {}
            }
        }

        for (identifier, dimensions) in declarators {
            scope.add_field(Field::new(
                modifiers.clone(),
                identifier,
                type_identifier.clone().with_dimensions(dimensions),
            ));
        }
        Ok(first_declarator)
    }

    fn method_header(&self, node: Node) -> Result<ScopeKind> {
        let mut modifiers = String::new();
        let mut identifier = String::new();
        let mut parameters = String::new();
        let return_type = match node.child_by_field_name("type") {
            Some(t) => contents(t, self.lines)?,
            None => String::new(),
        };

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "modifiers" => modifiers = modifiers_text(child, self.lines)?,
                "identifier" => identifier = contents(child, self.lines)?,
                "formal_parameters" => parameters = contents(child, self.lines)?,
                _ => {}
            }
        }

        Ok(ScopeKind::Function(FunctionScope {
            modifiers,
            identifier,
            parameters,
            return_type,
        }))
    }

    fn method_invocation(&self, node: Node) -> Result<Invocation> {
        let mut receiver = None;
        let mut access_path = Vec::new();
        let mut arguments = String::new();

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "field_access" => receiver = Some(contents(child, self.lines)?),
                "identifier" => access_path.push(contents(child, self.lines)?),
                "argument_list" => arguments = contents(child, self.lines)?,
                _ => {}
            }
        }

        Ok(Invocation::Function(FunctionInvocation {
            receiver,
            access_path,
            arguments,
        }))
    }

    fn object_creation(&self, node: Node) -> Result<Invocation> {
        let type_node = node
            .child_by_field_name("type")
            .ok_or_else(|| unrecognized(node, self.lines))?;
        let type_identifier = resolve_type(type_node, self.lines)?;

        let mut arguments = String::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "argument_list" {
                arguments = contents(child, self.lines)?;
            }
        }

        Ok(Invocation::ObjectCreation(ObjectCreation {
            type_identifier,
            arguments,
        }))
    }

    fn first_identifier(&self, node: Node) -> Result<Option<String>> {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|c| c.kind() == "identifier");
        found.map(|n| contents(n, self.lines)).transpose()
    }

    /// Counts the `[]` pairs written after a declarator's name.
    fn declarator_dimensions(&self, declarator: Node) -> Result<usize> {
        match declarator.child_by_field_name("dimensions") {
            Some(d) => Ok(contents(d, self.lines)?.matches('[').count()),
            None => Ok(0),
        }
    }
}
