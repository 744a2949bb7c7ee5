use super::{Field, Import, Invocation, SourceLines};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageScope {
    pub identifiers: Vec<String>,
}

impl PackageScope {
    pub fn joined(&self) -> String {
        self.identifiers.join(".")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassScope {
    pub modifiers: String,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordScope {
    pub modifiers: String,
    pub identifier: String,
    pub formal_parameters: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionScope {
    pub modifiers: String,
    pub identifier: String,
    pub parameters: String,
    pub return_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScopeKind {
    File,
    Package(PackageScope),
    Class(ClassScope),
    Record(RecordScope),
    Function(FunctionScope),
}

/// One lexical scope with the facts found directly inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeNode {
    #[serde(flatten)]
    pub kind: ScopeKind,
    imports: Vec<Import>,
    fields: Vec<Field>,
    invocations: Vec<Invocation>,
    children: Vec<ScopeNode>,
}

impl ScopeNode {
    pub fn new(kind: ScopeKind) -> Self {
        Self {
            kind,
            imports: Vec::new(),
            fields: Vec::new(),
            invocations: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn file() -> Self {
        Self::new(ScopeKind::File)
    }

    /// Appends a child scope and returns it so traversal can continue inside.
    pub fn open_child(&mut self, kind: ScopeKind) -> &mut ScopeNode {
        tracing::debug!(scope = ?kind, "opening scope");
        self.children.push(ScopeNode::new(kind));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn add_import(&mut self, import: Import) {
        self.imports.push(import);
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn add_invocation(&mut self, invocation: Invocation) {
        self.invocations.push(invocation);
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    pub fn children(&self) -> &[ScopeNode] {
        &self.children
    }

    /// Follows a path of child indices down from this scope.
    /// An empty path is the scope itself.
    pub fn descendant_mut(&mut self, path: &[usize]) -> Option<&mut ScopeNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get_mut(index))
    }

    /// Strict descendants in depth-first preorder.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// This scope followed by its descendants.
    fn subtree(&self) -> impl Iterator<Item = &ScopeNode> {
        std::iter::once(self).chain(self.descendants())
    }

    pub fn all_imports(&self) -> Vec<&Import> {
        self.subtree().flat_map(|s| s.imports.iter()).collect()
    }

    pub fn all_fields(&self) -> Vec<&Field> {
        self.subtree().flat_map(|s| s.fields.iter()).collect()
    }

    pub fn all_invocations(&self) -> Vec<&Invocation> {
        self.subtree().flat_map(|s| s.invocations.iter()).collect()
    }

    pub fn all_packages(&self) -> Vec<&PackageScope> {
        self.descendants()
            .filter_map(|s| match &s.kind {
                ScopeKind::Package(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn all_classes(&self) -> Vec<&ClassScope> {
        self.descendants()
            .filter_map(|s| match &s.kind {
                ScopeKind::Class(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    pub fn all_records(&self) -> Vec<&RecordScope> {
        self.descendants()
            .filter_map(|s| match &s.kind {
                ScopeKind::Record(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn all_functions(&self) -> Vec<&FunctionScope> {
        self.descendants()
            .filter_map(|s| match &s.kind {
                ScopeKind::Function(f) => Some(f),
                _ => None,
            })
            .collect()
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a ScopeNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a ScopeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Result of analyzing one compilation unit: the File scope together with
/// the source lines its facts were cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeTree {
    pub lines: SourceLines,
    pub root: ScopeNode,
}

impl ScopeTree {
    pub fn new(lines: SourceLines, root: ScopeNode) -> Self {
        Self { lines, root }
    }

    pub fn all_packages(&self) -> Vec<&PackageScope> {
        self.root.all_packages()
    }

    pub fn all_imports(&self) -> Vec<&Import> {
        self.root.all_imports()
    }

    pub fn all_classes(&self) -> Vec<&ClassScope> {
        self.root.all_classes()
    }

    pub fn all_records(&self) -> Vec<&RecordScope> {
        self.root.all_records()
    }

    pub fn all_fields(&self) -> Vec<&Field> {
        self.root.all_fields()
    }

    pub fn all_functions(&self) -> Vec<&FunctionScope> {
        self.root.all_functions()
    }

    pub fn all_invocations(&self) -> Vec<&Invocation> {
        self.root.all_invocations()
    }

    pub fn format(&self, indent: usize) -> String {
        self.root.format(indent)
    }
}
