use tree_sitter::{Parser, Tree};
use treescope_core::model::{ScopeNode, ScopeTree, SourceLines};
use treescope_core::{Result, TreescopeError};

mod contents;
mod naming;
mod traverse;
mod types;

use contents::span_from_ts;
use traverse::Traversal;

/// Turns Java source into a [`ScopeTree`].
///
/// A fresh tree-sitter parser is created for every call, so one analyzer can
/// be shared freely and concurrent calls never observe each other's state.
#[derive(Clone)]
pub struct JavaAnalyzer {
    language: tree_sitter::Language,
}

impl Default for JavaAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaAnalyzer {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }

    pub fn parse(&self, source: &str) -> Result<Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| TreescopeError::Parsing(e.to_string()))?;
        parser
            .parse(source, None)
            .ok_or_else(|| TreescopeError::Parsing("Failed to parse Java source".to_string()))
    }

    /// Builds the scope model of one compilation unit.
    pub fn analyze(&self, source: &str) -> Result<ScopeTree> {
        let tree = self.parse(source)?;
        let root = tree.root_node();
        if root.has_error() {
            tracing::warn!("Java source contains syntax errors; results may be incomplete");
        }

        let lines = SourceLines::new(source);
        let mut file = ScopeNode::file();
        Traversal::new(&lines).run(root, &mut file)?;

        tracing::debug!(
            scopes = file.descendants().count(),
            imports = file.all_imports().len(),
            invocations = file.all_invocations().len(),
            "analyzed compilation unit"
        );
        Ok(ScopeTree::new(lines, file))
    }

    /// Dumps the raw syntax tree, one `kind [row, col] - [row, col]` line per node.
    pub fn render_tree(&self, source: &str) -> Result<String> {
        let tree = self.parse(source)?;
        let mut out = String::new();
        let mut stack = vec![(tree.root_node(), 0usize)];
        while let Some((node, depth)) = stack.pop() {
            out.push_str(&"  ".repeat(depth));
            out.push_str(node.kind());
            out.push(' ');
            out.push_str(&span_from_ts(node.range()).to_string());
            out.push('\n');

            let mut cursor = node.walk();
            let children: Vec<_> = node.children(&mut cursor).collect();
            stack.extend(children.into_iter().rev().map(|c| (c, depth + 1)));
        }
        Ok(out)
    }
}
