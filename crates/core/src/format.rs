//! Indented text rendering of a scope tree.

use crate::model::facts::display_modifiers;
use crate::model::{ScopeKind, ScopeNode};
use std::fmt::Write;

impl ScopeKind {
    pub fn header(&self) -> String {
        match self {
            ScopeKind::File => "File".to_string(),
            ScopeKind::Package(p) => format!("Package {}", p.joined()),
            ScopeKind::Class(c) => {
                format!("{} class {}", display_modifiers(&c.modifiers), c.identifier)
            }
            ScopeKind::Record(r) => format!(
                "{} record {}{}",
                display_modifiers(&r.modifiers),
                r.identifier,
                r.formal_parameters
            ),
            ScopeKind::Function(f) => format!(
                "{} {} {}: {}",
                display_modifiers(&f.modifiers),
                f.identifier,
                f.parameters,
                f.return_type
            ),
        }
    }
}

impl ScopeNode {
    /// Renders this scope at `indent` spaces: the header, then its imports,
    /// fields and invocations, then every child two spaces deeper.
    pub fn format(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_formatted(&mut out, indent);
        out
    }

    fn write_formatted(&self, out: &mut String, indent: usize) {
        let pad = " ".repeat(indent);
        let sub = " ".repeat(indent + 2);

        let _ = writeln!(out, "{}{}", pad, self.kind.header());
        for import in self.imports() {
            let _ = writeln!(out, "{}{}", sub, import);
        }
        for field in self.fields() {
            let _ = writeln!(out, "{}{}", sub, field);
        }
        for invocation in self.invocations() {
            let _ = writeln!(out, "{}Invoke: {}", sub, invocation);
        }
        for child in self.children() {
            child.write_formatted(out, indent + 2);
        }
    }
}
