use super::TypeIdentifier;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Import {
    pub identifiers: Vec<String>,
    pub is_static: bool,
}

impl Import {
    pub fn new(identifiers: Vec<String>, is_static: bool) -> Self {
        Self {
            identifiers,
            is_static,
        }
    }

    /// Dotted form, e.g. `java.util.*`.
    pub fn joined(&self) -> String {
        self.identifiers.join(".")
    }

    pub fn is_wildcard(&self) -> bool {
        self.identifiers.last().is_some_and(|s| s == "*")
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_static {
            write!(f, "import static {}", self.joined())
        } else {
            write!(f, "import {}", self.joined())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub modifiers: String,
    pub identifier: String,
    pub type_identifier: TypeIdentifier,
}

impl Field {
    pub fn new(
        modifiers: impl Into<String>,
        identifier: impl Into<String>,
        type_identifier: TypeIdentifier,
    ) -> Self {
        Self {
            modifiers: modifiers.into(),
            identifier: identifier.into(),
            type_identifier,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            display_modifiers(&self.modifiers),
            self.identifier,
            self.type_identifier
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Invocation {
    Function(FunctionInvocation),
    ObjectCreation(ObjectCreation),
}

/// A call site. `access_path` holds the plain identifiers in encounter order,
/// qualifiers first and the method name last, so it is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionInvocation {
    pub receiver: Option<String>,
    pub access_path: Vec<String>,
    pub arguments: String,
}

impl FunctionInvocation {
    pub fn method_name(&self) -> &str {
        self.access_path.last().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectCreation {
    pub type_identifier: TypeIdentifier,
    pub arguments: String,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invocation::Function(call) => {
                if let Some(receiver) = &call.receiver {
                    write!(f, "{}.", receiver)?;
                }
                write!(f, "{}{}", call.access_path.join("."), call.arguments)
            }
            Invocation::ObjectCreation(creation) => {
                write!(f, "new {}{}", creation.type_identifier, creation.arguments)
            }
        }
    }
}

/// Package-private declarations carry no modifiers; they render as `default`.
pub(crate) fn display_modifiers(modifiers: &str) -> &str {
    if modifiers.is_empty() {
        "default"
    } else {
        modifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_display() {
        let wildcard = Import::new(vec!["java".into(), "util".into(), "*".into()], false);
        assert_eq!(wildcard.to_string(), "import java.util.*");
        assert!(wildcard.is_wildcard());

        let member = Import::new(
            vec!["java".into(), "util".into(), "List".into(), "of".into()],
            true,
        );
        assert_eq!(member.to_string(), "import static java.util.List.of");
        assert!(!member.is_wildcard());
    }

    #[test]
    fn test_field_display_defaults_modifiers() {
        let field = Field::new("", "count", TypeIdentifier::concrete("int"));
        assert_eq!(field.to_string(), "default count: int");
    }

    #[test]
    fn test_invocation_display() {
        let call = Invocation::Function(FunctionInvocation {
            receiver: Some("this.repo".into()),
            access_path: vec!["save".into()],
            arguments: "(item)".into(),
        });
        assert_eq!(call.to_string(), "this.repo.save(item)");

        let creation = Invocation::ObjectCreation(ObjectCreation {
            type_identifier: TypeIdentifier::generic("ArrayList", vec![]),
            arguments: "()".into(),
        });
        assert_eq!(creation.to_string(), "new ArrayList<>()");
    }
}
