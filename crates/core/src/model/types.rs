use serde::Serialize;
use std::fmt;

/// Structural shape of a type as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TypeIdentifier {
    Concrete {
        name: String,
    },
    Generic {
        name: String,
        type_parameters: Vec<TypeIdentifier>,
    },
    Array {
        element: Box<TypeIdentifier>,
        dimensions: usize,
    },
    Wildcard {
        bound: Option<WildcardBound>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WildcardBound {
    pub is_upper: bool,
    pub bound: Box<TypeIdentifier>,
}

impl TypeIdentifier {
    pub fn concrete(name: impl Into<String>) -> Self {
        TypeIdentifier::Concrete { name: name.into() }
    }

    pub fn generic(name: impl Into<String>, type_parameters: Vec<TypeIdentifier>) -> Self {
        TypeIdentifier::Generic {
            name: name.into(),
            type_parameters,
        }
    }

    /// Adds `extra` array dimensions, as a C-style declarator like `int a[]` does.
    /// An existing array grows deeper instead of being nested.
    pub fn with_dimensions(self, extra: usize) -> Self {
        match (self, extra) {
            (ty, 0) => ty,
            (
                TypeIdentifier::Array {
                    element,
                    dimensions,
                },
                extra,
            ) => TypeIdentifier::Array {
                element,
                dimensions: dimensions + extra,
            },
            (ty, extra) => TypeIdentifier::Array {
                element: Box::new(ty),
                dimensions: extra,
            },
        }
    }

    /// The outermost type name, `?` for wildcards.
    pub fn name(&self) -> &str {
        match self {
            TypeIdentifier::Concrete { name } | TypeIdentifier::Generic { name, .. } => name,
            TypeIdentifier::Array { element, .. } => element.name(),
            TypeIdentifier::Wildcard { .. } => "?",
        }
    }
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeIdentifier::Concrete { name } => f.write_str(name),
            TypeIdentifier::Generic {
                name,
                type_parameters,
            } => {
                write!(f, "{}<", name)?;
                for (i, param) in type_parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                f.write_str(">")
            }
            TypeIdentifier::Array {
                element,
                dimensions,
            } => {
                write!(f, "{}", element)?;
                for _ in 0..*dimensions {
                    f.write_str("[]")?;
                }
                Ok(())
            }
            TypeIdentifier::Wildcard { bound: None } => f.write_str("?"),
            TypeIdentifier::Wildcard {
                bound: Some(WildcardBound { is_upper, bound }),
            } => {
                let keyword = if *is_upper { "extends" } else { "super" };
                write!(f, "? {} {}", keyword, bound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested_generic() {
        let ty = TypeIdentifier::generic(
            "Map",
            vec![
                TypeIdentifier::concrete("Int"),
                TypeIdentifier::generic("List", vec![TypeIdentifier::concrete("String")]),
            ],
        );
        assert_eq!(ty.to_string(), "Map<Int, List<String>>");
        assert_eq!(ty.name(), "Map");
    }

    #[test]
    fn test_display_array_and_wildcard() {
        let array = TypeIdentifier::Array {
            element: Box::new(TypeIdentifier::concrete("int")),
            dimensions: 2,
        };
        assert_eq!(array.to_string(), "int[][]");

        let wildcard = TypeIdentifier::Wildcard {
            bound: Some(WildcardBound {
                is_upper: false,
                bound: Box::new(TypeIdentifier::concrete("Number")),
            }),
        };
        assert_eq!(wildcard.to_string(), "? super Number");
        assert_eq!(TypeIdentifier::Wildcard { bound: None }.to_string(), "?");
    }

    #[test]
    fn test_diamond_generic_has_no_parameters() {
        assert_eq!(TypeIdentifier::generic("HashMap", vec![]).to_string(), "HashMap<>");
    }

    #[test]
    fn test_with_dimensions() {
        let int = TypeIdentifier::concrete("int");
        assert_eq!(int.clone().with_dimensions(0), int);
        assert_eq!(int.clone().with_dimensions(1).to_string(), "int[]");

        let names = TypeIdentifier::concrete("String").with_dimensions(1);
        let deeper = names.with_dimensions(1);
        assert_eq!(deeper.to_string(), "String[][]");
        assert_eq!(deeper.name(), "String");
    }
}
