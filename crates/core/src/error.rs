use crate::model::Span;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreescopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parsing error: {0}")]
    Parsing(String),
    #[error(
        "Unrecognized type syntax `{kind}` at {}:{}: {text}",
        .row + 1,
        .column + 1
    )]
    UnrecognizedTypeSyntax {
        kind: String,
        text: String,
        row: usize,
        column: usize,
    },
    #[error("Malformed span {span} for a source of {line_count} lines")]
    MalformedSpan { span: Span, line_count: usize },
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, TreescopeError>;
