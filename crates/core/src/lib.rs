pub mod error;
pub mod format;
pub mod logging;
pub mod model;

pub use error::{Result, TreescopeError};
pub use model::ScopeTree;
