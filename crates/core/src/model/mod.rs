pub mod facts;
pub mod scope;
pub mod source;
pub mod types;

pub use facts::*;
pub use scope::*;
pub use source::*;
pub use types::*;
