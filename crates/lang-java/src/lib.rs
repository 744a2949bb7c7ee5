pub mod parser;

pub use parser::JavaAnalyzer;
