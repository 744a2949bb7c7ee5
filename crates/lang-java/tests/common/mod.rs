use treescope_core::ScopeTree;
use treescope_java::JavaAnalyzer;

pub fn analyze(source: &str) -> ScopeTree {
    JavaAnalyzer::new()
        .analyze(source)
        .expect("Failed to analyze Java source")
}
