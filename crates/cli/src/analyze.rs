use clap::ValueEnum;
use std::path::PathBuf;
use tracing::info;
use treescope_core::ScopeTree;
use treescope_java::JavaAnalyzer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run(
    path: PathBuf,
    format: OutputFormat,
    indent: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = crate::input::read_source(&path)?;

    info!("Analyzing {}...", path.display());
    let tree = JavaAnalyzer::new().analyze(&source)?;
    info!(
        "Found {} classes, {} records, {} functions",
        tree.all_classes().len(),
        tree.all_records().len(),
        tree.all_functions().len()
    );

    println!("{}", render(&tree, format, indent)?);
    Ok(())
}

pub fn render(
    tree: &ScopeTree,
    format: OutputFormat,
    indent: usize,
) -> treescope_core::Result<String> {
    match format {
        OutputFormat::Text => Ok(tree.format(indent)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&tree.root)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_and_json() {
        let tree = JavaAnalyzer::new()
            .analyze("class A { void run() { go(); } }")
            .unwrap();

        let text = render(&tree, OutputFormat::Text, 0).unwrap();
        assert!(text.starts_with("File\n  default class A\n"));
        assert!(text.contains("Invoke: go()"));

        let json: serde_json::Value =
            serde_json::from_str(&render(&tree, OutputFormat::Json, 0).unwrap()).unwrap();
        assert_eq!(json["children"][0]["identifier"], "A");
    }
}
