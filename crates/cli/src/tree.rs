use std::path::PathBuf;
use treescope_java::JavaAnalyzer;

pub fn run(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let source = crate::input::read_source(&path)?;
    print!("{}", JavaAnalyzer::new().render_tree(&source)?);
    Ok(())
}
