mod analyze;
mod input;
mod tree;

pub use analyze::{OutputFormat, render};
pub use input::{InputError, read_source};

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use treescope_core::logging::{LogConfig, init_logging};

#[derive(Parser)]
#[command(
    name = "treescope",
    version,
    about = "Summarizes the declarations and call sites of a Java source file",
    long_about = "Treescope parses a single Java compilation unit and reports its packages, imports, \
                  classes, records, fields, functions and call sites as a nested scope tree."
)]
pub struct Cli {
    /// Mirror log output to stderr and include debug events
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a Java file and print its scope tree
    Analyze {
        /// Path to the Java source file
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Base indentation of the text report
        #[arg(long, default_value_t = 0)]
        indent: usize,
    },
    /// Print the raw syntax tree with node kinds and spans
    Tree {
        /// Path to the Java source file
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let log_config = LogConfig::from_env("cli", cli.verbose);
    let _guard = match init_logging(&log_config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    };

    match cli.command {
        Commands::Analyze {
            path,
            format,
            indent,
        } => analyze::run(path, format, indent),
        Commands::Tree { path } => tree::run(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_defaults() {
        let cli = Cli::try_parse_from(["treescope", "analyze", "Main.java"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Analyze {
                path,
                format,
                indent,
            } => {
                assert_eq!(path, PathBuf::from("Main.java"));
                assert_eq!(format, OutputFormat::Text);
                assert_eq!(indent, 0);
            }
            _ => panic!("Expected analyze command"),
        }
    }

    #[test]
    fn test_parse_json_format_and_verbose() {
        let cli = Cli::try_parse_from([
            "treescope", "analyze", "A.java", "--format", "json", "--indent", "4", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Analyze {
                format: OutputFormat::Json,
                indent: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_file_argument_is_required() {
        assert!(Cli::try_parse_from(["treescope", "tree"]).is_err());
    }
}
