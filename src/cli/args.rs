//! Command-line argument definitions for the registry reporter
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the academic registry reporter
///
/// Builds an in-memory registry from delimited record files (students,
/// instructors, grades, majors) and prints per-entity summary views.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "registrar",
    version,
    about = "Build an academic registry from delimited record files and report summaries",
    long_about = "Reads four field-delimited record files (students, instructors, grades, \
                  major requirements) from a data directory, cross-references them into an \
                  in-memory registry, and reports each student's completed and outstanding \
                  courses with GPA, each instructor's per-course enrollment counts, and each \
                  department's requirement sets."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the registry reporter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Build the registry and print the summary report
    Report(ReportArgs),
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Directory containing students.txt, instructors.txt, grades.txt
    /// and majors.txt (names and shapes overridable via --config)
    #[arg(value_name = "DATA_DIR", help = "Directory containing the record source files")]
    pub data_dir: PathBuf,

    /// Optional TOML file overriding source file names, separators,
    /// field counts, and header presence
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "TOML config file describing the record sources"
    )]
    pub config_file: Option<PathBuf>,

    /// Output format for the three summary views
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        default_value = "text",
        help = "Output format: text or json"
    )]
    pub format: OutputFormat,

    /// Logging verbosity
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level: error, warn, info, debug, trace"
    )]
    pub log_level: String,
}

/// Supported output formats for the summary report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text tables
    Text,
    /// JSON document with the three row arrays
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_args_parse() {
        let args = Args::parse_from(["registrar", "report", "data", "--format", "json"]);

        match args.command {
            Some(Commands::Report(report)) => {
                assert_eq!(report.data_dir, PathBuf::from("data"));
                assert_eq!(report.format, OutputFormat::Json);
                assert_eq!(report.log_level, "warn");
            }
            _ => panic!("Expected report subcommand"),
        }
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let args = Args::parse_from(["registrar"]);
        assert!(args.command.is_none());
    }
}
