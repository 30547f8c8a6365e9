//! CLI interface for the CV extractor

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cv-extractor")]
#[command(about = "Extract personal data from CV files using an LLM completion API")]
#[command(long_about = "Reads every PDF, DOCX, DOC and TXT file in a folder, asks a chat-completion model for the candidate's personal details and writes one table row per CV")]
pub struct Cli {
    /// Defaults to `extract` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Also append log lines to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract personal data from every CV in a folder
    Extract(ExtractArgs),

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ExtractArgs {
    /// Folder containing the CV files (falls back to CV_FOLDER_PATH, then a prompt)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (falls back to OUTPUT_CSV_PATH, then the config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: csv, json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Disable colored summary output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "csv" => Ok(OutputFormat::Csv),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: csv, json", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_extract_defaults() {
        let cli = Cli::try_parse_from(["cv-extractor"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_extract_arguments() {
        let cli = Cli::try_parse_from([
            "cv-extractor", "extract", "-i", "./cvs", "-o", "out.json", "-f", "json", "--log-file", "run.log",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Extract(args)) => {
                assert_eq!(args.input, Some(PathBuf::from("./cvs")));
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
                assert_eq!(args.format.as_deref(), Some("json"));
            }
            _ => panic!("expected extract command"),
        }
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("CSV"), Ok(OutputFormat::Csv));
        assert_eq!(parse_output_format("json"), Ok(OutputFormat::Json));
        assert!(parse_output_format("xlsx").is_err());
    }
}
