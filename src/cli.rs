//! CLI interface for the resume parser

use crate::input::FileType;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-parser")]
#[command(about = "Heuristic resume field extractor")]
#[command(long_about = "Extract name, email, CGPA, skills, education, projects and experience from PDF, DOCX, TXT and Markdown resumes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one or more resumes
    Parse {
        /// Resume files (PDF, DOCX, TXT, MD)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save all results to a single file
        #[arg(short, long, conflicts_with = "out_dir")]
        save: Option<PathBuf>,

        /// Write one result file per resume into this directory
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Skip the entity-recognition name fallback
        #[arg(long)]
        no_ner: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
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

impl Commands {
    /// `config reset` and `config path` run without reading a config file.
    pub fn needs_config(&self) -> bool {
        !matches!(
            self,
            Commands::Config {
                action: Some(ConfigAction::Reset | ConfigAction::Path)
            }
        )
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[String]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            let canonical = FileType::from_extension(ext).extension();
            if canonical.is_some_and(|c| allowed_extensions.iter().any(|allowed| allowed == c)) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_command() {
        let cli = Cli::try_parse_from([
            "resume-parser", "parse", "a.pdf", "b.md", "-o", "json", "--out-dir", "out", "--no-ner",
        ])
        .unwrap();

        match cli.command {
            Commands::Parse { files, output, out_dir, no_ner, save } => {
                assert_eq!(files.len(), 2);
                assert_eq!(output.as_deref(), Some("json"));
                assert_eq!(out_dir, Some(PathBuf::from("out")));
                assert!(no_ner);
                assert!(save.is_none());
            }
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_save_conflicts_with_out_dir() {
        let result = Cli::try_parse_from([
            "resume-parser", "parse", "a.pdf", "--save", "x.json", "--out-dir", "out",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_reset_and_path_skip_loading() {
        let parse = |args: &[&str]| Cli::try_parse_from(args.iter().copied()).unwrap().command;

        assert!(!parse(&["resume-parser", "-c", "new.toml", "config", "reset"]).needs_config());
        assert!(!parse(&["resume-parser", "config", "path"]).needs_config());
        assert!(parse(&["resume-parser", "config", "show"]).needs_config());
        assert!(parse(&["resume-parser", "config"]).needs_config());
        assert!(parse(&["resume-parser", "parse", "a.pdf"]).needs_config());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = vec!["pdf".to_string(), "md".to_string()];
        assert!(validate_file_extension(Path::new("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("cv.markdown"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("cv.exe"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("cv"), &allowed).is_err());
    }
}
