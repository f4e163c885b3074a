//! Resume parser: heuristic field extraction from PDF, DOCX, TXT and Markdown resumes

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_parser::cli::{self, Cli, Commands, ConfigAction};
use resume_parser::config::{Config, OutputFormat};
use resume_parser::input::InputManager;
use resume_parser::output::{save_report_to_file, suggest_filename, ParsedResume, ReportGenerator};
use resume_parser::processing::{LanguageService, ResumeParser, RuleBasedLanguageService};
use resume_parser::{Result, ResumeParserError};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let loaded = match &cli.config {
        _ if !cli.command.needs_config() => Ok(Config::default()),
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_override: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Parse {
            files,
            output,
            save,
            out_dir,
            no_ner,
        } => {
            let format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeParserError::InvalidInput)?,
                None => config.output.format,
            };

            let mut extraction = config.extraction.clone();
            if no_ner {
                extraction.enable_entity_fallback = false;
            }

            let language: Arc<dyn LanguageService> = Arc::new(RuleBasedLanguageService::load()?);
            let parser = Arc::new(ResumeParser::new(&extraction, language)?);

            let (reports, failures) = parse_files(&files, &config, parser).await;

            let to_file = save.is_some() || out_dir.is_some();
            let generator = ReportGenerator::with_options(
                config.output.color_output && !to_file,
                config.output.pretty_json,
                true,
            );

            if let Some(dir) = out_dir {
                for report in &reports {
                    let path = dir.join(suggest_filename(format, &report.metadata.source));
                    save_report_to_file(&generator.generate_report(report, format)?, &path)?;
                    println!("💾 {} -> {}", report.metadata.source, path.display());
                }
            } else if let Some(path) = save {
                save_report_to_file(&render(&generator, &reports, format)?, &path)?;
                println!("💾 Saved {} result(s) to {}", reports.len(), path.display());
            } else if !reports.is_empty() {
                println!("{}", render(&generator, &reports, format)?);
            }

            if failures > 0 {
                return Err(ResumeParserError::Extraction(format!(
                    "{} of {} file(s) could not be parsed",
                    failures,
                    files.len()
                )));
            }
        }

        Commands::Config { action } => {
            let path = config_override.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    let rendered = toml::to_string_pretty(&config)
                        .map_err(|e| ResumeParserError::Configuration(e.to_string()))?;
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    println!("{}", rendered);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// A single result renders on its own; several render as one batch.
fn render(generator: &ReportGenerator, reports: &[ParsedResume], format: OutputFormat) -> Result<String> {
    match reports {
        [single] => generator.generate_report(single, format),
        _ => generator.generate_batch(reports, format),
    }
}

/// Convert and parse every file concurrently. Results keep the input order;
/// failures are reported and counted.
async fn parse_files(files: &[PathBuf], config: &Config, parser: Arc<ResumeParser>) -> (Vec<ParsedResume>, usize) {
    let progress = if files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut tasks = JoinSet::new();
    for (index, path) in files.iter().enumerate() {
        let path = path.clone();
        let parser = Arc::clone(&parser);
        let config = config.clone();
        tasks.spawn(async move {
            let result = parse_one(&path, &config, parser).await;
            (index, path, result)
        });
    }

    let mut slots: Vec<Option<ParsedResume>> = vec![None; files.len()];
    let mut failures = 0;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, path, Ok(report))) => {
                progress.set_message(path.display().to_string());
                slots[index] = Some(report);
            }
            Ok((_, path, Err(e))) => {
                failures += 1;
                progress.suspend(|| eprintln!("❌ {}: {}", path.display(), e));
            }
            Err(e) => {
                failures += 1;
                progress.suspend(|| eprintln!("❌ Parse task failed: {}", e));
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    (slots.into_iter().flatten().collect(), failures)
}

async fn parse_one(path: &Path, config: &Config, parser: Arc<ResumeParser>) -> Result<ParsedResume> {
    if let Err(e) = cli::validate_file_extension(path, &config.input.allowed_formats) {
        warn!("{}: {}; falling back to content detection", path.display(), e);
    }

    let started = Instant::now();
    let mut input_manager = InputManager::from_config(&config.input)
        .with_max_bytes(config.extraction.max_input_bytes as u64);
    let text = input_manager.extract_text(path).await?;
    info!("Extracted {} characters from {}", text.len(), path.display());

    let record = tokio::task::spawn_blocking(move || parser.parse(&text))
        .await
        .map_err(|e| ResumeParserError::Extraction(format!("parser worker failed: {}", e)))??;

    Ok(ParsedResume::new(
        path.display().to_string(),
        record,
        started.elapsed().as_millis() as u64,
    ))
}
