//! CV extractor: pull personal data out of a folder of CVs with an LLM

use clap::Parser;
use cv_extractor::cli::{self, Cli, Commands, ConfigAction, ExtractArgs};
use cv_extractor::config::Config;
use cv_extractor::error::{CvExtractorError, Result};
use cv_extractor::llm::client::ChatCompletionClient;
use cv_extractor::llm::extractor::FieldExtractor;
use cv_extractor::logging;
use cv_extractor::output::{self, summary::SummaryFormatter};
use cv_extractor::processing::ExtractionPipeline;
use log::{error, info};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {:#}", e);
        process::exit(1);
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let command = cli.command.unwrap_or_else(|| Commands::Extract(ExtractArgs::default()));

    let outcome = match command {
        Commands::Extract(args) => {
            // Resolve the folder before racing ctrl-c; the prompt blocks on stdin.
            let input_dir = args.input.clone()
                .or_else(|| config.input_dir.clone())
                .or_else(prompt_for_folder);

            let Some(input_dir) = input_dir else {
                error!("CV folder path is required");
                process::exit(1);
            };

            tokio::select! {
                biased;
                _ = tokio::signal::ctrl_c() => {
                    info!("Process interrupted by user");
                    process::exit(0);
                }
                res = run_extract(args, input_dir, config) => res,
            }
        }
        Commands::Config { action } => run_config(action, &config),
    };

    match outcome {
        Ok(()) => {}
        Err(CvExtractorError::NothingToExport) => process::exit(1),
        Err(e) => {
            error!("Fatal error: {}", e);
            process::exit(1);
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env();
    Ok(config)
}

fn prompt_for_folder() -> Option<PathBuf> {
    println!("\n{}", "=".repeat(60));
    println!("CV Personal Data Extraction System");
    println!("{}", "=".repeat(60));
    print!("\nEnter the path to the CV folder: ");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    let line = line.trim();
    if line.is_empty() {
        None
    } else {
        Some(PathBuf::from(line))
    }
}

async fn run_extract(args: ExtractArgs, input_dir: PathBuf, mut config: Config) -> Result<()> {
    if let Some(format) = args.format.as_deref() {
        let format = cli::parse_output_format(format).map_err(CvExtractorError::InvalidInput)?;
        config.set_output_format(format);
    }
    // An explicit output path wins over the renamed default.
    if let Some(output) = args.output {
        config.output.path = output;
    }
    if args.no_color {
        config.output.color_output = false;
    }

    info!("Initializing CV Extractor...");
    let client = ChatCompletionClient::from_config(&config)?;
    info!("Using model {} at {}", client.model(), config.completions_endpoint());
    let pipeline = ExtractionPipeline::new(FieldExtractor::new(client, config.extraction.clone()));

    info!("Starting to process CVs from: {}", input_dir.display());
    let result = pipeline.run(&input_dir).await?;

    let saved = match output::export(&result, &config.output.path, config.output.format) {
        Ok(_) => true,
        Err(CvExtractorError::NothingToExport) => false,
        Err(e) => return Err(e),
    };

    let summary = SummaryFormatter::new(config.output.color_output);
    print!("{}", summary.format(&result, saved.then_some(config.output.path.as_path())));

    if saved {
        Ok(())
    } else {
        Err(CvExtractorError::NothingToExport)
    }
}

fn run_config(action: Option<ConfigAction>, config: &Config) -> Result<()> {
    match action {
        Some(ConfigAction::Show) | None => {
            println!("⚙️  Current Configuration\n");
            println!("Config File: {}", Config::config_path().display());
            println!("API Endpoint: {}", config.completions_endpoint());
            println!("Model: {}", config.api.model);
            println!(
                "API Key ({}): {}",
                config.api.api_key_env,
                if config.api_key().is_ok() { "set" } else { "not set" }
            );
            match config.api.timeout_secs {
                Some(secs) => println!("Request Timeout: {}s", secs),
                None => println!("Request Timeout: service default"),
            }
            println!("\nExtraction:");
            println!("  Max input characters: {}", config.extraction.max_input_chars);
            println!("  Max output tokens: {}", config.extraction.max_tokens);
            println!("  Temperature: {}", config.extraction.temperature);
            println!("\nOutput:");
            println!("  Path: {}", config.output.path.display());
            println!("  Format: {:?}", config.output.format);
            if let Some(dir) = &config.input_dir {
                println!("\nInput Folder: {}", dir.display());
            }
        }

        Some(ConfigAction::Reset) => {
            println!("🔄 Resetting configuration to defaults...");
            Config::default().save()?;
            println!("✅ Configuration reset successfully!");
        }

        Some(ConfigAction::Path) => {
            println!("{}", Config::config_path().display());
        }
    }

    Ok(())
}
