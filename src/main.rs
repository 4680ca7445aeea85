use anyhow::Context;
use clap::Parser;
use dialoguer::Input;
use std::path::{Path, PathBuf};
use wordsolver::answer::OpenAiClient;
use wordsolver::cli::{Cli, Commands};
use wordsolver::config::Config;
use wordsolver::error::{Result, WordSolverError};
use wordsolver::intake;
use wordsolver::ocr::TesseractRecognizer;
use wordsolver::record::SubmissionRecord;
use wordsolver::render::Renderer;
use wordsolver::ImageSolver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    wordsolver::logging::init_logging(cli.verbose);

    let config = Config::load().context("failed to load config")?;

    match cli.command {
        Commands::Solve { path, output } => {
            println!("🧮 wordsolver\n");

            let selection = match path {
                Some(path) => Some(path),
                None => prompt_for_path()?,
            };

            let Some(selection) = selection else {
                // 未選択: 何もしない
                tracing::info!("no file selected");
                return Ok(());
            };

            let images = intake::collect_images(&selection)?;
            if images.is_empty() {
                return Err(WordSolverError::NoImagesFound(selection.display().to_string()).into());
            }

            let api_key = config.get_api_key()?;
            let recognizer = TesseractRecognizer::new(config.tesseract_command.clone());
            let generator = OpenAiClient::new(api_key).with_model(config.model.clone());
            let mut solver = ImageSolver::new(recognizer, generator).with_language(config.language.clone());
            let mut renderer = Renderer::new();

            let records = solver
                .solve_all(&images, |state| renderer.observe(state))
                .await;

            if let Some(output) = output {
                write_records(&output, &records)?;
                println!("✔ saved: {}", output.display());
            }
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if show {
                println!("config:");
                println!("  path: {}", Config::config_path()?.display());
                println!("  model: {}", config.model);
                println!("  tesseract: {}", config.tesseract_command);
                println!("  language: {}", config.language);
                println!(
                    "  api key: {}",
                    config.masked_api_key().unwrap_or_else(|| "(not set)".into())
                );
            }
        }
    }

    Ok(())
}

/// パスを対話入力する（空入力は未選択）
fn prompt_for_path() -> Result<Option<PathBuf>> {
    let input: String = Input::new()
        .with_prompt("image path (empty to cancel)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| WordSolverError::CliExecution(e.to_string()))?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(trimmed)))
    }
}

fn write_records(path: &Path, records: &[SubmissionRecord]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
