use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ocrmd::config::Config;
use ocrmd::{RunOutcome, TesseractEngine};

const USAGE: &str = "使用方法: ocrmd <画像フォルダのパス>";

#[derive(Parser)]
#[command(name = "ocrmd")]
#[command(about = "Run OCR on every image in a folder and save the text as ocr_results.md")]
#[command(version)]
struct Args {
    /// Folder containing the images
    #[arg(allow_hyphen_values = true)]
    folder: PathBuf,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ocrmd=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = execute(&args, &mut out) {
        tracing::error!("Run failed: {}", e);
        let _ = writeln!(out, "エラーが発生しました: {e}");
    }

    ExitCode::SUCCESS
}

fn execute(args: &Args, out: &mut dyn Write) -> anyhow::Result<RunOutcome> {
    let config = Config::from_env();

    tracing::info!("Initializing OCR engine: {}...", config.ocr.languages);
    let mut engine = TesseractEngine::new(&config.ocr);
    if !engine.is_available() {
        tracing::warn!("OCR unavailable - every image will be reported as an error");
    }

    let outcome = ocrmd::run(&args.folder, &mut engine, &config.ocr.languages, out)?;
    Ok(outcome)
}
