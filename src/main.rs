//! PDF Quiz Extractor - Entry point
//!
//! Converts a PDF of multiple-choice questions into quiz JSON.

use clap::Parser;
use pdf_quiz_extractor::pdf::{PdfiumExtractor, TextMode};
use pdf_quiz_extractor::{run, ExtractorConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// PDF to read (default: questions.pdf next to the executable)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON file to write (default: output/questions.json next to the executable)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Raw text file to write (default: output/extracted_text.txt next to the executable)
    #[arg(long)]
    text_output: Option<PathBuf>,

    /// Number of characters of extracted text to preview in the log
    #[arg(long)]
    preview_chars: Option<usize>,

    /// Rebuild lines from character positions instead of PDFium's text order
    #[arg(long)]
    layout: bool,

    /// Password for encrypted PDFs
    #[arg(long)]
    password: Option<String>,

    /// Directory containing the PDFium library
    #[arg(long)]
    pdfium_dir: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> ExtractorConfig {
        let defaults = ExtractorConfig::default();
        ExtractorConfig {
            input: self.input.unwrap_or(defaults.input),
            json_output: self.output.unwrap_or(defaults.json_output),
            text_output: self.text_output.unwrap_or(defaults.text_output),
            preview_chars: self.preview_chars.unwrap_or(defaults.preview_chars),
            text_mode: if self.layout {
                TextMode::Layout
            } else {
                TextMode::Plain
            },
            password: self.password,
            pdfium_dir: self.pdfium_dir,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_quiz_extractor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Args::parse().into_config();

    let bind_pdfium = |config: &ExtractorConfig| {
        PdfiumExtractor::new(config.pdfium_dir.as_deref()).map(|extractor| {
            extractor
                .with_mode(config.text_mode)
                .with_password(config.password.clone())
        })
    };

    match run(&config, bind_pdfium).await {
        Ok(report) if report.json_output.is_some() => {
            tracing::info!("Conversion finished: {} questions", report.question_count);
        }
        Ok(_) => tracing::warn!("Conversion finished without JSON output"),
        // Reported once, by anyhow, with a nonzero exit status
        Err(e) if e.is_fatal() => return Err(e.into()),
        Err(e) => tracing::error!("Conversion failed: {}", e),
    }

    Ok(())
}
