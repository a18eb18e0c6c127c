//! The extraction run: read, extract, dump, segment, write

use crate::config::ExtractorConfig;
use crate::error::{Error, Result};
use crate::output::{text_preview, write_questions, write_raw_text};
use crate::pdf::TextExtractor;
use crate::segmenter::segment_questions;
use std::path::PathBuf;

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Characters in the extracted text
    pub text_chars: usize,
    /// Questions written to the JSON output
    pub question_count: usize,
    /// Where the raw text was written
    pub text_output: PathBuf,
    /// Where the JSON was written, if any questions were found
    pub json_output: Option<PathBuf>,
}

/// Convert the configured PDF into a JSON question array.
///
/// The raw text is always written once extraction succeeds. The JSON file is
/// only written when at least one complete question was found.
pub async fn convert<E: TextExtractor>(
    config: &ExtractorConfig,
    extractor: &E,
) -> Result<ConversionReport> {
    tracing::info!("Reading {}", config.input.display());
    let data = tokio::fs::read(&config.input).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::PdfNotFound {
                path: config.input.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    let text = extractor.extract_text(&data)?;
    let text_chars = text.chars().count();
    tracing::info!("Extracted {} characters of text", text_chars);
    tracing::info!("Preview:\n{}", text_preview(&text, config.preview_chars));

    write_raw_text(&config.text_output, &text).await?;
    tracing::info!("Raw text saved to {}", config.text_output.display());

    let questions = segment_questions(&text);
    tracing::info!("Found {} questions", questions.len());

    let json_output = if questions.is_empty() {
        tracing::info!(
            "No questions could be parsed automatically. Convert manually using {}",
            config.text_output.display()
        );
        None
    } else {
        write_questions(&config.json_output, &questions).await?;
        tracing::info!(
            "Saved {} questions to {}",
            questions.len(),
            config.json_output.display()
        );
        Some(config.json_output.clone())
    };

    Ok(ConversionReport {
        text_chars,
        question_count: questions.len(),
        text_output: config.text_output.clone(),
        json_output,
    })
}

/// Acquire an extractor, then convert.
///
/// `bind` runs before any file is read, so a missing extraction library
/// surfaces as a fatal error with nothing written.
pub async fn run<E, F>(config: &ExtractorConfig, bind: F) -> Result<ConversionReport>
where
    E: TextExtractor,
    F: FnOnce(&ExtractorConfig) -> Result<E>,
{
    let extractor = bind(config)?;
    convert(config, &extractor).await
}
