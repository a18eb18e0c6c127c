//! Extractor configuration

use crate::output::DEFAULT_PREVIEW_CHARS;
use crate::pdf::TextMode;
use std::path::{Path, PathBuf};

/// Source PDF name, resolved next to the executable
pub const DEFAULT_INPUT_FILE: &str = "questions.pdf";
/// Output directory name, resolved next to the executable
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_JSON_FILE: &str = "questions.json";
pub const DEFAULT_TEXT_FILE: &str = "extracted_text.txt";

/// Configuration for a single extraction run
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Source PDF
    pub input: PathBuf,
    /// Destination of the JSON question array
    pub json_output: PathBuf,
    /// Destination of the raw extracted text
    pub text_output: PathBuf,
    /// Characters of extracted text shown in the log preview (default: 500)
    pub preview_chars: usize,
    /// Text extraction mode (default: plain)
    pub text_mode: TextMode,
    /// Password for encrypted PDFs
    pub password: Option<String>,
    /// Extra directory to look for the PDFium library in
    pub pdfium_dir: Option<PathBuf>,
}

impl ExtractorConfig {
    /// Default configuration with every path resolved under `base_dir`
    pub fn with_base_dir(base_dir: &Path) -> Self {
        let output_dir = base_dir.join(DEFAULT_OUTPUT_DIR);
        Self {
            input: base_dir.join(DEFAULT_INPUT_FILE),
            json_output: output_dir.join(DEFAULT_JSON_FILE),
            text_output: output_dir.join(DEFAULT_TEXT_FILE),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            text_mode: TextMode::default(),
            password: None,
            pdfium_dir: None,
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::with_base_dir(&executable_dir())
    }
}

/// Directory containing the running executable, or `.` if it cannot be determined
pub fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
