//! PDF reader wrapper for PDFium

use crate::error::{Error, Result};
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};

/// How page text is pulled out of PDFium
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextMode {
    /// PDFium's own text ordering
    #[default]
    Plain,
    /// Characters regrouped into lines by their Y coordinate
    Layout,
}

/// Converts a PDF's bytes into a single plain-text string
pub trait TextExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String>;
}

/// Bind to the PDFium library.
///
/// Tries `library_dir` first when given, then the executable's directory,
/// the working directory, `/opt/pdfium/lib` and finally the system library.
fn bind_pdfium(library_dir: Option<&Path>) -> Result<Pdfium> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(dir) = library_dir {
        candidates.push(dir.to_path_buf());
    }
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir);
    }
    candidates.push(PathBuf::from("./"));
    candidates.push(PathBuf::from("/opt/pdfium/lib"));

    let mut last_error = None;
    for dir in &candidates {
        let dir_name = dir.to_string_lossy();
        match Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&*dir_name)) {
            Ok(bindings) => {
                tracing::debug!("Bound PDFium from {}", dir.display());
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => last_error = Some(e),
        }
    }

    match Pdfium::bind_to_system_library() {
        Ok(bindings) => Ok(Pdfium::new(bindings)),
        Err(e) => {
            let reason = match last_error {
                Some(prev) => format!("{} (last local attempt: {})", e, prev),
                None => e.to_string(),
            };
            Err(Error::PdfiumUnavailable {
                reason: format!("Failed to initialize PDFium: {}", reason),
            })
        }
    }
}

/// Text extractor backed by the PDFium library
pub struct PdfiumExtractor {
    pdfium: Pdfium,
    mode: TextMode,
    password: Option<String>,
}

impl PdfiumExtractor {
    /// Bind PDFium, failing with [`Error::PdfiumUnavailable`] if it cannot be loaded
    pub fn new(library_dir: Option<&Path>) -> Result<Self> {
        Ok(Self {
            pdfium: bind_pdfium(library_dir)?,
            mode: TextMode::default(),
            password: None,
        })
    }

    pub fn with_mode(mut self, mode: TextMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password;
        self
    }
}

impl TextExtractor for PdfiumExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String> {
        let reader =
            PdfReader::open_bytes(&self.pdfium, data, self.password.as_deref(), self.mode)?;
        tracing::info!("Loaded PDF with {} pages", reader.page_count());
        Ok(reader.full_text())
    }
}

/// Text of an opened PDF, one entry per page
pub struct PdfReader {
    page_texts: Vec<String>,
}

impl PdfReader {
    /// Open a PDF from bytes and extract the text of every page
    pub fn open_bytes(
        pdfium: &Pdfium,
        data: &[u8],
        password: Option<&str>,
        mode: TextMode,
    ) -> Result<Self> {
        validate_header(data)?;

        let document = pdfium
            .load_pdf_from_byte_slice(data, password)
            .map_err(Self::map_pdfium_error)?;

        let page_texts = Self::extract_all_page_texts(&document, mode)?;

        Ok(Self { page_texts })
    }

    fn extract_all_page_texts(document: &PdfDocument, mode: TextMode) -> Result<Vec<String>> {
        let pages = document.pages();
        let mut texts = Vec::with_capacity(pages.len() as usize);

        for index in 0..pages.len() {
            let page_number = index as usize + 1;
            let page = pages
                .get(index)
                .map_err(|e| page_error(page_number, "get page", e))?;

            let text = match mode {
                TextMode::Plain => Self::extract_page_text_plain(&page),
                TextMode::Layout => Self::extract_page_text_with_layout(&page),
            }
            .map_err(|e| page_error(page_number, "read text of page", e))?;
            tracing::debug!("Page {}: {} characters", page_number, text.chars().count());
            texts.push(text);
        }

        Ok(texts)
    }

    fn extract_page_text_plain(page: &PdfPage) -> std::result::Result<String, PdfiumError> {
        Ok(page.text()?.all())
    }

    /// Extract text from a page with Y-coordinate based ordering
    fn extract_page_text_with_layout(page: &PdfPage) -> std::result::Result<String, PdfiumError> {
        let text_obj = page.text()?;

        let mut chars_with_pos: Vec<(char, f32, f32)> = Vec::new();
        for segment in text_obj.segments().iter() {
            if let Ok(chars) = segment.chars() {
                for char_result in chars.iter() {
                    if let (Some(c), Ok(bounds)) =
                        (char_result.unicode_char(), char_result.loose_bounds())
                    {
                        chars_with_pos.push((c, bounds.left().value, bounds.top().value));
                    }
                }
            }
        }

        Ok(layout_lines(chars_with_pos))
    }

    /// Map PDFium errors to our error type
    fn map_pdfium_error(err: PdfiumError) -> Error {
        match err {
            PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
                Error::PasswordRequired
            }
            _ => Error::Pdfium {
                reason: format!("{}", err),
            },
        }
    }

    /// Get the number of pages
    pub fn page_count(&self) -> usize {
        self.page_texts.len()
    }

    /// All page texts joined by newlines
    pub fn full_text(&self) -> String {
        self.page_texts.join("\n")
    }
}

/// Error for a failure on a 1-indexed page
fn page_error(page_number: usize, action: &str, err: impl std::fmt::Display) -> Error {
    Error::Pdfium {
        reason: format!("Failed to {} {}: {}", action, page_number, err),
    }
}

fn validate_header(data: &[u8]) -> Result<()> {
    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        });
    }
    Ok(())
}

/// Rebuild text lines from positioned characters.
///
/// Characters within `Y_TOLERANCE` points vertically share a line. Lines run
/// top to bottom (PDF Y grows upwards) and characters left to right, with a
/// space inserted wherever the horizontal gap exceeds `SPACE_THRESHOLD`.
fn layout_lines(mut chars_with_pos: Vec<(char, f32, f32)>) -> String {
    const Y_TOLERANCE: f32 = 5.0;
    const SPACE_THRESHOLD: f32 = 10.0;

    if chars_with_pos.is_empty() {
        return String::new();
    }

    chars_with_pos.sort_by(|a, b| {
        b.2.partial_cmp(&a.2)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut lines: Vec<Vec<(char, f32)>> = Vec::new();
    let mut current_line: Vec<(char, f32)> = Vec::new();
    let mut current_y: Option<f32> = None;

    for (c, x, y) in chars_with_pos {
        match current_y {
            Some(cur_y) if (cur_y - y).abs() <= Y_TOLERANCE => current_line.push((c, x)),
            _ => {
                if !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                }
                current_line.push((c, x));
                current_y = Some(y);
            }
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let mut result = String::new();
    for mut line in lines {
        line.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut prev_x: Option<f32> = None;
        for (c, x) in line {
            if let Some(px) = prev_x {
                if x - px > SPACE_THRESHOLD && c != ' ' {
                    result.push(' ');
                }
            }
            result.push(c);
            prev_x = Some(x);
        }
        result.push('\n');
    }

    result.trim_end().to_string()
}
