//! Error types for the PDF quiz extractor

use thiserror::Error;

/// Result type alias for the PDF quiz extractor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the PDF quiz extractor
#[derive(Error, Debug)]
pub enum Error {
    /// PDFium library could not be bound
    #[error("PDFium unavailable: {reason}")]
    PdfiumUnavailable { reason: String },

    /// PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDF is password protected and no (or a wrong) password was provided
    #[error("PDF is password protected")]
    PasswordRequired,

    /// PDFium error during text extraction
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error means the extraction capability itself is missing.
    /// Such errors halt the process before any file is touched.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::PdfiumUnavailable { .. })
    }
}
