//! PDF processing layer
//!
//! Text extraction is delegated to PDFium; this module only binds the library
//! and turns documents into plain text.

mod reader;

pub use reader::{PdfReader, PdfiumExtractor, TextExtractor, TextMode};
