//! PDF Quiz Extractor Library
//!
//! Turns a PDF of multiple-choice questions into a JSON array for quiz apps:
//! - `pdf`: text extraction through PDFium
//! - `segmenter`: line-based question/option detection
//! - `output`: JSON and raw-text writers
//! - `pipeline`: the end-to-end conversion run

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod pdf;
pub mod pipeline;
pub mod segmenter;

pub use config::ExtractorConfig;
pub use error::{Error, Result};
pub use model::Question;
pub use pipeline::{convert, run, ConversionReport};
pub use segmenter::segment_questions;
