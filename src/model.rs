//! Question records emitted by the extractor

use serde::{Deserialize, Serialize};

/// Number of options an accepted question carries
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A multiple-choice question ready for a quiz application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// 1-based position among accepted questions
    pub id: u32,
    /// Prompt with its leading marker removed
    pub text: String,
    /// Answer choices in document order
    pub options: Vec<String>,
    /// Index of the correct option. Always 0 until corrected by hand.
    pub answer_index: usize,
}

impl Question {
    /// Whether the record holds exactly the expected number of options
    pub fn is_complete(&self) -> bool {
        self.options.len() == OPTIONS_PER_QUESTION
    }
}
