//! Output writers for extracted questions and raw text

use crate::error::Result;
use crate::model::Question;
use std::path::Path;

/// Number of characters shown in the console preview by default
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Create the parent directory of `path` if it has one
async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}

/// Write the raw extracted text used as the manual-correction fallback
pub async fn write_raw_text(path: &Path, text: &str) -> Result<()> {
    ensure_parent_dir(path).await?;
    tokio::fs::write(path, text).await?;
    Ok(())
}

/// Write questions as an indented JSON array
pub async fn write_questions(path: &Path, questions: &[Question]) -> Result<()> {
    let json = serde_json::to_string_pretty(questions)?;
    ensure_parent_dir(path).await?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// First `max_chars` characters of `text`, never splitting a character
pub fn text_preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_preview() {
        assert_eq!(text_preview("hello world", 5), "hello");
        assert_eq!(text_preview("short", 500), "short");
        assert_eq!(text_preview("", 10), "");
        assert_eq!(text_preview("héllo", 2), "hé");
    }

    #[tokio::test]
    async fn test_write_questions_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/output/questions.json");
        let questions = vec![Question {
            id: 1,
            text: "What is X?".to_string(),
            options: vec!["One".into(), "Two".into(), "Three".into(), "Four".into()],
            answer_index: 0,
        }];

        write_questions(&path, &questions).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  {"), "JSON should be indented");
        let parsed: Vec<Question> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, questions);
    }

    #[tokio::test]
    async fn test_write_raw_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/extracted_text.txt");

        write_raw_text(&path, "1. Q?\na) x").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1. Q?\na) x");
    }
}
