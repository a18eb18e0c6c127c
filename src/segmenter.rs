//! Question segmentation over extracted PDF text
//!
//! A single pass over the non-blank, trimmed lines of the text. Lines starting
//! with a question marker (`1.`, `2)`, `Q3`) open a new record; lines starting
//! with an option marker (`a)`, `B.`) add an answer choice to the open record.
//! Everything else is ignored, so prompts and options must fit on one line.
//!
//! A record is kept only if it holds exactly four options when it is closed.
//! Incomplete records are dropped without a trace in the output.

use crate::model::Question;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Numeric question marker: digits, then `.` or `)`, then whitespace
    static ref RE_NUMBERED_QUESTION: Regex = Regex::new(r"^\d+[.)]\s+").unwrap();

    /// `Q<n>` question marker
    static ref RE_Q_QUESTION: Regex = Regex::new(r"(?i)^q\d+").unwrap();

    /// Option marker: one of a-d, then `.` or `)`
    static ref RE_OPTION: Regex = Regex::new(r"(?i)^[a-d][.)]").unwrap();
}

/// Classification of a single trimmed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    /// Start of a new question, carrying the prompt without its marker
    Question(&'a str),
    /// An answer choice, carrying the text without its marker
    Option(&'a str),
    Other,
}

fn classify(line: &str) -> LineKind<'_> {
    if let Some(m) = RE_NUMBERED_QUESTION
        .find(line)
        .or_else(|| RE_Q_QUESTION.find(line))
    {
        return LineKind::Question(line[m.end()..].trim());
    }

    if let Some(m) = RE_OPTION.find(line) {
        return LineKind::Option(line[m.end()..].trim());
    }

    LineKind::Other
}

/// A question that has been opened but not yet committed
#[derive(Debug)]
struct Draft {
    text: String,
    options: Vec<String>,
}

/// Accumulator threaded through the line fold
#[derive(Debug, Default)]
struct Segmentation {
    committed: Vec<Question>,
    current: Option<Draft>,
}

impl Segmentation {
    fn step(mut self, line: &str) -> Self {
        match classify(line) {
            LineKind::Question(text) => {
                self.close_current();
                self.current = Some(Draft {
                    text: text.to_string(),
                    options: Vec::new(),
                });
            }
            LineKind::Option(option) => {
                if let Some(draft) = self.current.as_mut() {
                    draft.options.push(option.to_string());
                }
            }
            LineKind::Other => {}
        }
        self
    }

    /// Commit the open draft if it is complete, otherwise drop it.
    /// Ids come from the committed count, so discarded drafts leave no gaps.
    fn close_current(&mut self) {
        let Some(draft) = self.current.take() else {
            return;
        };

        let question = Question {
            id: self.committed.len() as u32 + 1,
            text: draft.text,
            options: draft.options,
            answer_index: 0,
        };

        if question.is_complete() {
            self.committed.push(question);
        } else {
            tracing::debug!(
                "Discarding question {:?} with {} options",
                question.text,
                question.options.len()
            );
        }
    }

    fn finish(mut self) -> Vec<Question> {
        self.close_current();
        self.committed
    }
}

/// Segment extracted text into complete multiple-choice questions.
///
/// Never fails: text without recognizable questions yields an empty list.
pub fn segment_questions(text: &str) -> Vec<Question> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(Segmentation::default(), Segmentation::step)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn question(id: u32, text: &str, options: [&str; 4]) -> Question {
        Question {
            id,
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer_index: 0,
        }
    }

    #[rstest]
    #[case("1. What is X?", "What is X?")]
    #[case("3) What is 2+2?", "What is 2+2?")]
    #[case("12.   Spaced out", "Spaced out")]
    #[case("Q7 Which one?", "Which one?")]
    #[case("q12 Lowercase marker", "Lowercase marker")]
    #[case("Q3. Speed?", ". Speed?")]
    #[case("Q4: Mass?", ": Mass?")]
    fn test_question_marker(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(classify(line), LineKind::Question(expected));
    }

    #[rstest]
    #[case("a) One", "One")]
    #[case("b. Two", "Two")]
    #[case("C) Three", "Three")]
    #[case("D.Four", "Four")]
    fn test_option_marker(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(classify(line), LineKind::Option(expected));
    }

    #[rstest]
    #[case("1.5 kilograms of flour")]
    #[case("2024")]
    #[case("e) Fifth option")]
    #[case("Question time")]
    #[case("Answer: a")]
    #[case("(a) Parenthesised")]
    fn test_unmarked_lines(#[case] line: &str) {
        assert_eq!(classify(line), LineKind::Other);
    }

    #[test]
    fn test_q_marker_strips_only_letter_and_digits() {
        let text = "Q3. Speed?\na) 1\nb) 2\nc) 3\nd) 4";
        assert_eq!(
            segment_questions(text),
            vec![question(1, ". Speed?", ["1", "2", "3", "4"])]
        );
    }

    #[test]
    fn test_single_complete_question() {
        let text = "1. What is X?\na) One\nb) Two\nc) Three\nd) Four";
        assert_eq!(
            segment_questions(text),
            vec![question(1, "What is X?", ["One", "Two", "Three", "Four"])]
        );
    }

    #[test]
    fn test_trailing_incomplete_question_is_dropped() {
        let text = "\
1. What is X?
a) One
b) Two
c) Three
d) Four
2. What is Y?
a) Alpha
b) Beta
";
        let questions = segment_questions(text);
        assert_eq!(
            questions,
            vec![question(1, "What is X?", ["One", "Two", "Three", "Four"])]
        );
    }

    #[test]
    fn test_ids_have_no_gaps_after_discards() {
        let text = "\
1. Incomplete
a) only one
2. First kept
a) A
b) B
c) C
d) D
3) Also incomplete
Q4 Second kept
A. w
B. x
C. y
D. z
";
        let questions = segment_questions(text);
        assert_eq!(
            questions,
            vec![
                question(1, "First kept", ["A", "B", "C", "D"]),
                question(2, "Second kept", ["w", "x", "y", "z"]),
            ]
        );
    }

    #[test]
    fn test_no_question_markers_yields_empty() {
        let text = "a) stray option\nb) another\nSome prose line.\n\n   \n";
        assert!(segment_questions(text).is_empty());
        assert!(segment_questions("").is_empty());
    }

    #[test]
    fn test_options_before_first_question_are_ignored() {
        let text = "a) stray\n1. Real question\na) 1\nb) 2\nc) 3\nd) 4";
        let questions = segment_questions(text);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_more_than_four_options_is_dropped() {
        let text = "1. Repeated letters\na) 1\nb) 2\nc) 3\nd) 4\na) 5";
        assert!(segment_questions(text).is_empty());
    }

    #[test]
    fn test_continuation_lines_are_ignored() {
        let text = "\
1. Which planet is
largest?
a) Mars
b) Jupiter
   (the gas giant)
c) Venus
d) Earth
";
        let questions = segment_questions(text);
        assert_eq!(
            questions,
            vec![question(1, "Which planet is", ["Mars", "Jupiter", "Venus", "Earth"])]
        );
    }

    #[test]
    fn test_lines_are_trimmed() {
        let text = "   1.  Indented?  \r\n\t a)  x \r\n b) y\r\n c) z\r\n d) w  \r\n";
        assert_eq!(
            segment_questions(text),
            vec![question(1, "Indented?", ["x", "y", "z", "w"])]
        );
    }

    #[test]
    fn test_segmentation_is_repeatable() {
        let text = "1. A?\na) 1\nb) 2\nc) 3\nd) 4\n2. B?\na) 5\nb) 6\nc) 7\nd) 8";
        let first = segment_questions(text);
        let second = segment_questions(text);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert!(first.iter().all(|q| q.answer_index == 0));
    }
}
