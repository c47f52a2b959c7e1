//! Request and result shapes.

use serde::{Deserialize, Serialize};

/// One author submission: a question and its raw answer.
///
/// Missing fields deserialize to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Raw question text
    #[serde(default)]
    pub question: String,
    /// Raw answer text
    #[serde(default)]
    pub answer: String,
}

impl Submission {
    /// Creates a submission.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A formatted question/answer pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatResult {
    /// Formatted question, with the instruction line when it has blanks
    pub question: String,
    /// Formatted answer, always starting with `正解：`
    pub answer: String,
    /// Number of blanks found in the question
    pub blank_count: usize,
}

impl FormatResult {
    /// Returns true if the question had at least one blank.
    pub fn has_blanks(&self) -> bool {
        self.blank_count > 0
    }
}
