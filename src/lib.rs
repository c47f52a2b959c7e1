//! # anaume
//!
//! Normalizes fill-in-the-blank (穴埋め) exam questions collected from many
//! authors into one canonical format: one blank notation, the plain written
//! register, and one answer labeling scheme.
//!
//! ## Quick Start
//!
//! ```
//! use anaume::format_question;
//!
//! let result = format_question("彼はA、B、Cの方法を試しました。", "①甲 ②乙 ③丙");
//!
//! assert_eq!(result.blank_count, 3);
//! assert!(result.question.contains("（　　A　　）、（　　B　　）、（　　C　　）"));
//! assert_eq!(result.answer, "正解：A. 甲　　B. 乙　　C. 丙");
//! ```
//!
//! ## Pipeline
//!
//! 1. Input normalization (NFC, invisible characters, line endings)
//! 2. Blank detection: brackets, underscores, parenthesized labels
//! 3. Standalone-letter blank detection, with technical terms protected
//! 4. Register conversion (です・ます → である, question endings → `はなにか。`)
//! 5. Text cleanup
//! 6. Blank rendering, labeled A, B, C, ... when there are two or more
//! 7. Answer parsing and re-labeling
//!
//! ## Features
//!
//! - `python`: Python bindings via pyo3

pub mod answer;
pub mod blank;
pub mod cleanup;
pub mod error;
pub mod label;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod protect;
pub mod register;

#[cfg(feature = "python")]
mod python;

// Re-exports
pub use answer::{format_answer, AnswerEntry, ParseStrategy};
pub use error::{Error, Result};
pub use label::Label;
pub use model::{FormatResult, Submission};
pub use pipeline::{format_question, INSTRUCTION};

use rayon::prelude::*;
use serde_json::Value;

/// Formats one submission.
pub fn format_submission(submission: &Submission) -> FormatResult {
    format_question(&submission.question, &submission.answer)
}

/// Formats many submissions in parallel. Output order matches input order.
///
/// # Example
///
/// ```
/// use anaume::{format_batch, Submission};
///
/// let results = format_batch(&[
///     Submission::new("これは（　）である。", "核"),
///     Submission::new("説明文です。", ""),
/// ]);
/// assert_eq!(results[0].blank_count, 1);
/// assert_eq!(results[1].blank_count, 0);
/// ```
pub fn format_batch(submissions: &[Submission]) -> Vec<FormatResult> {
    submissions.par_iter().map(format_submission).collect()
}

/// Formats a JSON request body.
///
/// Accepts either one `{"question": ..., "answer": ...}` object or an array of
/// them and returns the matching result object or array as JSON. Missing
/// fields are treated as empty strings.
///
/// # Example
///
/// ```
/// let json = anaume::format_json(r#"{"question": "これは（　）である。"}"#)?;
/// assert!(json.contains("\"blank_count\":1"));
/// # Ok::<(), anaume::Error>(())
/// ```
pub fn format_json(input: &str) -> Result<String> {
    let value: Value = serde_json::from_str(input)?;

    match value {
        Value::Object(_) => {
            let submission: Submission = serde_json::from_value(value)?;
            Ok(serde_json::to_string(&format_submission(&submission))?)
        }
        Value::Array(_) => {
            let submissions: Vec<Submission> = serde_json::from_value(value)?;
            Ok(serde_json::to_string(&format_batch(&submissions))?)
        }
        other => Err(Error::InvalidInput(format!(
            "expected an object or an array of objects, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
