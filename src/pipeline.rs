//! The formatting pipeline.
//!
//! ```text
//! question: normalize -> blanks -> register -> cleanup -> count -> render -> instruction
//! answer:   normalize -> answer formatting (using the question's blank count)
//! ```

use crate::answer::format_answer;
use crate::blank::{count_blanks, normalize_blanks, render_blanks};
use crate::cleanup::clean_text;
use crate::model::FormatResult;
use crate::normalize::normalize_input;
use crate::register::convert_register;

/// Instruction line put in front of every question that has blanks.
pub const INSTRUCTION: &str = "以下の記述の空欄に適切な語句を記入せよ。";

/// Formats a question and its answer.
///
/// # Example
///
/// ```
/// use anaume::format_question;
///
/// let result = format_question("これは（　）です。", "正解：核");
/// assert_eq!(result.blank_count, 1);
/// assert_eq!(
///     result.question,
///     "以下の記述の空欄に適切な語句を記入せよ。\nこれは（　　　　　）である。"
/// );
/// assert_eq!(result.answer, "正解：核");
/// ```
pub fn format_question(question_text: &str, answer_text: &str) -> FormatResult {
    let question = normalize_input(question_text);
    let body = strip_instruction(&question);

    let marked = normalize_blanks(body);
    let converted = convert_register(&marked);
    let cleaned = clean_text(&converted);

    let blank_count = count_blanks(&cleaned);
    let rendered = render_blanks(&cleaned, blank_count);

    let question = if blank_count > 0 {
        format!("{}\n{}", INSTRUCTION, rendered)
    } else {
        rendered
    };

    let answer = format_answer(&normalize_input(answer_text), blank_count);

    tracing::debug!(blank_count, "formatted question");

    FormatResult {
        question,
        answer,
        blank_count,
    }
}

/// Drops an instruction line left over from an earlier formatting run.
fn strip_instruction(text: &str) -> &str {
    match text.trim_start().strip_prefix(INSTRUCTION) {
        Some(rest) => rest.trim_start_matches(['\n', ' ', '　']),
        None => text,
    }
}
