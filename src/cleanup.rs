//! # Text Cleaner
//!
//! Runs after register conversion so that it also tidies anything the
//! converter leaves behind.
//!
//! ## Stages
//!
//! 1. **Emphasis** - Markdown bold, then italic, markers are removed
//! 2. **Punctuation** - Comma-before-stop pairs and repeated commas/stops collapse
//! 3. **Whitespace** - Space runs (ASCII and ideographic) collapse, text is trimmed
//! 4. **Lines** - Blank lines collapse into a single line break

use regex::Regex;
use std::sync::LazyLock;

// ============================================================================
// Stage 1: Emphasis
// ============================================================================

static RE_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static RE_ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// Stage 1: Remove `**bold**` then `*italic*` markers, keeping the content.
///
/// Bold goes first; the italic rule would otherwise eat one asterisk of each
/// bold marker.
pub fn strip_emphasis(input: &str) -> String {
    let result = RE_BOLD.replace_all(input, "$1");
    RE_ITALIC.replace_all(&result, "$1").into_owned()
}

// ============================================================================
// Stage 2: Punctuation
// ============================================================================

/// Comma followed by a stop collapses to the stop.
const COMMA_STOP_PAIRS: &[(&str, &str)] = &[
    (",。", "。"),
    ("、。", "。"),
    (",.", "."),
    (",、", "、"),
];

static RE_COMMA_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[、，]+").unwrap());

static RE_STOP_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[。．]+").unwrap());

/// Stage 2: Collapse redundant punctuation.
pub fn collapse_punctuation(input: &str) -> String {
    let result = COMMA_STOP_PAIRS
        .iter()
        .fold(input.to_string(), |acc, (from, to)| acc.replace(from, to));

    let result = RE_COMMA_RUN.replace_all(&result, "、");
    RE_STOP_RUN.replace_all(&result, "。").into_owned()
}

// ============================================================================
// Stage 3: Whitespace
// ============================================================================

static RE_SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ 　]+").unwrap());

/// Stage 3: Collapse space runs to one ASCII space and trim the ends.
pub fn collapse_spaces(input: &str) -> String {
    RE_SPACE_RUN.replace_all(input, " ").trim().to_string()
}

// ============================================================================
// Stage 4: Lines
// ============================================================================

static RE_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Stage 4: Collapse blank lines so paragraphs are separated by one line break.
pub fn collapse_blank_lines(input: &str) -> String {
    RE_BLANK_LINES.replace_all(input, "\n").into_owned()
}

// ============================================================================
// Main Pipeline
// ============================================================================

/// Run the full cleaner.
///
/// # Example
///
/// ```
/// use anaume::cleanup::clean_text;
///
/// let clean = clean_text("  **重要**な酵素、、である。。\n\n\n次の文 ");
/// assert_eq!(clean, "重要な酵素、である。\n次の文");
/// ```
pub fn clean_text(input: &str) -> String {
    let result = strip_emphasis(input);
    let result = collapse_punctuation(&result);
    let result = collapse_spaces(&result);
    collapse_blank_lines(&result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_then_italic() {
        assert_eq!(strip_emphasis("**太字**と*斜体*"), "太字と斜体");
        assert_eq!(strip_emphasis("***両方***"), "両方");
    }

    #[test]
    fn test_lone_asterisk_kept() {
        assert_eq!(strip_emphasis("注*"), "注*");
    }

    #[test]
    fn test_emphasis_does_not_cross_lines() {
        assert_eq!(strip_emphasis("*一行目\n二行目*"), "*一行目\n二行目*");
    }

    #[test]
    fn test_comma_before_stop() {
        assert_eq!(collapse_punctuation("終わり、。"), "終わり。");
        assert_eq!(collapse_punctuation("終わり,。"), "終わり。");
        assert_eq!(collapse_punctuation("end,."), "end.");
        assert_eq!(collapse_punctuation("A,、B"), "A、B");
    }

    #[test]
    fn test_comma_followed_by_text_kept() {
        assert_eq!(collapse_punctuation("red, blue"), "red, blue");
    }

    #[test]
    fn test_punctuation_runs() {
        assert_eq!(collapse_punctuation("A、、，B。。．"), "A、B。");
    }

    #[test]
    fn test_spaces() {
        assert_eq!(collapse_spaces("  これは 　 空白  "), "これは 空白");
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(collapse_blank_lines("一\n\n\n二\n \n三"), "一\n二\n三");
    }

    #[test]
    fn test_full_pipeline() {
        let input = "\n\n**問題**：これは　　テスト、。\n\n\n次の行です";
        assert_eq!(clean_text(input), "問題：これは テスト。\n次の行です");
    }

    #[test]
    fn test_idempotent() {
        let once = clean_text("  *強調*、、文。。\n\n\n次 ");
        assert_eq!(clean_text(&once), once);
    }
}
