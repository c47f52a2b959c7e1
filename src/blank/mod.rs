//! Blank detection and rendering.
//!
//! Every notation an author might use for "fill this in" is first rewritten to
//! [`BLANK_MARKER`]. After register conversion and cleanup, the markers are
//! counted and rendered, labeled by position.

mod detect;
mod render;
mod standalone;

pub use detect::detect_blanks;
pub use render::{render_blanks, LABELED_BLANK_FILL, SINGLE_BLANK};
pub use standalone::detect_standalone_letters;

/// In-band token standing for one blank in working text.
pub const BLANK_MARKER: &str = "{{BLANK}}";

/// Counts the blank markers in `text`.
pub fn count_blanks(text: &str) -> usize {
    text.matches(BLANK_MARKER).count()
}

/// Runs both detection passes: bracket/underscore idioms, then standalone letters.
pub fn normalize_blanks(text: &str) -> String {
    let bracketed = detect_blanks(text);
    detect_standalone_letters(&bracketed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_blanks() {
        assert_eq!(count_blanks("なし"), 0);
        assert_eq!(count_blanks("{{BLANK}}と{{BLANK}}"), 2);
    }

    #[test]
    fn test_normalize_blanks_mixed_idioms() {
        let result = normalize_blanks("（　）は__であり、Cである。");
        assert_eq!(result, "{{BLANK}}は{{BLANK}}であり、{{BLANK}}である。");
    }
}
