//! Blank rendering.

use super::BLANK_MARKER;
use crate::label::Label;

/// Unlabeled blank, used when the question has exactly one.
pub const SINGLE_BLANK: &str = "（　　　　　）";

/// Padding on each side of the label in a labeled blank.
pub const LABELED_BLANK_FILL: &str = "　　";

/// Renders blank markers.
///
/// - 0 blanks: text unchanged
/// - 1 blank: [`SINGLE_BLANK`]
/// - 2+ blanks: `（　　A　　）`, `（　　B　　）`, ... left to right
///
/// There is no label after Z, so from the 27th blank on the unlabeled form is
/// used.
pub fn render_blanks(text: &str, blank_count: usize) -> String {
    match blank_count {
        0 => text.to_string(),
        1 => text.replace(BLANK_MARKER, SINGLE_BLANK),
        _ => {
            let mut result = String::with_capacity(text.len() + blank_count * 16);
            let mut pieces = text.split(BLANK_MARKER);
            if let Some(first) = pieces.next() {
                result.push_str(first);
            }
            for (index, piece) in pieces.enumerate() {
                match Label::nth(index) {
                    Some(label) => {
                        result.push('（');
                        result.push_str(LABELED_BLANK_FILL);
                        result.push(label.as_char());
                        result.push_str(LABELED_BLANK_FILL);
                        result.push('）');
                    }
                    None => {
                        tracing::warn!(position = index + 1, "no label past Z, rendering blank unlabeled");
                        result.push_str(SINGLE_BLANK);
                    }
                }
                result.push_str(piece);
            }
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_blanks() {
        assert_eq!(render_blanks("そのまま", 0), "そのまま");
    }

    #[test]
    fn test_single_blank_unlabeled() {
        assert_eq!(
            render_blanks("これは{{BLANK}}である。", 1),
            "これは（　　　　　）である。"
        );
    }

    #[test]
    fn test_multiple_blanks_labeled_in_order() {
        assert_eq!(
            render_blanks("{{BLANK}}と{{BLANK}}と{{BLANK}}", 3),
            "（　　A　　）と（　　B　　）と（　　C　　）"
        );
    }

    #[test]
    fn test_past_z_unlabeled() {
        let text = vec![BLANK_MARKER; 27].join("、");
        let result = render_blanks(&text, 27);
        assert!(result.contains("（　　Z　　）"));
        assert!(result.ends_with(SINGLE_BLANK));
        assert!(!result.contains(BLANK_MARKER));
    }
}
