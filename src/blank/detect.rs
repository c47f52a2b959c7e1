//! Bracket, underscore and parenthesized-label blank idioms.

use super::BLANK_MARKER;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// Blank idioms, tried in this order. Each is applied across the whole text
/// before the next one runs.
const BLANK_IDIOMS: &[&str] = &[
    r"（\x{3000}{2}[A-Z]\x{3000}{2}）", // （　　A　　）already rendered labeled blank
    r"（\s*）",                          // （　）
    r"\(\s*\)",                          // ( )
    r"【\s*】",                          // 【　】
    r"\[\s*\]",                          // [ ]
    r"_{2,}",                            // __
    r"＿{2,}",                           // ＿＿
    r"[（(]\s*[ABab]\s*[）)]",           // (A) （b）
    r"（\s*[①②]\s*）",                  // （①）
    r"\(\s*[①②]\s*\)",                  // (②)
    r"（\s*[12]\s*）",                   // （1）
    r"\(\s*[12]\s*\)",                   // (2)
];

static RE_BLANK_IDIOMS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    BLANK_IDIOMS
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
});

/// Replaces every recognized blank idiom with [`BLANK_MARKER`].
pub fn detect_blanks(text: &str) -> String {
    let mut result = text.to_string();

    for re in RE_BLANK_IDIOMS.iter() {
        if re.is_match(&result) {
            result = re.replace_all(&result, NoExpand(BLANK_MARKER)).into_owned();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullwidth_parens() {
        assert_eq!(detect_blanks("これは（　）である。"), "これは{{BLANK}}である。");
        assert_eq!(detect_blanks("これは（）である。"), "これは{{BLANK}}である。");
    }

    #[test]
    fn test_halfwidth_and_square_brackets() {
        assert_eq!(
            detect_blanks("( )と[ ]と【　】"),
            "{{BLANK}}と{{BLANK}}と{{BLANK}}"
        );
    }

    #[test]
    fn test_underscores() {
        assert_eq!(detect_blanks("答えは___。"), "答えは{{BLANK}}。");
        assert_eq!(detect_blanks("答えは＿＿。"), "答えは{{BLANK}}。");
        // A single underscore is ordinary text
        assert_eq!(detect_blanks("snake_case"), "snake_case");
    }

    #[test]
    fn test_parenthesized_labels() {
        assert_eq!(detect_blanks("(A)と（b）"), "{{BLANK}}と{{BLANK}}");
        assert_eq!(detect_blanks("（①）と(②)"), "{{BLANK}}と{{BLANK}}");
        assert_eq!(detect_blanks("（1）と( 2 )"), "{{BLANK}}と{{BLANK}}");
    }

    #[test]
    fn test_ordinary_parentheses_untouched() {
        let input = "ビタミン（C）と(3)と（③）";
        assert_eq!(detect_blanks(input), input);
    }

    #[test]
    fn test_rendered_blanks_are_recognized() {
        assert_eq!(
            detect_blanks("（　　A　　）と（　　C　　）と（　　　　　）"),
            "{{BLANK}}と{{BLANK}}と{{BLANK}}"
        );
    }

    #[test]
    fn test_no_blanks() {
        assert_eq!(detect_blanks("普通の文である。"), "普通の文である。");
    }
}
