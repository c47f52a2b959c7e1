//! Register conversion.
//!
//! Question banks use the plain written register (である調). Authors write in
//! the polite register (です・ます調) and phrase the question ending a dozen
//! different ways. Two ordered rule tables fix both:
//!
//! 1. [`QUESTION_ENDINGS`]: every "what is ...?" ending becomes `はなにか。`
//! 2. [`POLITE_ENDINGS`]: polite verb/copula endings become plain ones
//!
//! Endings run first. Otherwise `は何でしょうか` would be rewritten to
//! `は何であろうか` by the politeness table before the ending rule could
//! replace it whole.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// Question endings unified to `はなにか。`.
pub const QUESTION_ENDINGS: &[&str] = &[
    r"は何でしょうか[。？?]?",
    r"は何ですか[。？?]?",
    r"は何であろうか[。？?]?",
    r"は何であるか[。？?]?",
    r"は何か[。？?]?",
    r"はなんでしょうか[。？?]?",
    r"はなんですか[。？?]?",
    r"はなんであろうか[。？?]?",
    r"はなんであるか[。？?]?",
    r"はなんか[。？?]?",
];

/// Canonical question ending.
pub const CANONICAL_ENDING: &str = "はなにか。";

/// Polite to plain register, in application order.
pub const POLITE_ENDINGS: &[(&str, &str)] = &[
    ("でしょうか", "であろうか"),
    ("ましょう", "よう"),
    ("ません", "ない"),
    ("ました", "た"),
    ("ています", "ている"),
    ("てきます", "てくる"),
    ("ております", "ている"),
    ("されています", "されている"),
    ("なっています", "なっている"),
    ("います", "いる"),
    ("あります", "ある"),
    ("きます", "くる"),
    ("します", "する"),
    ("ですが", "であるが"),
    ("ですので", "であるので"),
    ("ですから", "であるから"),
    ("です", "である"),
    ("ます", "る"),
];

static RE_QUESTION_ENDINGS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    QUESTION_ENDINGS
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
});

/// Unifies question endings to [`CANONICAL_ENDING`].
pub fn unify_question_endings(text: &str) -> String {
    let mut result = text.to_string();
    for re in RE_QUESTION_ENDINGS.iter() {
        if re.is_match(&result) {
            result = re.replace_all(&result, NoExpand(CANONICAL_ENDING)).into_owned();
        }
    }
    result
}

/// Rewrites polite endings to the plain register.
pub fn to_plain_register(text: &str) -> String {
    POLITE_ENDINGS
        .iter()
        .fold(text.to_string(), |acc, (polite, plain)| acc.replace(polite, plain))
}

/// Runs both tables, endings first.
pub fn convert_register(text: &str) -> String {
    to_plain_register(&unify_question_endings(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_ending_not_mangled_by_politeness() {
        assert_eq!(convert_register("この細胞は何でしょうか。"), "この細胞はなにか。");
    }

    #[test]
    fn test_question_ending_variants() {
        for input in [
            "これは何ですか？",
            "これは何であるか",
            "これはなんでしょうか?",
            "これは何か。",
            "これはなんか",
        ] {
            assert_eq!(convert_register(input), "これはなにか。", "input: {}", input);
        }
    }

    #[test]
    fn test_politeness_longest_first() {
        assert_eq!(convert_register("重要ですが、難しいです。"), "重要であるが、難しいである。");
        assert_eq!(convert_register("増加しています。"), "増加している。");
        assert_eq!(convert_register("確認されています。"), "確認されている。");
        assert_eq!(convert_register("分解されません。"), "分解されない。");
        assert_eq!(convert_register("発見しました。"), "発見した。");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let input = "これはミトコンドリアである。";
        assert_eq!(convert_register(input), input);
    }

    #[test]
    fn test_idempotent() {
        let once = convert_register("これは何ですか。酵素が働いています。");
        assert_eq!(convert_register(&once), once);
    }
}
