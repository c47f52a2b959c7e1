//! Standalone uppercase letters used as blanks inside Japanese sentences.
//!
//! In "血液型はAである" the `A` is a blank; in "血液型はA型である" it is part of
//! a term. Terms are protected first, then every letter sitting between
//! Japanese text, commas or connectives becomes a marker.

use super::BLANK_MARKER;
use crate::protect::Protector;
use regex::Regex;
use std::sync::LazyLock;

/// Kana, kanji, commas and the connectives と, や, ・.
const JP_CONTEXT: &str = r"[\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FFF}、,とや・]";

/// Suffixes that turn a preceding letter into a technical term (A型, X線, ...).
const TERM_SUFFIXES: &[&str] = &[
    "型", "群", "細胞", "抗原", "受容体", "リンパ球", "ウイルス", "遺伝子", "タンパク", "蛋白",
    "因子", "鎖", "座", "領域", "ドメイン", "クラス", "サブ", "波", "線", "層", "帯", "管", "点",
    "面", "軸", "端", "相", "期", "染色体",
];

/// Immunology abbreviations protected together with their suffix (T細胞, NK細胞).
const IMMUNE_LETTERS: &[&str] = &["NK", "T", "B", "K"];

/// Suffixes that follow [`IMMUNE_LETTERS`].
const IMMUNE_SUFFIXES: &[&str] = &["細胞", "リンパ球", "抗原", "受容体"];

// Japanese context, then the letter of a technical term, then its suffix.
// Only the letter (group 2) is protected.
static RE_TECH_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "({})([A-Z])({})",
        JP_CONTEXT,
        TERM_SUFFIXES.join("|")
    ))
    .unwrap()
});

static RE_IMMUNE_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "(?:{})(?:{})",
        IMMUNE_LETTERS.join("|"),
        IMMUNE_SUFFIXES.join("|")
    ))
    .unwrap()
});

static RE_STANDALONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("({})([A-Z])({})", JP_CONTEXT, JP_CONTEXT)).unwrap()
});

/// Replaces standalone uppercase letters in Japanese context with [`BLANK_MARKER`].
pub fn detect_standalone_letters(text: &str) -> String {
    let mut protector = Protector::new();

    let mut result = protect_tech_terms(text, &mut protector);
    result = protector.protect_matches(&result, &RE_IMMUNE_TERM);

    // "A、B、C" overlaps: each pass consumes the comma between two letters,
    // so keep going until nothing changes.
    loop {
        let next = RE_STANDALONE
            .replace_all(&result, |caps: &regex::Captures| {
                format!("{}{}{}", &caps[1], BLANK_MARKER, &caps[3])
            })
            .into_owned();
        if next == result {
            break;
        }
        result = next;
    }

    protector.restore(&result)
}

/// Protects the letter of every `<jp><letter><suffix>` term.
///
/// Adjacent terms such as "A型B型" share characters, so this also repeats
/// until no unprotected term is left or the protector runs out of tokens.
fn protect_tech_terms(text: &str, protector: &mut Protector) -> String {
    let mut result = text.to_string();
    let mut exhausted = false;
    while !exhausted && RE_TECH_TERM.is_match(&result) {
        result = RE_TECH_TERM
            .replace_all(&result, |caps: &regex::Captures| {
                let letter = protector.protect(&caps[2]).unwrap_or_else(|| {
                    exhausted = true;
                    caps[2].to_string()
                });
                format!("{}{}{}", &caps[1], letter, &caps[3])
            })
            .into_owned();
    }
    if exhausted {
        tracing::warn!("protection tokens exhausted, some technical terms left unprotected");
    }
    result
}
