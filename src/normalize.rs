//! Input normalization (stage 0).
//!
//! Runs on both the question and the answer before anything else:
//!
//! - Unicode NFC composition (never NFKC: full-width brackets and circled
//!   numbers are meaningful to later stages)
//! - Control and invisible character removal
//! - Removal of plane-15 private-use characters, which are reserved for
//!   protection tokens. BMP private-use characters (gaiji) are kept.
//! - Line ending unification

use crate::protect::is_token_char;
use unicode_normalization::UnicodeNormalization;

/// Normalize raw author input.
pub fn normalize_input(input: &str) -> String {
    let unified = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut result = String::with_capacity(unified.len());

    for c in unified.nfc() {
        if is_control_char(c) || is_token_char(c) {
            continue;
        }
        result.push(c);
    }

    result
}

/// Check if character is a control or invisible character that should be removed
fn is_control_char(c: char) -> bool {
    matches!(
        c,
        '\0'        // Null
        | '\x0B'    // Vertical Tab
        | '\x0C'    // Form Feed
        | '\u{FEFF}' // BOM
        | '\u{FFFD}' // Replacement character
        | '\u{00AD}' // Soft hyphen
        | '\u{200B}' // Zero width space
        | '\u{200C}' // Zero width non-joiner
        | '\u{200D}' // Zero width joiner
        | '\u{2060}' // Word joiner
    )
}
