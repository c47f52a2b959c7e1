//! Reversible placeholder protection.
//!
//! Spans that a later rewrite pass must not touch are swapped for opaque
//! tokens, the pass runs, and the tokens are swapped back. Each token is a
//! single character from Supplementary Private Use Area-A, which input
//! normalization strips from user text, so tokens never collide with content.

use regex::Regex;
use std::collections::HashMap;

/// First code point used for tokens (plane 15).
const TOKEN_BASE: u32 = 0xF_0000;

/// Last code point usable for tokens.
const TOKEN_LAST: u32 = 0xF_FFFD;

/// Number of distinct spans one protector can hold.
pub const TOKEN_CAPACITY: usize = (TOKEN_LAST - TOKEN_BASE + 1) as usize;

/// Holds protected spans for one rewrite and restores them afterwards.
///
/// Equal spans share a token, so the token space bounds the number of
/// distinct spans rather than the number of matches.
#[derive(Debug, Default, Clone)]
pub struct Protector {
    spans: Vec<String>,
    tokens: HashMap<String, char>,
}

impl Protector {
    /// Creates an empty protector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct spans currently protected.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if nothing has been protected.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Registers a span and returns the token that stands in for it.
    ///
    /// Returns `None` once [`TOKEN_CAPACITY`] distinct spans are held.
    pub fn protect(&mut self, span: &str) -> Option<String> {
        if let Some(&token) = self.tokens.get(span) {
            return Some(token.to_string());
        }
        if self.spans.len() >= TOKEN_CAPACITY {
            return None;
        }

        let token = char::from_u32(TOKEN_BASE + self.spans.len() as u32)?;
        self.spans.push(span.to_string());
        self.tokens.insert(span.to_string(), token);
        Some(token.to_string())
    }

    /// Replaces every match of `pattern` in `text` with a token. Matches past
    /// the token capacity are left as they are.
    pub fn protect_matches(&mut self, text: &str, pattern: &Regex) -> String {
        pattern
            .replace_all(text, |caps: &regex::Captures| {
                self.protect(&caps[0]).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// Puts every protected span back in one pass over `text`. Tokens inside
    /// a span (nested protection) are expanded as well.
    pub fn restore(&self, text: &str) -> String {
        if self.spans.is_empty() {
            return text.to_string();
        }
        let mut result = String::with_capacity(text.len());
        self.restore_into(text, self.spans.len(), &mut result);
        result
    }

    /// Expands tokens below `limit`. A span only ever holds tokens handed
    /// out before it, so recursion always moves to a lower limit.
    fn restore_into(&self, text: &str, limit: usize, out: &mut String) {
        for c in text.chars() {
            match self.token_index(c).filter(|&index| index < limit) {
                Some(index) => self.restore_into(&self.spans[index], index, out),
                None => out.push(c),
            }
        }
    }

    fn token_index(&self, c: char) -> Option<usize> {
        is_token_char(c).then(|| (c as u32 - TOKEN_BASE) as usize)
    }
}

/// True if `c` falls in the token range.
pub fn is_token_char(c: char) -> bool {
    (TOKEN_BASE..=TOKEN_LAST).contains(&(c as u32))
}
