//! Answer formatting.
//!
//! Raw answers arrive in every enumeration style imaginable: one per line,
//! `①赤 ②白`, `A. foo, B. bar`, `a:赤 b:白`, with or without a leading
//! `正解：`. For questions with two or more blanks the answer is parsed by the
//! first [`ParseStrategy`] that finds any entry and re-rendered as
//! `正解：A. …　　B. …`. When nothing is recognized the text is passed through.

use crate::label::{is_circled_number, Label};
use crate::protect::Protector;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Fixed prefix of every formatted answer.
pub const ANSWER_PREFIX: &str = "正解：";

/// Separator between formatted answer entries.
pub const ENTRY_SEPARATOR: &str = "　　";

static RE_ANSWER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:正解|(?i:answer))\s*[：:]\s*").unwrap());

// Multi-line labels
static RE_LINE_CIRCLED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([①-⑳])[.．\s:：]*(.+)$").unwrap());

static RE_LINE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)[.．\s:：\)）]+(.+)$").unwrap());

static RE_LINE_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z])[.．\s:：]+(.+)$").unwrap());

// Single-line labels
static RE_INLINE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z])[.．:：\t]\s*").unwrap());

static RE_DELIMITED_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*(?:[,、，]|\x{3000}{2})\s*[A-Za-z][.．:：\t]").unwrap()
});

// Text already joined with ENTRY_SEPARATOR splits there and nowhere else, so
// "A. vitamin, C. x　　B. y" keeps its first value whole.
static RE_SEPARATOR_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\x{3000}{2}\s*[A-Za-z][.．:：\t]").unwrap());

static RE_SPACED_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[A-Za-z][.．:：\t]").unwrap());

static RE_HALFWIDTH_PARENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());

static RE_FULLWIDTH_PARENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"（[^）]*）").unwrap());

/// One parsed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerEntry {
    /// Label, or `None` when the position is past `Z`.
    pub label: Option<Label>,
    /// Answer text without label or trailing commas.
    pub value: String,
}

impl AnswerEntry {
    /// Creates an entry, cleaning the value.
    pub fn new(label: Option<Label>, value: &str) -> Self {
        Self {
            label,
            value: clean_value(value),
        }
    }
}

impl fmt::Display for AnswerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(label) => write!(f, "{}. {}", label, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Answer parse strategies, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// One answer per line, labeled or not.
    MultiLine,
    /// `①赤血球 ②白血球`
    Circled,
    /// `A. foo, B. bar` (entries split at commas or the entry separator)
    Delimited,
    /// `A. 赤血球 B. 白血球` (entries split at whitespace, parentheses protected)
    SpaceSeparated,
}

impl ParseStrategy {
    /// All strategies in the order they are tried.
    pub const ALL: [ParseStrategy; 4] = [
        ParseStrategy::MultiLine,
        ParseStrategy::Circled,
        ParseStrategy::Delimited,
        ParseStrategy::SpaceSeparated,
    ];

    /// Parses `text`, returning `None` unless at least one entry is found.
    pub fn parse(self, text: &str) -> Option<Vec<AnswerEntry>> {
        let entries = match self {
            ParseStrategy::MultiLine => parse_lines(text),
            ParseStrategy::Circled => parse_circled(text),
            ParseStrategy::Delimited => parse_delimited(text),
            ParseStrategy::SpaceSeparated => parse_space_separated(text),
        };
        (!entries.is_empty()).then_some(entries)
    }
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStrategy::MultiLine => write!(f, "multi-line"),
            ParseStrategy::Circled => write!(f, "circled"),
            ParseStrategy::Delimited => write!(f, "delimited"),
            ParseStrategy::SpaceSeparated => write!(f, "space-separated"),
        }
    }
}

/// Removes a leading `正解：` / `Answer:` marker.
pub fn strip_answer_prefix(text: &str) -> &str {
    match RE_ANSWER_PREFIX.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Tries each strategy in turn; the first one that finds anything wins.
pub fn parse_answer(text: &str) -> Option<(ParseStrategy, Vec<AnswerEntry>)> {
    ParseStrategy::ALL
        .iter()
        .find_map(|&strategy| strategy.parse(text).map(|entries| (strategy, entries)))
}

/// Formats a raw answer for a question with `blank_count` blanks.
///
/// # Example
///
/// ```
/// use anaume::answer::format_answer;
///
/// assert_eq!(format_answer("①赤血球 ②白血球", 2), "正解：A. 赤血球　　B. 白血球");
/// assert_eq!(format_answer("正解：核", 1), "正解：核");
/// ```
pub fn format_answer(answer: &str, blank_count: usize) -> String {
    let body = strip_answer_prefix(answer.trim());

    if blank_count < 2 {
        return format!("{}{}", ANSWER_PREFIX, body);
    }

    match parse_answer(body) {
        Some((strategy, entries)) => {
            tracing::debug!(%strategy, entries = entries.len(), "parsed answer");
            if entries.len() != blank_count {
                tracing::warn!(
                    entries = entries.len(),
                    blank_count,
                    "answer entry count differs from blank count"
                );
            }
            let rendered: Vec<String> = entries.iter().map(ToString::to_string).collect();
            format!("{}{}", ANSWER_PREFIX, rendered.join(ENTRY_SEPARATOR))
        }
        None => {
            tracing::debug!("answer structure not recognized, passing through");
            format!("{}{}", ANSWER_PREFIX, body)
        }
    }
}

/// Trims the value and drops trailing commas.
fn clean_value(value: &str) -> String {
    value
        .trim()
        .trim_end_matches([',', '、', '，'])
        .trim_end()
        .to_string()
}

// ============================================================================
// Strategy 1: Multi-line
// ============================================================================

fn parse_lines(text: &str) -> Vec<AnswerEntry> {
    if !text.contains('\n') {
        return Vec::new();
    }

    let mut entries: Vec<AnswerEntry> = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let position = Label::nth(entries.len());
        let entry = parse_line(line, position);
        entries.push(entry);
    }
    entries
}

/// Parses one line; `position` is the label an unlabeled line would get.
fn parse_line(line: &str, position: Option<Label>) -> AnswerEntry {
    if let Some(caps) = RE_LINE_CIRCLED.captures(line) {
        let label = caps[1].chars().next().and_then(Label::from_circled);
        return AnswerEntry::new(label, &caps[2]);
    }

    if let Some(caps) = RE_LINE_NUMBER.captures(line) {
        let label = caps[1]
            .parse::<u32>()
            .ok()
            .and_then(Label::from_number)
            .or(position);
        return AnswerEntry::new(label, &caps[2]);
    }

    if let Some(caps) = RE_LINE_LETTER.captures(line) {
        let label = caps[1].chars().next().and_then(Label::from_letter);
        return AnswerEntry::new(label, &caps[2]);
    }

    AnswerEntry::new(position, line)
}

// ============================================================================
// Strategy 2: Circled numbers
// ============================================================================

fn parse_circled(text: &str) -> Vec<AnswerEntry> {
    let starts: Vec<(usize, char)> = text
        .char_indices()
        .filter(|(_, c)| is_circled_number(*c))
        .collect();

    let mut entries = Vec::new();
    for (i, &(start, circled)) in starts.iter().enumerate() {
        let end = starts.get(i + 1).map_or(text.len(), |&(next, _)| next);
        let segment = text[start + circled.len_utf8()..end]
            .trim_start_matches(|c: char| matches!(c, '.' | '．' | ':' | '：') || c.is_whitespace());
        if segment.is_empty() {
            continue;
        }
        entries.push(AnswerEntry::new(Label::from_circled(circled), segment));
    }
    entries
}

// ============================================================================
// Strategies 3 and 4: Letter labels on one line
// ============================================================================

fn parse_delimited(text: &str) -> Vec<AnswerEntry> {
    let boundary: &Regex = if RE_SEPARATOR_BOUNDARY.is_match(text) {
        &RE_SEPARATOR_BOUNDARY
    } else if RE_DELIMITED_BOUNDARY.is_match(text) {
        &RE_DELIMITED_BOUNDARY
    } else {
        return Vec::new();
    };
    extract_labeled(text, boundary)
}

fn parse_space_separated(text: &str) -> Vec<AnswerEntry> {
    // "赤血球(RBC: 主成分)" must not split at "C:"
    let mut protector = Protector::new();
    let protected = protector.protect_matches(text, &RE_HALFWIDTH_PARENS);
    let protected = protector.protect_matches(&protected, &RE_FULLWIDTH_PARENS);

    extract_labeled(&protected, &RE_SPACED_BOUNDARY)
        .into_iter()
        .map(|entry| AnswerEntry::new(entry.label, &protector.restore(&entry.value)))
        .collect()
}

/// Walks `text` label by label. Each value runs from its label up to the next
/// match of `boundary` (or the end of the text).
fn extract_labeled(text: &str, boundary: &Regex) -> Vec<AnswerEntry> {
    let mut entries = Vec::new();
    let mut pos = 0;

    while let Some((label, value_start)) = find_inline_label(text, pos) {
        // A value has at least one character.
        let Some(first) = text[value_start..].chars().next() else {
            break;
        };
        let value_end = boundary
            .find_at(text, value_start + first.len_utf8())
            .map_or(text.len(), |m| m.start());

        entries.push(AnswerEntry::new(Some(label), &text[value_start..value_end]));
        pos = value_end;
    }

    entries
}

/// Finds the next `X.` / `X:` label at or after `pos` that is not the tail of
/// a word. Returns the label and where its value starts.
fn find_inline_label(text: &str, mut pos: usize) -> Option<(Label, usize)> {
    while let Some(caps) = RE_INLINE_LABEL.captures_at(text, pos) {
        let whole = caps.get(0)?;
        let starts_word = text[..whole.start()]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_ascii_alphanumeric());

        if starts_word {
            let label = caps[1].chars().next().and_then(Label::from_letter)?;
            return Some((label, whole.end()));
        }
        // Labels are one ASCII letter, so skipping one byte stays on a boundary.
        pos = whole.start() + 1;
    }
    None
}
