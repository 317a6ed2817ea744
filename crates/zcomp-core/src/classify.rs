//! Flag value classification
//!
//! Infers what kind of value a flag accepts from nothing but its name and
//! description. Each heuristic below covers one pattern family; [`classify`]
//! applies them in a fixed priority order and the first match wins:
//!
//! 1. enumeration in colon form (`"type: a, b, c"`, `"类型：a，b"`)
//! 2. enumeration in bracket form (`"mode (a/b/c)"`, `"type (a|b)"`)
//! 3. URL, from the flag name
//! 4. file path, from the flag name, then from the description
//! 5. number, from the description
//! 6. generic value
//!
//! Reordering these changes which hint ambiguous descriptions get, so the
//! order is part of the contract.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Enumerated tokens must be shorter than this many characters.
const MAX_TOKEN_CHARS: usize = 20;

/// Name fragments that suggest a file-system path.
const PATH_NAME_PATTERNS: &[&str] = &[
    "file", "path", "config", "input", "output", "cert", "key", "ca",
];

/// Name fragments that rule out a path even when a path fragment matched.
const PATH_NAME_EXCLUSIONS: &[&str] = &["prefix", "format"];

const PATH_USAGE_PATTERNS: &[&str] = &["file", "path", "文件", "路径", "证书"];

const NUMBER_USAGE_PATTERNS: &[&str] = &["number", "数量", "个数"];

/// First parenthesised span, ASCII or full-width.
static BRACKET_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(（]([^)）]*)[)）]").expect("static regex must compile"));

/// Inferred shape of the values a flag accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionHint {
    /// One of a fixed set of words
    Enumerated(Vec<String>),
    Url,
    FilePath,
    Number,
    /// Anything else
    Generic,
}

impl fmt::Display for CompletionHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionHint::Enumerated(values) => write!(f, "one of: {}", values.join(", ")),
            CompletionHint::Url => write!(f, "url"),
            CompletionHint::FilePath => write!(f, "file path"),
            CompletionHint::Number => write!(f, "number"),
            CompletionHint::Generic => write!(f, "value"),
        }
    }
}

/// Classify a flag's value from its name and description.
///
/// Never fails: empty or unrecognisable text yields [`CompletionHint::Generic`].
pub fn classify(name: &str, usage: &str) -> CompletionHint {
    if let Some(values) = parse_colon_enum(usage).or_else(|| parse_bracket_enum(usage)) {
        return CompletionHint::Enumerated(values);
    }

    let name = name.to_lowercase();
    let usage = usage.to_lowercase();

    if is_url(&name) {
        CompletionHint::Url
    } else if is_file_path(&name, &usage) {
        CompletionHint::FilePath
    } else if is_number(&usage) {
        CompletionHint::Number
    } else {
        CompletionHint::Generic
    }
}

/// Parse `"label: a, b, c"` style enumerations.
///
/// Only the text after the first colon counts, cut at any parenthesised
/// remark, and only when it is comma separated.
pub fn parse_colon_enum(usage: &str) -> Option<Vec<String>> {
    let (idx, sep) = usage
        .char_indices()
        .find(|&(_, c)| c == ':' || c == '：')?;
    let mut rest = usage[idx + sep.len_utf8()..].trim();
    if let Some(paren) = rest.find(['(', '（']) {
        rest = rest[..paren].trim();
    }
    if !rest.contains([',', '，']) {
        return None;
    }

    let values = enum_tokens(rest.split([',', '，', ' ']));
    (values.len() >= 2).then_some(values)
}

/// Parse `"label (a/b/c)"` or `"label (a|b|c)"` style enumerations.
///
/// Only the first parenthesised span is considered, and it must not contain
/// spaces so that ordinary remarks such as `"(see docs/usage)"` don't match.
pub fn parse_bracket_enum(usage: &str) -> Option<Vec<String>> {
    let inner = BRACKET_SPAN_RE.captures(usage)?.get(1)?.as_str();
    if !inner.contains(['/', '|']) || inner.contains(' ') {
        return None;
    }

    let values = enum_tokens(inner.split(['/', '|']));
    (values.len() >= 2).then_some(values)
}

fn enum_tokens<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|p| {
            !p.is_empty()
                && !p.contains([' ', '(', ')'])
                && p.chars().count() < MAX_TOKEN_CHARS
        })
        .map(str::to_string)
        .collect()
}

/// Expects a lowercased name.
pub fn is_url(name: &str) -> bool {
    name.contains("url")
}

/// Expects lowercased input.
///
/// A name matching a path fragment decides on its own: it is a path unless
/// it also carries an exclusion such as `prefix`, and the description is not
/// consulted. Only names without any path fragment fall back to the
/// description.
pub fn is_file_path(name: &str, usage: &str) -> bool {
    if PATH_NAME_PATTERNS.iter().any(|p| name.contains(p)) {
        return !PATH_NAME_EXCLUSIONS.iter().any(|p| name.contains(p));
    }
    PATH_USAGE_PATTERNS.iter().any(|p| usage.contains(p))
}

/// Expects a lowercased description.
pub fn is_number(usage: &str) -> bool {
    NUMBER_USAGE_PATTERNS.iter().any(|p| usage.contains(p))
}
