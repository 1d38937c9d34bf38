//! Sanitizers applied to raw submitted values before storage.
//!
//! A closed set of total functions: every variant maps any input string to a
//! cleaned string, degrading unsafe or malformed input to the empty string
//! rather than failing. The empty result means "no stored value" — the host
//! falls back to the field default.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a submitted value is cleaned before it is persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Sanitizer {
    /// Lowercased key: only `a-z0-9_-` survive.
    Key,
    /// Plain text: tags stripped, whitespace collapsed.
    Text,
    /// Non-negative integer or empty.
    AbsInt,
    /// `#`-prefixed 3- or 6-digit hex color, or empty.
    HexColor,
    /// Markup with scripts and inline event handlers removed.
    RichText,
    /// Stored as submitted.
    Raw,
}

impl Sanitizer {
    /// Clean a raw submitted value. Total: never fails.
    pub fn apply(&self, raw: &str) -> String {
        match self {
            Self::Key => sanitize_key(raw),
            Self::Text => sanitize_text_field(raw),
            Self::AbsInt => sanitize_absint(raw),
            Self::HexColor => maybe_hash_hex_color(raw),
            Self::RichText => sanitize_rich_text(raw),
            Self::Raw => raw.to_string(),
        }
    }
}

/// Lowercase and strip everything outside `a-z0-9_-`.
fn sanitize_key(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}

/// Strip tags, drop non-whitespace control characters, collapse whitespace
/// runs to a single space, trim.
fn sanitize_text_field(raw: &str) -> String {
    let stripped = strip_tags(raw);
    let mut out = String::with_capacity(stripped.len());
    let mut in_whitespace = false;
    for c in stripped.chars() {
        if c.is_control() && !c.is_whitespace() {
            continue;
        }
        if c.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
                in_whitespace = true;
            }
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out.trim().to_string()
}

/// Empty, zero, or non-numeric input degrades to empty; anything else
/// becomes `|trunc(value)|` rendered back as a string.
fn sanitize_absint(raw: &str) -> String {
    // "0" is treated as unset, like the empty string.
    if raw.is_empty() || raw == "0" {
        return String::new();
    }
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{}", value.trunc().abs() as u64),
        _ => String::new(),
    }
}

/// Accept a 3- or 6-digit hex color with or without the leading `#`,
/// normalize to the `#`-prefixed form; anything else degrades to empty.
fn maybe_hash_hex_color(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return String::new();
    }
    let digits = value.strip_prefix('#').unwrap_or(value);
    if (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        format!("#{digits}")
    } else {
        String::new()
    }
}

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("valid script-block pattern")
});
static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").expect("valid style-block pattern")
});
static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\son\w+\s*=\s*("[^"]*"|'[^']*'|[^\s>]+)"#).expect("valid handler pattern")
});

/// Keep the markup, drop script/style elements with their content and any
/// inline event handler attributes.
fn sanitize_rich_text(raw: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(raw, "");
    let without_styles = STYLE_BLOCK.replace_all(&without_scripts, "");
    EVENT_HANDLER.replace_all(&without_styles, "").into_owned()
}

fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
