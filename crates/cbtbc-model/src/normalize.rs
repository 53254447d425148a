//! Document → word stream normalization.
//!
//! The model itself only consumes words. [`Normalizer`] is the seam where
//! callers plug in their own extraction and tokenization; [`TextNormalizer`]
//! is a dependency-free default that handles plain text and light markup.

use cbtbc_core::lexical::{is_float, PERCENT_MARKER};
use serde::{Deserialize, Serialize};

/// Turns a raw document into the words a model evaluates.
pub trait Normalizer {
    fn normalize(&self, document: &str) -> Vec<String>;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn normalize(&self, document: &str) -> Vec<String> {
        self(document)
    }
}

/// Elements whose contents are never document text.
const RAW_TEXT_TAGS: [&str; 2] = ["script", "style"];

const ENTITIES: [(&str, &str); 7] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&amp;", "&"),
];

/// Default normalizer.
///
/// 1. Optionally removes markup tags and `script` / `style` bodies.
/// 2. Splits on whitespace and trims surrounding punctuation, keeping a
///    leading sign on numbers and a trailing `%`.
/// 3. Optionally lowercases.
/// 4. Joins a standalone `%` onto a preceding number (`100 %` → `100%`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNormalizer {
    #[serde(default = "default_true")]
    pub strip_markup: bool,
    #[serde(default = "default_true")]
    pub lowercase: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self {
            strip_markup: true,
            lowercase: true,
        }
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat input as plain text; `<` and `>` are ordinary characters.
    pub fn plain_text() -> Self {
        Self {
            strip_markup: false,
            ..Self::default()
        }
    }

    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }
}

impl Normalizer for TextNormalizer {
    fn normalize(&self, document: &str) -> Vec<String> {
        let text = if self.strip_markup {
            decode_entities(&strip_markup(document))
        } else {
            document.to_string()
        };

        let mut words: Vec<String> = Vec::new();
        for raw in text.split_whitespace() {
            let word = trim_word(raw);
            if word.is_empty() {
                continue;
            }
            let word = if self.lowercase {
                word.to_lowercase()
            } else {
                word.to_string()
            };

            if word.len() == 1 && word.starts_with(PERCENT_MARKER) {
                if let Some(prev) = words.last_mut().filter(|p| is_float(p.as_str())) {
                    prev.push(PERCENT_MARKER);
                }
                continue;
            }
            if word.chars().any(char::is_alphanumeric) {
                words.push(word);
            }
        }
        words
    }
}

/// Trim punctuation around a whitespace-delimited chunk.
fn trim_word(raw: &str) -> &str {
    let raw = raw.trim_end_matches(|c: char| !c.is_alphanumeric() && c != PERCENT_MARKER);
    let Some(first) = raw.find(char::is_alphanumeric) else {
        return raw;
    };

    let mut start = first;
    if raw[first..].starts_with(|c: char| c.is_ascii_digit()) {
        while let Some(c) = raw[..start].chars().next_back() {
            if matches!(c, '+' | '-' | '.') {
                start -= c.len_utf8();
            } else {
                break;
            }
        }
    }
    &raw[start..]
}

/// Replace tags with spaces and drop `script` / `style` bodies.
fn strip_markup(html: &str) -> String {
    // ASCII lowercasing keeps byte offsets identical to `html`.
    let lower = html.to_ascii_lowercase();
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;

    while let Some(offset) = html[pos..].find('<') {
        let start = pos + offset;
        out.push_str(&html[pos..start]);

        let Some(close) = html[start..].find('>') else {
            pos = start;
            break;
        };
        let end = start + close + 1;
        out.push(' ');
        pos = end;

        let name = lower[start + 1..end - 1]
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or("");
        if RAW_TEXT_TAGS.contains(&name) {
            let closing = format!("</{}", name);
            pos = match lower[end..].find(&closing) {
                Some(p) => {
                    let close_start = end + p;
                    lower[close_start..]
                        .find('>')
                        .map_or(html.len(), |q| close_start + q + 1)
                }
                None => html.len(),
            };
        }
    }

    out.push_str(&html[pos..]);
    out
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, ch)| acc.replace(entity, ch))
}
