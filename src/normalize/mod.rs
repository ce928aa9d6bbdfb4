//! Text normalization for comparison and filtering.
//!
//! Every downstream stage (eligibility, embedding, validation) operates on
//! the output of [`normalize`], never on raw comment text.


use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[@#]\w+").expect("tag pattern is valid"));

static NON_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("letter whitelist pattern is valid"));

/// Produces the canonical comparison string for a raw comment.
///
/// Strips URL-like substrings and `@mention`/`#hashtag` tokens, drops every
/// character outside the letter/whitespace alphabet, collapses whitespace
/// runs and trims. Deterministic and pure; empty input stays empty.
pub fn normalize(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = TAG_RE.replace_all(&text, "");
    let text = NON_LETTER_RE.replace_all(&text, "");

    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Word count of a normalized string (whitespace-delimited tokens).
#[inline]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
