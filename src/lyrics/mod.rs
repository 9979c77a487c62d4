//! Lyric text and the collections it comes from.
//!
//! A [`Lyric`] is always bounded: construction truncates the raw text to a
//! character limit, so anything holding one can rely on its length.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::constants::lyrics::MAX_CHARS;
use crate::error::{Error, Result};

/// The authored collection compiled into the binary, in authored order.
const BUILTIN: &[&str] = &[
    "Cash rules everything around me, C.R.E.A.M., get the money, dollar dollar bill, y'all",
    "I bomb atomically, Socrates' philosophies and hypotheses can't define how I be droppin' these",
];

/// A single quoted lyric, truncated to a character limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Lyric(String);

impl Lyric {
    /// Create a lyric, keeping at most `max_chars` characters of `raw`.
    ///
    /// Limits above [`MAX_CHARS`] are capped to it.
    pub fn new(raw: &str, max_chars: usize) -> Self {
        Self(truncate(raw, max_chars.min(MAX_CHARS)))
    }

    /// Get the lyric text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (Unicode scalar values).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Lyric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Lyric {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Keep the first `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, so a multi-byte character is either kept
/// whole or dropped whole.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

/// The built-in lyric collection.
pub const fn builtin() -> &'static [&'static str] {
    BUILTIN
}

/// Read a lyric list from a plain-text file, one lyric per line.
///
/// Blank lines are skipped and trailing whitespace is dropped.
pub fn load_source(path: &Path) -> Result<Vec<String>> {
    let content =
        fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;

    let lyrics: Vec<String> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect();

    tracing::info!("Loaded {} lyrics from {}", lyrics.len(), path.display());
    Ok(lyrics)
}
