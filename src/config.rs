//! Application configuration.
//!
//! Every setting has a default that reproduces the plain export, and each can
//! be overridden through an environment variable. There is no config file.

use std::env;
use std::path::PathBuf;

use crate::constants::{env as vars, lyrics, output};
use crate::error::{Error, Result};

/// Configuration for a single export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the JSON file is written into
    pub output_dir: PathBuf,
    /// Maximum number of characters kept per lyric
    pub max_chars: usize,
    /// Whether the rendered JSON is echoed to stdout
    pub echo: bool,
    /// Plain-text lyric list replacing the built-in collection
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(output::DEFAULT_DIR),
            max_chars: lyrics::MAX_CHARS,
            echo: true,
            source: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = var(vars::OUTPUT_DIR) {
            config.output_dir = expand_path(&dir);
        }

        if let Some(raw) = var(vars::MAX_CHARS) {
            config.max_chars = parse_max_chars(&raw)?;
        }

        if let Some(raw) = var(vars::ECHO) {
            config.echo = parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!("Ignoring unrecognised {}={raw:?}; echo stays on", vars::ECHO);
                true
            });
        }

        config.source = var(vars::SOURCE).map(|p| expand_path(&p));

        Ok(config)
    }

    /// Full path of the file this configuration writes.
    pub fn destination(&self) -> PathBuf {
        crate::export::destination(&self.output_dir)
    }
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw.trim()).to_string())
}

fn parse_max_chars(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(Error::config(
            format!("{} must be greater than zero", vars::MAX_CHARS),
            "Unset it to keep the default of 125",
        )),
        Ok(n) if n > lyrics::MAX_CHARS => Err(Error::config(
            format!("{}={n} exceeds the {}-character limit", vars::MAX_CHARS, lyrics::MAX_CHARS),
            "Use a value between 1 and 125",
        )),
        Ok(n) => Ok(n),
        Err(e) => Err(Error::config(
            format!("{}={raw:?} is not a number ({e})", vars::MAX_CHARS),
            "Use a positive integer such as 125",
        )),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_plain_export() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_dir, PathBuf::from("../bin"));
        assert_eq!(config.max_chars, 125);
        assert!(config.echo);
        assert!(config.source.is_none());
        assert_eq!(
            config.destination(),
            PathBuf::from("../bin").join("hot_fire_like_dylan.json")
        );
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup(&[
            ("HOT_FIRE_OUTPUT_DIR", "/tmp/out"),
            ("HOT_FIRE_MAX_CHARS", " 40 "),
            ("HOT_FIRE_ECHO", "off"),
            ("HOT_FIRE_SOURCE", "/tmp/lyrics.txt"),
        ]))
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.max_chars, 40);
        assert!(!config.echo);
        assert_eq!(config.source, Some(PathBuf::from("/tmp/lyrics.txt")));
    }

    #[test]
    fn empty_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[
            ("HOT_FIRE_OUTPUT_DIR", ""),
            ("HOT_FIRE_MAX_CHARS", "  "),
        ]))
        .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = Config::from_lookup(lookup(&[("HOT_FIRE_MAX_CHARS", "0")])).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn limit_above_125_is_rejected() {
        let err = Config::from_lookup(lookup(&[("HOT_FIRE_MAX_CHARS", "500")])).unwrap_err();
        match err {
            Error::Config { message, .. } => assert!(message.contains("500")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn limit_of_exactly_125_is_accepted() {
        let config = Config::from_lookup(lookup(&[("HOT_FIRE_MAX_CHARS", "125")])).unwrap();
        assert_eq!(config.max_chars, 125);
    }

    #[test]
    fn non_numeric_limit_is_rejected() {
        let err = Config::from_lookup(lookup(&[("HOT_FIRE_MAX_CHARS", "lots")])).unwrap_err();
        match err {
            Error::Config { message, .. } => assert!(message.contains("lots")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_echo_value_keeps_echo_on() {
        let config = Config::from_lookup(lookup(&[("HOT_FIRE_ECHO", "maybe")])).unwrap();
        assert!(config.echo);
    }

    #[test]
    fn parse_flag_variants() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("No"), Some(false));
        assert_eq!(parse_flag("?"), None);
    }
}
