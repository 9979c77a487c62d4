//! Application constants.
//!
//! Centralizes the fixed values the export depends on.

/// Lyric constraints.
pub mod lyrics {
    /// Maximum number of characters kept from each lyric.
    pub const MAX_CHARS: usize = 125;
}

/// Output document constants.
pub mod output {
    /// Name of the single key in the exported document.
    pub const DOCUMENT_KEY: &str = "lyrics";

    /// File name written inside the output directory.
    pub const FILENAME: &str = "hot_fire_like_dylan.json";

    /// Default output directory, relative to the working directory.
    pub const DEFAULT_DIR: &str = "../bin";

    /// Indentation used when rendering JSON.
    pub const JSON_INDENT: &[u8] = b"    ";
}

/// Environment variable names read by [`crate::config::Config::load`].
pub mod env {
    /// Overrides the output directory.
    pub const OUTPUT_DIR: &str = "HOT_FIRE_OUTPUT_DIR";

    /// Overrides the truncation limit.
    pub const MAX_CHARS: &str = "HOT_FIRE_MAX_CHARS";

    /// Disables the console echo when set to a false-like value.
    pub const ECHO: &str = "HOT_FIRE_ECHO";

    /// Path to a plain-text lyric list used instead of the built-in one.
    pub const SOURCE: &str = "HOT_FIRE_SOURCE";
}
