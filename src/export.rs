//! Export lyrics to a JSON document on disk.
//!
//! Building the document is pure; writing and echoing are the only side
//! effects, and they happen in [`Exporter::export`].

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::Config;
use crate::constants::output;
use crate::error::{Error, Result};
use crate::lyrics::Lyric;

/// The single-key document written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    /// Truncated lyrics in source order
    pub lyrics: Vec<Lyric>,
}

/// Summary of a completed export.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// File that was written
    pub path: PathBuf,
    /// Number of lyrics in the document
    pub count: usize,
    /// How many lyrics were cut to fit the limit
    pub truncated: usize,
    /// Exact text written to the file
    pub json: String,
}

/// Truncate every entry and wrap the result in an [`ExportDocument`].
pub fn build_document<S: AsRef<str>>(raw: &[S], max_chars: usize) -> ExportDocument {
    truncate_all(raw, max_chars).0
}

/// Build the document and count how many entries were cut.
fn truncate_all<S: AsRef<str>>(raw: &[S], max_chars: usize) -> (ExportDocument, usize) {
    let mut lyrics = Vec::with_capacity(raw.len());
    let mut cut = 0;

    for (idx, text) in raw.iter().enumerate() {
        let text: &str = text.as_ref();
        let lyric = Lyric::new(text, max_chars);
        // A truncated lyric is a strict prefix of its source
        if lyric.as_str().len() < text.len() {
            cut += 1;
            tracing::debug!("Truncated lyric {idx} to {} chars", lyric.char_len());
        }
        lyrics.push(lyric);
    }

    (ExportDocument { lyrics }, cut)
}

/// Render a document as 4-space indented JSON with non-ASCII left unescaped.
pub fn render_json(document: &ExportDocument) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(output::JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| Error::Serialize(serde::ser::Error::custom(e)))
}

/// Path of the exported file inside `dir`.
pub fn destination(dir: &Path) -> PathBuf {
    dir.join(output::FILENAME)
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    fs_err::create_dir_all(dir).map_err(|e| Error::io(e, dir.to_path_buf()))
}

/// Write `json` to the export file in `dir`, replacing any previous contents.
pub fn write_document(dir: &Path, json: &str) -> Result<PathBuf> {
    ensure_directory(dir)?;

    let path = destination(dir);
    fs_err::write(&path, json).map_err(|e| Error::io(e, path.clone()))?;

    tracing::info!("Wrote {} bytes to {}", json.len(), path.display());
    Ok(path)
}

/// Runs the export with a fixed directory, limit and echo setting.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
    max_chars: usize,
    echo: bool,
}

impl Exporter {
    /// Create an exporter from the loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            max_chars: config.max_chars,
            echo: config.echo,
        }
    }

    /// Directory the exporter writes into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Truncate, render, write, and echo `raw` to `console`.
    ///
    /// The file holds exactly the rendered JSON; the echo adds a trailing
    /// newline. Nothing reaches `console` when echo is disabled.
    pub fn export<S, W>(&self, raw: &[S], console: &mut W) -> Result<ExportReport>
    where
        S: AsRef<str>,
        W: Write,
    {
        let (document, truncated) = truncate_all(raw, self.max_chars);
        let json = render_json(&document)?;
        let path = write_document(&self.output_dir, &json)?;

        if self.echo {
            writeln!(console, "{json}")
                .and_then(|()| console.flush())
                .map_err(|source| Error::Io { source, path: None })?;
        }

        Ok(ExportReport {
            path,
            count: document.lyrics.len(),
            truncated,
            json,
        })
    }
}
