//! `hot-fire` - export quoted lyrics to a length-bounded JSON document.
//!
//! The library splits the work into a pure half (truncation and document
//! building) and an effectful half (writing the file and echoing it), so the
//! binary is a thin wrapper and the pieces can be tested on their own.

pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod lyrics;

pub use config::Config;
pub use error::{Error, Result};
pub use export::{build_document, render_json, ExportDocument, ExportReport, Exporter};
pub use lyrics::Lyric;
