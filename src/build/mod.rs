// Copyright 2025-present The toli Authors
// SPDX-License-Identifier: Apache-2.0

//! Getting a dictionary in and out of files.
//!
//! The lookup core never touches the filesystem. Everything here runs before a
//! [`crate::Lookup`] exists: reading a dataset, converting spreadsheet exports,
//! and cleaning up a dataset before it is published.

pub mod loader;
pub mod tidy;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::TermPair;

pub use loader::*;
pub use tidy::*;

/// Why a dataset could not be loaded.
///
/// A malformed record fails the whole load. Half a dictionary is worse than
/// none: it silently turns "not loaded" into "no results".
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: expected at least two columns")]
    MissingColumn { row: usize },
}

/// Load a dataset, choosing the format from the extension (`.csv` or JSON).
pub fn load_path(path: &Path) -> Result<Vec<TermPair>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let pairs = if is_csv { load_csv(file)? } else { load_json(file)? };
    tracing::info!(path = %path.display(), entries = pairs.len(), "loaded dictionary");
    Ok(pairs)
}

/// Write pairs as a pretty-printed JSON array. Non-ASCII text is written as-is.
pub fn write_json<W: Write>(pairs: &[TermPair], writer: W) -> Result<(), LoadError> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, pairs)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    writer.flush().map_err(serde_json::Error::io)?;
    Ok(())
}

/// Write pairs to `path` as JSON, creating parent directories as needed.
pub fn write_path(pairs: &[TermPair], path: &Path) -> Result<(), LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = File::create(path).map_err(io_err)?;
    write_json(pairs, file)
}
