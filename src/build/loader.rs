// Copyright 2025-present The toli Authors
// SPDX-License-Identifier: Apache-2.0

//! Dataset readers.
//!
//! JSON is the published format: an array of `{ "sourceText", "targetText" }`
//! objects. CSV is what spreadsheet exports look like: a header row, source
//! in the first column, target in the second, anything after that ignored.

use std::io::{BufReader, Read};

use crate::build::LoadError;
use crate::types::TermPair;

/// Read a JSON array of term pairs, in file order.
///
/// Any record missing a field (or carrying a non-string one) fails the load,
/// with serde's line and column in the error.
pub fn load_json<R: Read>(reader: R) -> Result<Vec<TermPair>, LoadError> {
    let pairs: Vec<TermPair> = serde_json::from_reader(BufReader::new(reader))?;
    Ok(pairs)
}

/// Read a two-column CSV export, in file order.
///
/// Cells are trimmed. Rows where either cell ends up empty, or holds the
/// literal `nan` that spreadsheet tools write for blank cells, are skipped.
/// A row with fewer than two columns is an error.
pub fn load_csv<R: Read>(reader: R) -> Result<Vec<TermPair>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut pairs = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record?;
        // 1-based, counting the header row
        let row = i + 2;

        let (Some(source), Some(target)) = (record.get(0), record.get(1)) else {
            return Err(LoadError::MissingColumn { row });
        };
        let (source, target) = (source.trim(), target.trim());

        if is_blank_cell(source) || is_blank_cell(target) {
            tracing::warn!(row, "skipping CSV row with a blank cell");
            continue;
        }
        pairs.push(TermPair::new(source, target));
    }

    Ok(pairs)
}

fn is_blank_cell(cell: &str) -> bool {
    cell.is_empty() || cell == "nan"
}
