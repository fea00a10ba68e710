// Copyright 2025-present The toli Authors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the toli command-line interface.
//!
//! `search` runs one lookup, `repl` runs a lookup per input line, `inspect`
//! summarizes a dataset, and `import` / `tidy` prepare datasets before they
//! are published.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use toli::{Lookup, SearchDirection, SearchState, DISPLAY_LIMIT};

#[derive(Parser)]
#[command(
    name = "toli",
    about = "Bilingual term lookup with substring matching and relevance ranking",
    version
)]
pub struct Cli {
    /// Log debug details to stderr (overridden by TOLI_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a query in a dictionary file and print ranked matches
    Search {
        /// Dictionary file (JSON array of term pairs, or .csv)
        file: PathBuf,

        /// Search query (trimmed and case-folded before matching)
        query: String,

        /// Which side of each pair to search: source, target or both
        #[arg(short, long, default_value = "both")]
        direction: SearchDirection,

        /// Maximum number of results to print (capped at the display limit)
        #[arg(short, long, default_value_t = DISPLAY_LIMIT)]
        limit: usize,
    },

    /// Interactive lookup: every input line replaces the current query
    ///
    /// Commands: `:source`, `:target`, `:both` switch direction and re-run the
    /// current query; `:clear` clears it; `:quit` exits.
    Repl {
        /// Dictionary file (JSON array of term pairs, or .csv)
        file: PathBuf,

        /// Initial search direction
        #[arg(short, long, default_value = "both")]
        direction: SearchDirection,
    },

    /// Summarize a dictionary file
    Inspect {
        /// Dictionary file (JSON array of term pairs, or .csv)
        file: PathBuf,
    },

    /// Convert a two-column CSV export into a JSON dictionary
    Import {
        /// CSV file: header row, source in column 1, target in column 2
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Clean up a dictionary: strip product codes, expand FR/RR, drop junk and duplicates
    Tidy {
        /// Input dictionary (JSON or .csv)
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// A line typed into the REPL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Query(String),
    Direction(SearchDirection),
    Clear,
    Quit,
    Unknown(String),
}

impl ReplInput {
    /// Lines starting with `:` are commands, everything else is a query.
    /// A leading `::` escapes the colon, so `::b` searches for `:b`.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim();
        if let Some(escaped) = trimmed.strip_prefix("::") {
            return ReplInput::Query(format!(":{}", escaped));
        }
        let Some(command) = trimmed.strip_prefix(':') else {
            return ReplInput::Query(line.to_string());
        };
        match command.trim() {
            "q" | "quit" | "exit" => ReplInput::Quit,
            "c" | "clear" => ReplInput::Clear,
            other => match other.parse::<SearchDirection>() {
                Ok(direction) => ReplInput::Direction(direction),
                Err(_) => ReplInput::Unknown(other.to_string()),
            },
        }
    }
}

/// What the REPL should print after one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplOutcome<'a> {
    Show(SearchState<'a>),
    Cleared,
    Unchanged,
    Unknown(String),
    Quit,
}

/// Query and direction carried from one REPL line to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplSession {
    pub query: String,
    pub direction: SearchDirection,
}

impl ReplSession {
    pub fn new(direction: SearchDirection) -> Self {
        Self {
            query: String::new(),
            direction,
        }
    }

    /// Apply one input line against `lookup`.
    pub fn step<'a>(&mut self, lookup: &'a Lookup, input: ReplInput) -> ReplOutcome<'a> {
        match input {
            ReplInput::Quit => return ReplOutcome::Quit,
            ReplInput::Clear => {
                self.query.clear();
                return ReplOutcome::Cleared;
            }
            ReplInput::Unknown(command) => return ReplOutcome::Unknown(command),
            ReplInput::Direction(direction) => {
                self.direction = direction;
                // Switching direction only re-runs an active query
                if self.query.trim().is_empty() {
                    return ReplOutcome::Unchanged;
                }
            }
            ReplInput::Query(query) => self.query = query,
        }
        ReplOutcome::Show(lookup.on_query_changed(&self.query, self.direction))
    }
}
