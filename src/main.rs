// Copyright 2025-present The toli Authors
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use toli::build::{load_path, tidy, write_path};
use toli::{Lookup, SearchDirection, SearchState, TermPair};

mod cli;
use cli::display::{self, themed, BOLD, DIM, GRAY};
use cli::{Cli, Commands, ReplInput, ReplOutcome, ReplSession};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Search {
            file,
            query,
            direction,
            limit,
        } => run_search(&file, &query, direction, limit),
        Commands::Repl { file, direction } => run_repl(&file, direction),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Import { input, output } => run_import(&input, &output),
        Commands::Tidy { input, output } => run_tidy(&input, &output),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for results.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TOLI_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Build a lookup the way a UI would: start in Loading, attach the dictionary
/// once the loader resolves.
fn open_lookup(file: &Path) -> Result<Lookup> {
    let mut lookup = Lookup::loading();
    let pairs = load_path(file).with_context(|| format!("cannot load dictionary {}", file.display()))?;
    lookup.set_pairs(pairs);
    Ok(lookup)
}

fn run_search(file: &Path, query: &str, direction: SearchDirection, limit: usize) -> Result<()> {
    let lookup = open_lookup(file)?;
    let state = lookup.on_query_changed_with_limit(query, direction, limit);
    display::print_state(&state);
    Ok(())
}

fn run_repl(file: &Path, direction: SearchDirection) -> Result<()> {
    let lookup = open_lookup(file)?;
    println!(
        "{} entries loaded. Type to search; :source :target :both :clear :quit (::text searches for :text)",
        themed(GRAY, &[BOLD], &lookup.pairs().len().to_string())
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = ReplSession::new(direction);

    loop {
        print!("[{}]> ", display::direction_label(session.direction));
        stdout.flush().context("cannot write prompt")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("cannot read input")? == 0 {
            break;
        }

        match session.step(&lookup, ReplInput::parse(&line)) {
            ReplOutcome::Quit => break,
            ReplOutcome::Unchanged => {}
            ReplOutcome::Cleared => println!("{}", themed(GRAY, &[DIM], "cleared")),
            ReplOutcome::Unknown(command) => eprintln!("unknown command ':{}'", command),
            ReplOutcome::Show(state) => {
                if state == SearchState::Empty {
                    println!("{}", themed(GRAY, &[DIM], "cleared"));
                }
                display::print_state(&state);
            }
        }
    }

    Ok(())
}

fn run_inspect(file: &Path) -> Result<()> {
    let pairs = load_path(file).with_context(|| format!("cannot load dictionary {}", file.display()))?;

    let mut seen: HashSet<&TermPair> = HashSet::new();
    let duplicates = pairs.iter().filter(|&pair| !seen.insert(pair)).count();
    let longest_source = longest_field(&pairs, |pair| pair.source_text.as_str());
    let longest_target = longest_field(&pairs, |pair| pair.target_text.as_str());

    display::section_top(&file.display().to_string());
    display::row(&format!(" entries          {}", pairs.len()));
    display::row(&format!(" exact duplicates {}", duplicates));
    display::row(&format!(
        " longest source   {} ({} chars)",
        truncate_chars(&longest_source, 40),
        longest_source.chars().count()
    ));
    display::row(&format!(
        " longest target   {} ({} chars)",
        truncate_chars(&longest_target, 40),
        longest_target.chars().count()
    ));
    display::section_bot();
    Ok(())
}

fn run_import(input: &Path, output: &Path) -> Result<()> {
    let pairs = load_path(input).with_context(|| format!("cannot read {}", input.display()))?;
    write_path(&pairs, output).with_context(|| format!("cannot write {}", output.display()))?;

    println!("Imported {} entries into {}", pairs.len(), output.display());
    for (i, pair) in pairs.iter().take(3).enumerate() {
        println!("  {}. {} → {}", i + 1, pair.source_text, pair.target_text);
    }
    Ok(())
}

fn run_tidy(input: &Path, output: &Path) -> Result<()> {
    let pairs = load_path(input).with_context(|| format!("cannot read {}", input.display()))?;
    let original = pairs.len();
    let report = tidy(pairs);
    write_path(&report.pairs, output).with_context(|| format!("cannot write {}", output.display()))?;

    println!("Original entries:    {}", original);
    println!("Rewritten:           {}", report.rewritten);
    println!("Abbreviations fixed: {}", report.expanded);
    println!("Dropped (invalid):   {}", report.dropped_invalid);
    println!("Dropped (duplicate): {}", report.dropped_duplicate);
    println!(
        "Final entries:       {} → {}",
        themed(display::GREEN, &[BOLD], &report.pairs.len().to_string()),
        output.display()
    );
    Ok(())
}

fn longest_field(pairs: &[TermPair], field: fn(&TermPair) -> &str) -> String {
    pairs
        .iter()
        .map(field)
        .max_by_key(|text| text.chars().count())
        .unwrap_or("")
        .to_string()
}

/// Shorten to `max` characters, adding an ellipsis. Char-based so Cyrillic never splits.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
