// Copyright 2025-present The toli Authors
// SPDX-License-Identifier: Apache-2.0

//! Dataset cleanup before publishing.
//!
//! The automotive parts catalog the dictionary was first built from is full
//! of product codes that get in the way of lookups: oil grades (`5W-30`),
//! API classes (`SN/CF`), pack volumes (`4L`), bulb wattages, and catalog
//! abbreviations (`FR`, `RR`). This pass strips or expands them, drops entries
//! that end up useless, and removes duplicates.
//!
//! Rules run in a fixed order per entry:
//!
//! 1. strip specifications from both fields
//! 2. simplify kit names in the target field
//! 3. expand `FR` / `RR` in both fields
//! 4. drop entries with a field shorter than 2 characters or made of digits
//! 5. drop duplicates (case- and whitespace-insensitive), keeping the first

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::TermPair;
use crate::utils::collapse_whitespace;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("tidy rule patterns are valid")
}

/// Specification stripping, most specific patterns first.
static SPEC_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        // `/GF-6A0W-20`
        (compile(r"/GF-[0-9]+[A-Z]*[0-9]*W-?[0-9]*"), ""),
        // `C20W-30`
        (compile(r"C[0-9]+W-?[0-9]+"), ""),
        // `5W-30`, `10W30`
        (compile(r"\b[0-9]{1,2}W-?[0-9]{2}\b"), ""),
        (compile(r"ENGINE OILC"), "ENGINE OIL"),
        // API classes: `/CF`, `/GF`
        (compile(r"/[A-Z]{2,3}"), ""),
        (compile(r"(?i)\bSN/CF\b"), ""),
        (compile(r"(?i)\bSP/GF\b"), ""),
        // Volumes: `4L`, `20l`
        (compile(r"\b[0-9]+[lL]\b"), ""),
    ]
});

/// Bulb wattage (`55W`). Only stripped when `BULB` appears later in the text.
static BULB_WATTAGE: LazyLock<Regex> = LazyLock::new(|| compile(r"\b[0-9]{1,3}W"));

static PRODUCT_CODE: LazyLock<Regex> = LazyLock::new(|| compile(r"\bTGMO[A-Z]*"));

static TRAILING_DASH: LazyLock<Regex> = LazyLock::new(|| compile(r"\s*-\s*$"));

static LEADING_DASH: LazyLock<Regex> = LazyLock::new(|| compile(r"^\s*-\s*"));

static KIT_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (compile(r"\bELEMENTKIT\b"), "ELEMENT"),
        (compile(r"\bFILTERKIT\b"), "FILTER"),
        (compile(r"\bPADKIT\b"), "PAD"),
        (compile(r"\bBULB12V\b"), "BULB"),
    ]
});

static ABBREVIATIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (compile(r"\bFR\b"), "FRONT"),
        (compile(r"\bRR\b"), "REAR"),
    ]
});

fn apply_rules(text: &str, rules: &[(Regex, &'static str)]) -> String {
    rules.iter().fold(text.to_string(), |acc, (pattern, replacement)| {
        pattern.replace_all(&acc, *replacement).into_owned()
    })
}

fn strip_bulb_wattage(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in BULB_WATTAGE.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if !text[m.end()..].contains("BULB") {
            out.push_str(m.as_str());
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Remove oil grades, API classes, volumes, bulb wattages and product codes.
pub fn strip_specifications(text: &str) -> String {
    let text = apply_rules(text, &SPEC_RULES);
    let text = strip_bulb_wattage(&text);
    let text = PRODUCT_CODE.replace_all(&text, "ENGINE OIL");

    let text = collapse_whitespace(&text);
    let text = TRAILING_DASH.replace(&text, "");
    LEADING_DASH.replace(&text, "").into_owned()
}

/// Collapse catalog kit names (`FILTERKIT` → `FILTER`).
pub fn simplify_kit_names(text: &str) -> String {
    collapse_whitespace(&apply_rules(text, &KIT_RULES))
}

/// Expand the whole-word abbreviations `FR` → `FRONT` and `RR` → `REAR`.
pub fn expand_abbreviations(text: &str) -> String {
    apply_rules(text, &ABBREVIATIONS)
}

/// Is the entry still worth keeping after cleanup?
pub fn is_valid_entry(pair: &TermPair) -> bool {
    let useful = |field: &str| {
        let field = field.trim();
        field.chars().count() >= 2 && !field.chars().all(|c| c.is_ascii_digit())
    };
    useful(&pair.source_text) && useful(&pair.target_text)
}

/// Outcome of [`tidy`]: the cleaned pairs plus counts for the summary line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TidyReport {
    pub pairs: Vec<TermPair>,
    /// Entries whose text changed while stripping specifications or kit names.
    pub rewritten: usize,
    /// Entries whose text changed while expanding abbreviations.
    pub expanded: usize,
    pub dropped_invalid: usize,
    pub dropped_duplicate: usize,
}

/// Run the whole cleanup pipeline over a dataset, keeping input order.
pub fn tidy(pairs: Vec<TermPair>) -> TidyReport {
    let mut report = TidyReport::default();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for pair in pairs {
        let source = strip_specifications(&pair.source_text);
        let target = simplify_kit_names(&strip_specifications(&pair.target_text));
        if source != pair.source_text || target != pair.target_text {
            report.rewritten += 1;
        }

        let expanded = TermPair::new(expand_abbreviations(&source), expand_abbreviations(&target));
        if expanded.source_text != source || expanded.target_text != target {
            report.expanded += 1;
        }

        if !is_valid_entry(&expanded) {
            report.dropped_invalid += 1;
            continue;
        }

        let key = (
            expanded.source_text.trim().to_lowercase(),
            expanded.target_text.trim().to_lowercase(),
        );
        if !seen.insert(key) {
            report.dropped_duplicate += 1;
            continue;
        }

        report.pairs.push(expanded);
    }

    tracing::info!(
        kept = report.pairs.len(),
        rewritten = report.rewritten,
        expanded = report.expanded,
        dropped_invalid = report.dropped_invalid,
        dropped_duplicate = report.dropped_duplicate,
        "tidied dataset"
    );
    report
}
