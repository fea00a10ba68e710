//! Custom cargo commands for the toli crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + score bands)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("toli Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Verifying score bands...");
    verify_score_bands()?;
    println!("✓ Exact > prefix > contains bands are separated\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output
        .stdout
        .split(|&b| b == b'\n')
        .filter(|l| !l.is_empty())
        .count();

    if count < 2 {
        bail!(
            "Expected at least 2 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// Each bonus must exceed the sum of the weaker ones, or a weaker signal
/// combination could outrank a stronger match.
fn verify_score_bands() -> Result<()> {
    let root = project_root()?;
    let core_rs = std::fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;

    let exact = extract_constant(&core_rs, "EXACT_SCORE")?;
    let prefix = extract_constant(&core_rs, "PREFIX_SCORE")?;
    let contains = extract_constant(&core_rs, "CONTAINS_SCORE")?;

    if contains == 0 {
        bail!("CONTAINS_SCORE must be positive");
    }
    if prefix <= contains {
        bail!("PREFIX_SCORE={} must exceed CONTAINS_SCORE={}", prefix, contains);
    }
    if exact <= prefix + contains {
        bail!(
            "EXACT_SCORE={} must exceed PREFIX_SCORE + CONTAINS_SCORE={}",
            exact,
            prefix + contains
        );
    }

    println!(
        "  exact={} prefix-only={} contains-only={}",
        exact + prefix + contains,
        prefix + contains,
        contains
    );
    Ok(())
}

fn extract_constant(content: &str, name: &str) -> Result<u32> {
    // Look for "pub const NAME: u32 = 100;"
    let needle = format!("pub const {}:", name);
    for line in content.lines() {
        if let Some(rest) = line.trim().strip_prefix(&needle) {
            if let Some(value) = rest.split('=').nth(1) {
                let value = value.trim().trim_end_matches(';').trim();
                return value
                    .parse::<u32>()
                    .with_context(|| format!("{} has a non-integer value '{}'", name, value));
            }
        }
    }
    bail!("{} not found in scoring constants", name)
}
