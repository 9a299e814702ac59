use anyhow::{bail, Context, Result};
use clap::Parser;
use lexchunk_pipeline::{process, ProcessOptions};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Bounds enforced at the boundary; the core itself never range-checks.
const MIN_TEXT_CHARS: usize = 100;
const TARGET_SIZE_RANGE: std::ops::RangeInclusive<usize> = 20..=200;
const OVERLAP_RANGE: std::ops::RangeInclusive<usize> = 0..=50;

#[derive(Parser)]
#[command(name = "lexchunk")]
#[command(about = "Semantic chunking for French legal documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Input text file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Target chunk size in words (20-200)
    #[arg(long, default_value_t = 60)]
    target_size: usize,

    /// Overlap between adjacent chunks in words (0-50)
    #[arg(long, default_value_t = 15)]
    overlap: usize,

    /// Opaque user identifier attached to every chunk
    #[arg(long)]
    user_id: Option<String>,

    /// Opaque project identifier attached to every chunk
    #[arg(long)]
    project_id: Option<String>,

    /// Attach the document metadata record to every chunk
    #[arg(long)]
    enrich: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging (stdout is reserved for JSON)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(if cli.verbose {
        "debug"
    } else {
        "warn"
    }))
    .target(env_logger::Target::Stderr)
    .init();

    let text = read_input(cli.input.as_deref())?;
    validate_request(&text, cli.target_size, cli.overlap)?;

    let options = ProcessOptions {
        target_size: cli.target_size,
        overlap: cli.overlap,
        user_id: cli.user_id,
        project_id: cli.project_id,
        enrich_with_metadata: cli.enrich,
    };

    let result = process(&text, &options)?;
    log::info!(
        "processed {} chars into {} chunks",
        text.len(),
        result.chunks.len()
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn validate_request(text: &str, target_size: usize, overlap: usize) -> Result<()> {
    if text.trim().is_empty() {
        bail!("input text is required and cannot be empty");
    }
    if text.trim().chars().count() < MIN_TEXT_CHARS {
        bail!("input text must contain at least {MIN_TEXT_CHARS} characters");
    }
    if !TARGET_SIZE_RANGE.contains(&target_size) {
        bail!(
            "target_size must be between {} and {} words",
            TARGET_SIZE_RANGE.start(),
            TARGET_SIZE_RANGE.end()
        );
    }
    if !OVERLAP_RANGE.contains(&overlap) {
        bail!(
            "overlap must be between {} and {} words",
            OVERLAP_RANGE.start(),
            OVERLAP_RANGE.end()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_valid_request() {
        let text = "x".repeat(150);
        assert!(validate_request(&text, 60, 15).is_ok());
    }

    #[test]
    fn rejects_short_or_empty_text() {
        assert!(validate_request("", 60, 15).is_err());
        assert!(validate_request("trop court", 60, 15).is_err());
    }

    #[test]
    fn rejects_out_of_range_options() {
        let text = "x".repeat(150);
        assert!(validate_request(&text, 19, 15).is_err());
        assert!(validate_request(&text, 201, 15).is_err());
        assert!(validate_request(&text, 60, 51).is_err());
    }
}
