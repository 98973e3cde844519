use crate::error::require_input;
use crate::hmmer::scanner::{ensure_available, run_scan, ProfileScanner};
use crate::summary::{summarize_tblout, validate_threshold, write_summary};
use crate::translation::{translate_fasta, TranslateOptions, TranslationReport};
use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

/// Intermediate and final files derived from an output prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePaths {
    pub translated: PathBuf,
    pub tblout: PathBuf,
    pub summary: PathBuf,
}

impl PipelinePaths {
    pub fn from_prefix(prefix: &str) -> Self {
        Self {
            translated: PathBuf::from(format!("{}_translated.faa", prefix)),
            tblout: PathBuf::from(format!("{}_hmmscan.tbl", prefix)),
            summary: PathBuf::from(format!("{}_summary.tsv", prefix)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub translate: TranslateOptions,
    pub evalue_threshold: f64,
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub paths: PipelinePaths,
    pub translation: TranslationReport,
    pub summary_records: usize,
}

/// Translate, scan and summarize `input_fasta` against `hmm_db`.
pub fn run_pipeline(
    scanner: &dyn ProfileScanner,
    input_fasta: &Path,
    hmm_db: &Path,
    prefix: &str,
    options: PipelineOptions,
) -> Result<PipelineOutcome> {
    require_input("Input FASTA file", input_fasta)?;
    require_input("HMM database file", hmm_db)?;
    validate_threshold(options.evalue_threshold)?;

    info!("Checking dependencies...");
    ensure_available(scanner)?;
    info!("{} found.", scanner.name());

    let paths = PipelinePaths::from_prefix(prefix);

    println!("\n=== Step 1: Translate FASTA ===");
    let translation = translate_fasta(input_fasta, &paths.translated, options.translate)
        .context("Translation step failed")?;
    println!(
        "Translated sequences written to {}",
        paths.translated.display()
    );

    println!("\n=== Step 2: HMMER search ===");
    run_scan(scanner, &paths.translated, hmm_db, &paths.tblout).context("HMMER search failed")?;

    println!("\n=== Step 3: Parse HMMER results ===");
    let records = summarize_tblout(&paths.tblout, options.evalue_threshold)
        .context("Parsing HMMER results failed")?;
    write_summary(&records, Some(paths.summary.as_path()))?;
    println!("Summary written to {}", paths.summary.display());

    println!("\nPipeline complete.");
    println!("Results summary: {}", paths.summary.display());

    Ok(PipelineOutcome {
        paths,
        translation,
        summary_records: records.len(),
    })
}
