use t3ss_scan::translation::{translate_fasta, TranslateOptions};
use anyhow::Result;
use std::path::PathBuf;

pub fn run(
    input_fasta: PathBuf,
    output_fasta: PathBuf,
    keep_partial: bool,
    keep_ids: bool,
) -> Result<()> {
    let options = TranslateOptions {
        require_complete_codons: !keep_partial,
        rename: !keep_ids,
    };

    let report = translate_fasta(&input_fasta, &output_fasta, options)?;
    if !report.skipped.is_empty() {
        eprintln!("Skipped {} record(s)", report.skipped.len());
    }
    println!("Translated sequences written to {}", output_fasta.display());
    Ok(())
}
