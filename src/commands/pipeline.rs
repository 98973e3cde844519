use t3ss_scan::config::Config;
use t3ss_scan::hmmer::Hmmscan;
use t3ss_scan::pipeline::{run_pipeline, PipelineOptions};
use t3ss_scan::translation::TranslateOptions;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(
    nucleotide_fasta: PathBuf,
    hmm_db: PathBuf,
    output_prefix: String,
    evalue: Option<f64>,
    hmmscan: Option<String>,
    strict_length: bool,
) -> Result<()> {
    let config = Config::load();
    let scanner = Hmmscan::new(hmmscan.unwrap_or(config.hmmscan));
    let options = PipelineOptions {
        translate: TranslateOptions {
            require_complete_codons: strict_length,
            ..TranslateOptions::pipeline()
        },
        evalue_threshold: evalue.unwrap_or(config.evalue_threshold),
    };

    let outcome = run_pipeline(&scanner, &nucleotide_fasta, &hmm_db, &output_prefix, options)?;
    if !outcome.translation.skipped.is_empty() {
        eprintln!(
            "Skipped {} record(s) during translation",
            outcome.translation.skipped.len()
        );
    }
    Ok(())
}
