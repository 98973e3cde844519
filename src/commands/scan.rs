use t3ss_scan::config::Config;
use t3ss_scan::hmmer::{run_scan, Hmmscan};
use anyhow::Result;
use std::path::PathBuf;

pub fn run(
    protein_fasta: PathBuf,
    hmm_db: PathBuf,
    output_file: PathBuf,
    hmmscan: Option<String>,
) -> Result<()> {
    let executable = hmmscan.unwrap_or_else(|| Config::load().hmmscan);
    let scanner = Hmmscan::new(executable);
    run_scan(&scanner, &protein_fasta, &hmm_db, &output_file)
}
