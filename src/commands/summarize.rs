use t3ss_scan::config::Config;
use t3ss_scan::summary::{summarize_tblout, write_summary};
use anyhow::Result;
use log::info;
use std::path::PathBuf;

pub fn run(hmmer_tblout: PathBuf, output_file: Option<PathBuf>, evalue: Option<f64>) -> Result<()> {
    let threshold = evalue.unwrap_or_else(|| Config::load().evalue_threshold);

    info!("Parsing HMMER tblout file: {}", hmmer_tblout.display());
    let records = summarize_tblout(&hmmer_tblout, threshold)?;
    write_summary(&records, output_file.as_deref())?;

    if let Some(path) = output_file {
        println!("Results written to {}", path.display());
    }
    Ok(())
}
