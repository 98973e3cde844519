use crate::error::{require_input, PipelineError};
use crate::hmmer::TbloutReader;
use crate::types::{Hit, QueryResult, SummaryRecord};
use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const DEFAULT_EVALUE_THRESHOLD: f64 = 1e-5;

pub fn validate_threshold(threshold: f64) -> Result<f64, PipelineError> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(threshold)
    } else {
        Err(PipelineError::InvalidThreshold(threshold))
    }
}

/// Lower E-value first, then higher bit score, then smaller subject id.
fn rank(a: &Hit, b: &Hit) -> Ordering {
    a.evalue
        .total_cmp(&b.evalue)
        .then_with(|| b.bit_score.total_cmp(&a.bit_score))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn best_hit(hits: &[Hit]) -> Option<&Hit> {
    hits.iter().min_by(|a, b| rank(a, b))
}

/// One record per query whose best hit passes `threshold`, in input order.
pub fn summarize(results: &[QueryResult], threshold: f64) -> Vec<SummaryRecord> {
    results
        .iter()
        .filter_map(|query| {
            let best = best_hit(&query.hits)?;
            (best.evalue <= threshold).then(|| SummaryRecord {
                query_id: query.id.clone(),
                best_hit_id: best.id.clone(),
                evalue: best.evalue,
                bit_score: best.bit_score,
            })
        })
        .collect()
}

pub fn summarize_tblout(tbl_file: &Path, threshold: f64) -> Result<Vec<SummaryRecord>> {
    require_input("HMMER tblout file", tbl_file)?;
    let threshold = validate_threshold(threshold)?;
    let results = TbloutReader::from_path(tbl_file)?.query_results()?;
    Ok(summarize(&results, threshold))
}

pub fn write_rows<W: Write>(writer: &mut W, records: &[SummaryRecord]) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}", record.format_row())?;
    }
    Ok(())
}

pub fn write_table<W: Write>(writer: &mut W, records: &[SummaryRecord]) -> io::Result<()> {
    writeln!(writer, "{}", SummaryRecord::HEADER)?;
    write_rows(writer, records)
}

/// Writes the summary table to `output`, or its rows to stdout when no path is given.
pub fn write_summary(records: &[SummaryRecord], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create summary file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_table(&mut writer, records).context("Failed to write summary")?;
            writer.flush().context("Failed to write summary")?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_rows(&mut handle, records).context("Failed to write summary")?;
        }
    }
    Ok(())
}
