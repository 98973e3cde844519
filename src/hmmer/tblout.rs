//! Reader for HMMER3 per-sequence tabular output (`--tblout`).
//!
//! Each data line carries 18 whitespace-delimited fields followed by a free
//! text description. For `hmmscan` the target column names the profile and
//! the query column names the searched sequence.

use crate::error::PipelineError;
use crate::types::{Hit, QueryResult};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const FIXED_COLUMNS: usize = 18;

/// One parsed table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TbloutRow {
    pub query_name: String,
    pub hit: Hit,
}

fn optional(field: &str) -> Option<String> {
    if field == "-" {
        None
    } else {
        Some(field.to_string())
    }
}

fn parse_number(field: &str, column: &str, line: usize) -> Result<f64, PipelineError> {
    field.parse::<f64>().map_err(|_| PipelineError::MalformedTable {
        line,
        reason: format!("{} '{}' is not a number", column, field),
    })
}

/// Parses one non-comment line. `line_no` is 1-based and used in errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<TbloutRow, PipelineError> {
    let mut fields = line.split_whitespace();
    let mut columns = Vec::with_capacity(FIXED_COLUMNS);
    for _ in 0..FIXED_COLUMNS {
        match fields.next() {
            Some(field) => columns.push(field),
            None => {
                return Err(PipelineError::MalformedTable {
                    line: line_no,
                    reason: format!(
                        "expected at least {} columns, found {}",
                        FIXED_COLUMNS,
                        columns.len()
                    ),
                })
            }
        }
    }
    let description = fields.collect::<Vec<_>>().join(" ");

    let hit = Hit {
        id: columns[0].to_string(),
        accession: optional(columns[1]),
        evalue: parse_number(columns[4], "E-value", line_no)?,
        bit_score: parse_number(columns[5], "score", line_no)?,
        bias: parse_number(columns[6], "bias", line_no)?,
        description: if description.is_empty() || description == "-" {
            None
        } else {
            Some(description)
        },
    };

    Ok(TbloutRow {
        query_name: columns[2].to_string(),
        hit,
    })
}

pub struct TbloutReader<R: BufRead> {
    reader: R,
}

impl TbloutReader<BufReader<File>> {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open tblout file {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TbloutReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// All data rows in file order.
    pub fn rows(self) -> Result<Vec<TbloutRow>> {
        let mut rows = Vec::new();
        for (i, line) in self.reader.lines().enumerate() {
            let line = line.context("Failed to read tblout line")?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            rows.push(parse_line(trimmed, i + 1)?);
        }
        Ok(rows)
    }

    /// Groups consecutive rows that share a query name.
    pub fn query_results(self) -> Result<Vec<QueryResult>> {
        let mut results: Vec<QueryResult> = Vec::new();
        for row in self.rows()? {
            match results.last_mut() {
                Some(current) if current.id == row.query_name => current.hits.push(row.hit),
                _ => results.push(QueryResult {
                    id: row.query_name,
                    hits: vec![row.hit],
                }),
            }
        }
        Ok(results)
    }
}
