pub mod genetic_code;

use crate::error::require_input;
use anyhow::{Context, Result};
use bio::io::fasta;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub const TRANSLATED_SUFFIX: &str = "_translated";
pub const TRANSLATED_DESCRIPTION: &str = "translated from nucleotide sequence";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Skip records whose length is not a multiple of three.
    pub require_complete_codons: bool,
    /// Suffix ids with `_translated` and replace the description.
    pub rename: bool,
}

impl TranslateOptions {
    pub fn standalone() -> Self {
        Self {
            require_complete_codons: true,
            rename: true,
        }
    }

    pub fn pipeline() -> Self {
        Self {
            require_complete_codons: false,
            rename: false,
        }
    }
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self::standalone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    IncompleteCodon { len: usize },
    Untranslatable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub id: String,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct TranslationReport {
    pub written: usize,
    pub skipped: Vec<SkippedRecord>,
}

fn open_fasta(path: &Path) -> Result<fasta::Reader<BufReader<Box<dyn Read>>>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    // niffler needs a five byte magic number to sniff
    if file.metadata()?.len() < 5 {
        return Ok(fasta::Reader::new(Box::new(file) as Box<dyn Read>));
    }
    let (inner_reader, compression) = niffler::get_reader(Box::new(file))
        .with_context(|| format!("Failed to detect compression of {}", path.display()))?;
    debug!("Reading {} ({:?})", path.display(), compression);
    Ok(fasta::Reader::new(inner_reader))
}

/// Translates one nucleotide record, or explains why it was skipped.
pub fn translate_record(
    record: &fasta::Record,
    options: TranslateOptions,
) -> std::result::Result<fasta::Record, SkipReason> {
    let len = record.seq().len();
    if len % 3 != 0 {
        if options.require_complete_codons {
            return Err(SkipReason::IncompleteCodon { len });
        }
        debug!(
            "{}: ignoring {} trailing base(s) of a partial codon",
            record.id(),
            len % 3
        );
    }

    let protein = genetic_code::translate(record.seq())
        .map_err(|e| SkipReason::Untranslatable(e.to_string()))?;

    let translated = if options.rename {
        fasta::Record::with_attrs(
            &format!("{}{}", record.id(), TRANSLATED_SUFFIX),
            Some(TRANSLATED_DESCRIPTION),
            &protein,
        )
    } else {
        fasta::Record::with_attrs(record.id(), record.desc(), &protein)
    };
    Ok(translated)
}

/// Translates every record of `input` into `output`. Records that cannot be
/// translated are skipped with one warning each.
pub fn translate_fasta(
    input: &Path,
    output: &Path,
    options: TranslateOptions,
) -> Result<TranslationReport> {
    require_input("Input FASTA file", input)?;

    let reader = open_fasta(input)?;
    let out = File::create(output)
        .with_context(|| format!("Failed to create output file {}", output.display()))?;
    let mut writer = fasta::Writer::new(out);
    let mut report = TranslationReport::default();

    for record in reader.records() {
        let record = record.with_context(|| format!("Failed to read {}", input.display()))?;
        match translate_record(&record, options) {
            Ok(translated) => {
                writer
                    .write_record(&translated)
                    .context("Failed to write translated record")?;
                report.written += 1;
            }
            Err(reason) => {
                match &reason {
                    SkipReason::IncompleteCodon { len } => eprintln!(
                        "Warning: Sequence {} length {} is not a multiple of 3, skipping translation.",
                        record.id(),
                        len
                    ),
                    SkipReason::Untranslatable(msg) => {
                        eprintln!("Error translating sequence {}: {}", record.id(), msg)
                    }
                }
                report.skipped.push(SkippedRecord {
                    id: record.id().to_string(),
                    reason,
                });
            }
        }
    }

    writer.flush().context("Failed to flush translated FASTA")?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, seq: &[u8]) -> fasta::Record {
        fasta::Record::with_attrs(id, Some("contig from assembly"), seq)
    }

    #[test]
    fn reads_file_too_short_to_sniff() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tiny.fna");
        let output = dir.path().join("tiny.faa");
        std::fs::write(&input, ">a\n").unwrap();

        let report = translate_fasta(&input, &output, TranslateOptions::standalone()).unwrap();

        assert_eq!(report.written, 1);
        assert!(report.skipped.is_empty());
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.starts_with(">a_translated"));
    }

    #[test]
    fn standalone_renames_records() {
        let out = translate_record(&record("seq1", b"ATGAAATAA"), TranslateOptions::standalone())
            .unwrap();
        assert_eq!(out.id(), "seq1_translated");
        assert_eq!(out.desc(), Some(TRANSLATED_DESCRIPTION));
        assert_eq!(out.seq(), b"MK*");
    }

    #[test]
    fn standalone_rejects_partial_codons() {
        let err = translate_record(&record("seq1", b"ATGAA"), TranslateOptions::standalone())
            .unwrap_err();
        assert_eq!(err, SkipReason::IncompleteCodon { len: 5 });
    }

    #[test]
    fn pipeline_keeps_identity_and_translates_partial_codons() {
        let out =
            translate_record(&record("seq1", b"ATGAA"), TranslateOptions::pipeline()).unwrap();
        assert_eq!(out.id(), "seq1");
        assert_eq!(out.desc(), Some("contig from assembly"));
        assert_eq!(out.seq(), b"M");
    }

    #[test]
    fn invalid_symbols_are_untranslatable_in_both_modes() {
        for options in [TranslateOptions::standalone(), TranslateOptions::pipeline()] {
            let err = translate_record(&record("bad", b"ATG!!!"), options).unwrap_err();
            assert!(matches!(err, SkipReason::Untranslatable(_)));
        }
    }
}
