//! Standard genetic code (NCBI translation table 1) on top of `nucs`.
//!
//! Stops are emitted as `*` and translation continues past them. Ambiguous
//! codons resolve to their residue when every expansion agrees and to `X`
//! otherwise.

use nucs::{AmbiAmino, AmbiDna, DnaSlice, NCBI1};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationError {
    pub position: usize,
    pub codon: String,
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "codon '{}' at position {} is not valid nucleotide sequence",
            self.codon, self.position
        )
    }
}

impl std::error::Error for TranslationError {}

// nucs reads upper case IUPAC DNA; RNA input is read as DNA.
fn normalize(seq: &[u8]) -> String {
    seq.iter()
        .map(|&b| match b.to_ascii_uppercase() {
            b'U' => 'T',
            other => other as char,
        })
        .collect()
}

fn parse(seq: &[u8]) -> Option<AmbiDna> {
    normalize(seq).parse::<AmbiDna>().ok()
}

fn residue(amino: AmbiAmino) -> u8 {
    let mut choices = amino.iter();
    match (choices.next(), choices.next()) {
        (Some(only), None) => only.to_string().bytes().next().unwrap_or(b'X'),
        _ => b'X',
    }
}

fn first_invalid_codon(seq: &[u8]) -> TranslationError {
    seq.chunks_exact(3)
        .enumerate()
        .find(|(_, codon)| parse(codon).is_none())
        .map(|(i, codon)| TranslationError {
            position: i * 3,
            codon: String::from_utf8_lossy(codon).into_owned(),
        })
        .unwrap_or_else(|| TranslationError {
            position: 0,
            codon: String::from_utf8_lossy(seq).into_owned(),
        })
}

/// Translates one codon, or `None` if it is not three nucleotide symbols.
pub fn translate_codon(codon: &[u8]) -> Option<u8> {
    if codon.len() != 3 {
        return None;
    }
    let dna = parse(codon)?;
    dna.0.translate(NCBI1).next().map(residue)
}

/// Translates `seq` codon by codon. A trailing partial codon is ignored.
pub fn translate(seq: &[u8]) -> Result<Vec<u8>, TranslationError> {
    let whole = seq.len() - seq.len() % 3;
    let seq = &seq[..whole];
    if seq.is_empty() {
        return Ok(Vec::new());
    }
    let dna = parse(seq).ok_or_else(|| first_invalid_codon(seq))?;
    Ok(dna.0.translate(NCBI1).map(residue).collect())
}
