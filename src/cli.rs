use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Find candidate T3SS proteins with hmmscan", long_about = None)]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate nucleotide FASTA into protein FASTA
    Translate {
        /// Nucleotide FASTA (optionally compressed)
        input_fasta: PathBuf,
        /// Output protein FASTA
        output_fasta: PathBuf,
        /// Translate records whose length is not a multiple of 3
        #[arg(long)]
        keep_partial: bool,
        /// Keep original record ids and descriptions
        #[arg(long)]
        keep_ids: bool,
    },

    /// Run hmmscan on a protein FASTA against an HMM database
    Scan {
        /// Protein FASTA file
        protein_fasta: PathBuf,
        /// HMM database (pressed with hmmpress)
        hmm_db: PathBuf,
        /// Tabular output file (--tblout)
        output_file: PathBuf,
        /// hmmscan executable (default: from config, else "hmmscan")
        #[arg(long)]
        hmmscan: Option<String>,
    },

    /// Summarize the best hit per query from an hmmscan --tblout file
    Summarize {
        /// hmmscan --tblout file
        hmmer_tblout: PathBuf,
        /// Output TSV; rows go to stdout when omitted
        output_file: Option<PathBuf>,
        /// Maximum E-value of a reported best hit (default: from config, else 1e-5)
        #[arg(long)]
        evalue: Option<f64>,
    },

    /// Translate, scan and summarize in one run
    Pipeline {
        /// Nucleotide FASTA (optionally compressed)
        nucleotide_fasta: PathBuf,
        /// HMM database (pressed with hmmpress)
        hmm_db: PathBuf,
        /// Prefix for {prefix}_translated.faa, {prefix}_hmmscan.tbl and {prefix}_summary.tsv
        output_prefix: String,
        /// Maximum E-value of a reported best hit (default: from config, else 1e-5)
        #[arg(long)]
        evalue: Option<f64>,
        /// hmmscan executable (default: from config, else "hmmscan")
        #[arg(long)]
        hmmscan: Option<String>,
        /// Skip records whose length is not a multiple of 3
        #[arg(long)]
        strict_length: bool,
    },
}
