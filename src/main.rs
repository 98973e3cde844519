mod commands;

use clap::error::ErrorKind;
use clap::Parser;
use t3ss_scan::cli;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            e.print().ok();
            std::process::exit(1);
        }
    };
    init_logging(args.verbose);

    let result = match args.command {
        cli::Commands::Translate {
            input_fasta,
            output_fasta,
            keep_partial,
            keep_ids,
        } => commands::translate::run(input_fasta, output_fasta, keep_partial, keep_ids),
        cli::Commands::Scan {
            protein_fasta,
            hmm_db,
            output_file,
            hmmscan,
        } => commands::scan::run(protein_fasta, hmm_db, output_file, hmmscan),
        cli::Commands::Summarize {
            hmmer_tblout,
            output_file,
            evalue,
        } => commands::summarize::run(hmmer_tblout, output_file, evalue),
        cli::Commands::Pipeline {
            nucleotide_fasta,
            hmm_db,
            output_prefix,
            evalue,
            hmmscan,
            strict_length,
        } => commands::pipeline::run(
            nucleotide_fasta,
            hmm_db,
            output_prefix,
            evalue,
            hmmscan,
            strict_length,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
