use crate::error::{require_input, PipelineError};
use crate::utils::external_tools::is_tool_available;
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

pub const DEFAULT_HMMSCAN: &str = "hmmscan";

/// External profile-search program that writes a per-sequence hit table.
pub trait ProfileScanner {
    fn name(&self) -> &str;

    fn is_available(&self) -> bool;

    /// Runs the search to completion and reports how the program exited.
    fn invoke(&self, db: &Path, query: &Path, out: &Path) -> Result<ExitStatus>;
}

pub struct Hmmscan {
    executable: String,
}

impl Hmmscan {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    fn command(&self, db: &Path, query: &Path, out: &Path) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.arg("--tblout").arg(out).arg(db).arg(query);
        cmd
    }
}

impl Default for Hmmscan {
    fn default() -> Self {
        Self::new(DEFAULT_HMMSCAN)
    }
}

impl ProfileScanner for Hmmscan {
    fn name(&self) -> &str {
        &self.executable
    }

    fn is_available(&self) -> bool {
        is_tool_available(&self.executable, "-h")
    }

    fn invoke(&self, db: &Path, query: &Path, out: &Path) -> Result<ExitStatus> {
        let mut cmd = self.command(db, query, out);
        info!("Running command: {:?}", cmd);

        // The alignment report on stdout duplicates the table; only the table is kept.
        cmd.stdout(Stdio::null())
            .status()
            .with_context(|| format!("Failed to run {}", self.executable))
    }
}

/// Fails with `MissingDependency` unless the scanner can be run.
pub fn ensure_available(scanner: &dyn ProfileScanner) -> Result<(), PipelineError> {
    if scanner.is_available() {
        Ok(())
    } else {
        Err(PipelineError::MissingDependency {
            tool: scanner.name().to_string(),
        })
    }
}

/// Scans `query` against `db`, leaving the hit table at `out`.
pub fn run_scan(
    scanner: &dyn ProfileScanner,
    query: &Path,
    db: &Path,
    out: &Path,
) -> Result<()> {
    require_input("Protein FASTA file", query)?;
    require_input("HMM database file", db)?;
    ensure_available(scanner)?;

    let progress = ProgressBarBuilder::new(format!("Running {}...", scanner.name()))
        .with_tick()
        .build()?;
    let status = scanner.invoke(db, query, out);
    progress.finish_and_clear();

    let status = status?;
    if !status.success() {
        return Err(PipelineError::ScanFailed {
            tool: scanner.name().to_string(),
            status,
        }
        .into());
    }
    if !out.exists() {
        return Err(PipelineError::MissingScanOutput {
            tool: scanner.name().to_string(),
            path: out.to_path_buf(),
        }
        .into());
    }

    println!(
        "{} completed successfully. Results written to {}",
        scanner.name(),
        out.display()
    );
    Ok(())
}
