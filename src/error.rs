use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{what} {} does not exist", path.display())]
    MissingInput { what: &'static str, path: PathBuf },

    #[error("{tool} not found. Please install HMMER (http://hmmer.org/) and ensure it's in your PATH")]
    MissingDependency { tool: String },

    #[error("{tool} failed ({status})")]
    ScanFailed { tool: String, status: ExitStatus },

    #[error("{tool} exited successfully but produced no output at {}", path.display())]
    MissingScanOutput { tool: String, path: PathBuf },

    #[error("malformed tblout line {line}: {reason}")]
    MalformedTable { line: usize, reason: String },

    #[error("invalid E-value threshold {0}: must be finite and non-negative")]
    InvalidThreshold(f64),
}

/// Fails with `MissingInput` unless `path` exists.
pub fn require_input(what: &'static str, path: &std::path::Path) -> Result<(), PipelineError> {
    if path.exists() {
        Ok(())
    } else {
        Err(PipelineError::MissingInput {
            what,
            path: path.to_path_buf(),
        })
    }
}
