pub mod cli;
pub mod config;
pub mod error;
pub mod hmmer;
pub mod pipeline;
pub mod summary;
pub mod translation;
pub mod types;
pub mod utils;

pub use error::PipelineError;
pub use pipeline::{run_pipeline, PipelineOptions, PipelinePaths};
