pub mod pipeline;
pub mod scan;
pub mod summarize;
pub mod translate;
