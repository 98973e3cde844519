pub mod scanner;
pub mod tblout;

pub use scanner::{run_scan, Hmmscan, ProfileScanner};
pub use tblout::TbloutReader;
