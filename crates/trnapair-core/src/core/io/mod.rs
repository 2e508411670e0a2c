//! Provides input/output functionality for the tabular files a pairing
//! analysis reads and writes.
//!
//! Codon and tRNA tables are plain delimited text with a header row; results
//! are written back in the same format.

pub mod delimited;
pub mod traits;
