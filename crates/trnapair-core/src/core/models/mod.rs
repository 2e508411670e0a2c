//! # Core Models Module
//!
//! Data structures describing the inputs of a pairing analysis: codons, tRNA
//! anticodons, their amino-acid labels and the column-oriented tables they are
//! read from.
//!
//! ## Key Components
//!
//! - [`table`] - Generic header-addressed table of string fields
//! - [`schema`] - Required column names and schema validation errors
//! - [`sequence`] - Validated three-symbol codons/anticodons and codon positions
//! - [`amino_acid`] - Amino-acid labels compared during wobble classification
//! - [`codon`] / [`trna`] - Keyed, order-preserving sets built from tables
//! - [`ids`] - Stable identifiers for codon and tRNA rows
//!
//! ## Usage
//!
//! ```ignore
//! use trnapair::core::models::{codon::CodonSet, trna::TrnaSet};
//!
//! let codons = CodonSet::from_table(&codon_table)?;
//! let trnas = TrnaSet::from_table(&trna_table)?;
//! ```

pub mod amino_acid;
pub mod codon;
pub mod ids;
pub mod schema;
pub mod sequence;
pub mod table;
pub mod trna;
