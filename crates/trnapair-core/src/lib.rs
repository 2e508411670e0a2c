//! # trnapair Core Library
//!
//! Classifies how tRNA anticodons read mRNA codons and derives how much tRNA
//! is available to each codon.
//!
//! Every (anticodon, codon) pair falls into at most one of three categories:
//! Watson-Crick cognate, wobble cognate or near-cognate. The rules follow
//! antiparallel base pairing, with modified nucleosides at the anticodon
//! wobble position mapped onto the bases they read like. Relative tRNA
//! abundances are then scaled to a fixed total pool and summed per codon and
//! category.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless input models (tables, triplets,
//!   amino-acid labels), the base-pairing lookup tables and delimited-file I/O.
//!
//! - **[`engine`]: The Logic Core.** The three-pass classifier, the mutually
//!   exclusive pairing matrices, the concentration aggregator, configuration
//!   and progress reporting.
//!
//! - **[`workflows`]: The Public API.** End-to-end runs starting from raw
//!   tables.

pub mod core;
pub mod engine;
pub mod workflows;
