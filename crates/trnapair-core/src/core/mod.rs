//! # Core Module
//!
//! Stateless building blocks of a codon/anticodon pairing analysis.
//!
//! - **Input Representation** ([`models`]) - Tables, triplets, amino-acid labels and keyed codon/tRNA sets
//! - **Pairing Rules** ([`pairing`]) - Watson-Crick and wobble lookup tables and the predicates built on them
//! - **File I/O** ([`io`]) - Reading and writing delimited text tables
//!
//! Nothing in this module holds state between calls; the classification and
//! aggregation passes live in [`crate::engine`].

pub mod io;
pub mod models;
pub mod pairing;
