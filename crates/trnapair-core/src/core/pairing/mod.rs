//! # Pairing Module
//!
//! Nucleotide pairing rules between codons and tRNA anticodons.
//!
//! - [`rules`] - Constant lookup tables, one per pairing rule
//! - [`predicates`] - Position-aware checks over whole triplets
//! - [`category`] - The three relationship categories a pair can fall into
//!
//! Codon and anticodon pair antiparallel: codon position 1 faces anticodon
//! position 3 and codon position 3 faces the anticodon wobble position 1.

pub mod category;
pub mod predicates;
pub mod rules;
