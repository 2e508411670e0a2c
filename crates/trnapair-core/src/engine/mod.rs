//! # Engine Module
//!
//! The stateful part of a pairing analysis: building the category matrices
//! from codon and tRNA sets, and turning them into per-codon concentrations.
//!
//! - **Configuration** ([`config`]) - Aggregation parameters and their builder
//! - **Classification** ([`classifier`]) - The three ordered classification passes
//! - **Matrices** ([`matrices`]) - Mutually exclusive category matrices keyed by codon/tRNA ids
//! - **Aggregation** ([`aggregator`]) - Abundance-weighted concentration sums
//! - **Progress Monitoring** ([`progress`]) - Optional progress callbacks
//! - **Error Handling** ([`error`]) - Schema, invariant and aggregation failures

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod error;
pub mod matrices;
pub mod progress;
