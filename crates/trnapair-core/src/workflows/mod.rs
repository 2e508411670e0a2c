//! # Workflows Module
//!
//! Top-level entry points that take raw codon and tRNA tables and run a
//! complete analysis: schema validation, classification and, where asked for,
//! concentration aggregation.
//!
//! - **Classification Workflow** ([`classify`]) - Category matrices plus pair and grid exports
//! - **Concentration Workflow** ([`concentrations`]) - Classification followed by per-codon concentrations

pub mod classify;
pub mod concentrations;
