use super::config::ConfigError;
use crate::core::models::schema::SchemaError;
use crate::core::pairing::category::PairingCategory;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationInvariantError {
    #[error(
        "Multiple relationships detected for tRNA row {row} and codon column {column} ({assignments} categories assigned)"
    )]
    OverlappingAssignment {
        row: usize,
        column: usize,
        assignments: u16,
    },

    #[error("The {category} matrix has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        category: PairingCategory,
        expected: (usize, usize),
        found: (usize, usize),
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregationError {
    #[error("The tRNA table has no abundance column named \"{column}\"")]
    MissingAbundanceColumn { column: String },

    #[error("Invalid abundance '{value}' in column \"{column}\" at tRNA row {row}: expected a finite, non-negative number")]
    InvalidAbundance {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Abundances in column \"{column}\" sum to {total}; cannot derive a conversion factor")]
    InvalidTotal { column: String, total: f64 },

    #[error("Classification matrices do not match the supplied {what}")]
    MismatchedInputs { what: &'static str },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Classification invariant violated: {0}")]
    Invariant(#[from] ClassificationInvariantError),

    #[error("Concentration aggregation failed: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
