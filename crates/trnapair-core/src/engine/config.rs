use crate::core::models::schema::DEFAULT_ABUNDANCE_COLUMN;
use thiserror::Error;

/// Size of the total tRNA pool, in micromolar, used when none is configured.
pub const DEFAULT_TOTAL_TRNA: f64 = 190.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregationConfig {
    /// Name of the tRNA table column holding relative abundances.
    pub abundance_column: String,
    /// Total tRNA pool the relative abundances are scaled to.
    pub total_trna: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            abundance_column: DEFAULT_ABUNDANCE_COLUMN.to_string(),
            total_trna: DEFAULT_TOTAL_TRNA,
        }
    }
}

#[derive(Default)]
pub struct AggregationConfigBuilder {
    abundance_column: Option<String>,
    total_trna: Option<f64>,
}

impl AggregationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abundance_column(mut self, column: impl Into<String>) -> Self {
        self.abundance_column = Some(column.into());
        self
    }
    pub fn total_trna(mut self, total: f64) -> Self {
        self.total_trna = Some(total);
        self
    }

    pub fn build(self) -> Result<AggregationConfig, ConfigError> {
        let abundance_column = self
            .abundance_column
            .ok_or(ConfigError::MissingParameter("abundance_column"))?;
        if abundance_column.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "abundance_column",
                reason: "column name cannot be empty".to_string(),
            });
        }

        let total_trna = self
            .total_trna
            .ok_or(ConfigError::MissingParameter("total_trna"))?;
        if !total_trna.is_finite() || total_trna <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "total_trna",
                reason: format!("expected a finite, positive number, got {}", total_trna),
            });
        }

        Ok(AggregationConfig {
            abundance_column,
            total_trna,
        })
    }
}
