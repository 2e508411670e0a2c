use trnapair::core::models::schema::DEFAULT_ABUNDANCE_COLUMN;
use trnapair::engine::config::DEFAULT_TOTAL_TRNA;

pub struct DefaultsConfig {
    pub abundance_column: String,
    pub total_trna: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            abundance_column: DEFAULT_ABUNDANCE_COLUMN.to_string(),
            total_trna: DEFAULT_TOTAL_TRNA,
        }
    }
}
