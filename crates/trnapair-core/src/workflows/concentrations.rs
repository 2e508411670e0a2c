use super::classify::ClassificationResult;
use crate::core::models::codon::CodonSet;
use crate::core::models::table::DataTable;
use crate::core::models::trna::TrnaSet;
use crate::engine::aggregator::{ConcentrationTable, aggregate, read_abundances};
use crate::engine::classifier::classify;
use crate::engine::config::AggregationConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct ConcentrationResult {
    pub classification: ClassificationResult,
    pub concentrations: ConcentrationTable,
}

/// Classifies every pair and derives per-codon tRNA concentrations.
///
/// The abundance column is validated together with the table schemas, so a
/// bad abundance column is reported without running the classification.
#[instrument(skip_all, name = "concentrations_workflow")]
pub fn run(
    codon_table: &DataTable,
    trna_table: &DataTable,
    config: &AggregationConfig,
    reporter: &ProgressReporter,
) -> Result<ConcentrationResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Validating inputs",
    });
    let trnas = TrnaSet::from_table(trna_table)?;
    let codons = CodonSet::from_table(codon_table)?;
    read_abundances(&trnas, config)?;
    reporter.report(Progress::PhaseFinish);

    let matrices = classify(&codons, &trnas, reporter)?;

    reporter.report(Progress::PhaseStart {
        name: "Aggregating concentrations",
    });
    reporter.report(Progress::Message(format!(
        "Using abundance column \"{}\"",
        config.abundance_column
    )));
    let concentrations = aggregate(&matrices, &codons, &trnas, config)?;
    reporter.report(Progress::PhaseFinish);
    info!(
        conversion_factor = concentrations.conversion_factor(),
        "Concentration workflow complete."
    );

    Ok(ConcentrationResult {
        classification: ClassificationResult {
            codons,
            trnas,
            matrices,
        },
        concentrations,
    })
}
