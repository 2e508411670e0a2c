use crate::core::models::codon::CodonSet;
use crate::core::models::table::DataTable;
use crate::core::models::trna::TrnaSet;
use crate::core::pairing::category::PairingCategory;
use crate::engine::classifier::classify;
use crate::engine::error::EngineError;
use crate::engine::matrices::PairingMatrices;
use crate::engine::progress::{Progress, ProgressReporter};
use serde::Serialize;
use tracing::{info, instrument};

/// One classified pair in long form, as it would be drawn on a
/// codon × anticodon scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairRecord {
    pub category: &'static str,
    #[serde(rename = "trna.row")]
    pub trna_row: usize,
    #[serde(rename = "codon.col")]
    pub codon_column: usize,
    pub anticodon: String,
    #[serde(rename = "trna.three.letter")]
    pub trna_amino_acid: String,
    pub codon: String,
    #[serde(rename = "codon.three.letter")]
    pub codon_amino_acid: String,
}

/// A category matrix rendered as a labelled grid: anticodons down, codons across.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGrid {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct ClassificationResult {
    pub codons: CodonSet,
    pub trnas: TrnaSet,
    pub matrices: PairingMatrices,
}

impl ClassificationResult {
    /// Classified pairs in row-major order; rows and columns are 1-based.
    pub fn pair_records(&self) -> Vec<PairRecord> {
        self.matrices
            .pairs()
            .into_iter()
            .filter_map(|pair| {
                let trna = self.trnas.get(pair.trna)?;
                let codon = self.codons.get(pair.codon)?;
                Some(PairRecord {
                    category: pair.category.label(),
                    trna_row: pair.row + 1,
                    codon_column: pair.column + 1,
                    anticodon: trna.anticodon.to_string(),
                    trna_amino_acid: trna
                        .amino_acid
                        .as_ref()
                        .map(|aa| aa.to_string())
                        .unwrap_or_default(),
                    codon: codon.triplet.to_string(),
                    codon_amino_acid: codon
                        .amino_acid
                        .as_ref()
                        .map(|aa| aa.to_string())
                        .unwrap_or_default(),
                })
            })
            .collect()
    }

    pub fn matrix_grid(&self, category: PairingCategory) -> MatrixGrid {
        let matrix = self.matrices.matrix(category);
        let header = std::iter::once("anticodon".to_string())
            .chain(self.codons.iter().map(|(_, c)| c.triplet.to_string()))
            .collect();
        let rows = self
            .trnas
            .iter()
            .enumerate()
            .map(|(r, (_, trna))| {
                std::iter::once(trna.anticodon.to_string())
                    .chain((0..self.codons.len()).map(|c| {
                        let flag = if matrix.is_set(r, c) { "1" } else { "0" };
                        flag.to_string()
                    }))
                    .collect()
            })
            .collect();
        MatrixGrid { header, rows }
    }
}

/// Builds codon and tRNA sets from raw tables and classifies every pair.
///
/// The tRNA table is validated before the codon table, and both before any
/// pair is evaluated.
#[instrument(skip_all, name = "classify_workflow")]
pub fn run(
    codon_table: &DataTable,
    trna_table: &DataTable,
    reporter: &ProgressReporter,
) -> Result<ClassificationResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Validating inputs",
    });
    let trnas = TrnaSet::from_table(trna_table)?;
    let codons = CodonSet::from_table(codon_table)?;
    reporter.report(Progress::PhaseFinish);
    info!(
        trnas = trnas.len(),
        codons = codons.len(),
        "Input tables validated."
    );

    let matrices = classify(&codons, &trnas, reporter)?;
    Ok(ClassificationResult {
        codons,
        trnas,
        matrices,
    })
}
