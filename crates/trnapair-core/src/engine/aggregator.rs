use super::config::AggregationConfig;
use super::error::AggregationError;
use super::matrices::PairingMatrices;
use crate::core::models::codon::CodonSet;
use crate::core::models::ids::CodonId;
use crate::core::models::trna::TrnaSet;
use crate::core::pairing::category::PairingCategory;
use nalgebra::DVector;
use serde::Serialize;
use slotmap::SecondaryMap;
use tracing::{debug, info, instrument};

/// Concentrations of the tRNAs able to read one codon, per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConcentrationRecord {
    pub codon: String,
    #[serde(rename = "three.letter")]
    pub amino_acid: String,
    #[serde(rename = "WCcognate.conc")]
    pub watson_crick_cognate: f64,
    #[serde(rename = "wobblecognate.conc")]
    pub wobble_cognate: f64,
    #[serde(rename = "nearcognate.conc")]
    pub near_cognate: f64,
}

impl ConcentrationRecord {
    pub fn get(&self, category: PairingCategory) -> f64 {
        match category {
            PairingCategory::WatsonCrickCognate => self.watson_crick_cognate,
            PairingCategory::WobbleCognate => self.wobble_cognate,
            PairingCategory::NearCognate => self.near_cognate,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConcentrationTable {
    records: Vec<ConcentrationRecord>,
    index: SecondaryMap<CodonId, usize>,
    conversion_factor: f64,
}

impl ConcentrationTable {
    /// Records in codon input order.
    pub fn records(&self) -> &[ConcentrationRecord] {
        &self.records
    }

    pub fn get(&self, codon: CodonId) -> Option<&ConcentrationRecord> {
        self.index.get(codon).map(|&i| &self.records[i])
    }

    /// Factor that turned one unit of relative abundance into a molar
    /// concentration.
    pub fn conversion_factor(&self) -> f64 {
        self.conversion_factor
    }

    /// Summed concentration of one category across all codons.
    pub fn total(&self, category: PairingCategory) -> f64 {
        self.records.iter().map(|r| r.get(category)).sum()
    }
}

/// Reads and validates the abundance column, in tRNA input order.
pub fn read_abundances(
    trnas: &TrnaSet,
    config: &AggregationConfig,
) -> Result<Vec<f64>, AggregationError> {
    let column = &config.abundance_column;
    if !trnas.has_column(column) {
        return Err(AggregationError::MissingAbundanceColumn {
            column: column.clone(),
        });
    }

    trnas
        .iter()
        .map(|(id, trna)| {
            let raw = trnas.field(id, column).unwrap_or_default();
            match raw.parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
                _ => Err(AggregationError::InvalidAbundance {
                    column: column.clone(),
                    row: trna.row,
                    value: raw.to_string(),
                }),
            }
        })
        .collect()
}

/// Sums tRNA concentrations per codon and category.
///
/// Abundances are rescaled so that the whole tRNA pool equals
/// `config.total_trna` micromolar:
/// `conversion_factor = total_trna / sum(abundance) * 1e-6`.
/// Each codon then receives, per category, the summed converted abundance of
/// every tRNA classified into that category for it, or 0 if there is none.
///
/// # Errors
///
/// Fails before any concentration is computed if the abundance column is
/// missing, holds a non-numeric or negative value, sums to zero, or if the
/// matrices were not built from the given codon and tRNA sets.
#[instrument(skip_all, name = "aggregation")]
pub fn aggregate(
    matrices: &PairingMatrices,
    codons: &CodonSet,
    trnas: &TrnaSet,
    config: &AggregationConfig,
) -> Result<ConcentrationTable, AggregationError> {
    if matrices.trna_source() != trnas.token() {
        return Err(AggregationError::MismatchedInputs { what: "tRNA set" });
    }
    if matrices.codon_source() != codons.token() {
        return Err(AggregationError::MismatchedInputs { what: "codon set" });
    }

    info!(column = %config.abundance_column, "Aggregating tRNA concentrations.");
    let abundances = read_abundances(trnas, config)?;

    let total: f64 = abundances.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(AggregationError::InvalidTotal {
            column: config.abundance_column.clone(),
            total,
        });
    }

    let conversion_factor = config.total_trna / total * 1e-6;
    debug!(total, conversion_factor, "Derived conversion factor.");

    let concentrations = DVector::from_vec(abundances) * conversion_factor;
    let [watson_crick, wobble, near] = PairingCategory::ALL
        .map(|category| matrices.matrix(category).to_f64().tr_mul(&concentrations));

    let mut records = Vec::with_capacity(codons.len());
    let mut index = SecondaryMap::new();
    for (col, (id, codon)) in codons.iter().enumerate() {
        index.insert(id, col);
        records.push(ConcentrationRecord {
            codon: codon.triplet.to_string(),
            amino_acid: codon
                .amino_acid
                .as_ref()
                .map(|aa| aa.to_string())
                .unwrap_or_default(),
            watson_crick_cognate: watson_crick[col],
            wobble_cognate: wobble[col],
            near_cognate: near[col],
        });
    }

    info!(codons = records.len(), "Concentration table complete.");
    Ok(ConcentrationTable {
        records,
        index,
        conversion_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::table::DataTable;
    use crate::engine::classifier::classify;
    use crate::engine::config::AggregationConfigBuilder;
    use crate::engine::progress::ProgressReporter;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-15,
            "expected {expected}, got {actual}"
        );
    }

    fn table(headers: &[&str], rows: &[&[&str]]) -> DataTable {
        DataTable::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    fn lysine_inputs(abundances: [&str; 2]) -> (CodonSet, TrnaSet, PairingMatrices) {
        let codons = CodonSet::from_table(&table(
            &["codon", "three.letter"],
            &[&["AAA", "Lys"], &["AAG", "Lys"]],
        ))
        .unwrap();
        let trnas = TrnaSet::from_table(&table(
            &["anticodon", "three.letter", "gene.copy.number"],
            &[&["UUU", "Lys", abundances[0]], &["CUU", "Lys", abundances[1]]],
        ))
        .unwrap();
        let matrices = classify(&codons, &trnas, &ProgressReporter::new()).unwrap();
        (codons, trnas, matrices)
    }

    #[test]
    fn concentrations_sum_converted_abundances_per_category() {
        let (codons, trnas, matrices) = lysine_inputs(["3", "1"]);
        let result =
            aggregate(&matrices, &codons, &trnas, &AggregationConfig::default()).unwrap();

        let factor = 190.0 / 4.0 * 1e-6;
        assert_close(result.conversion_factor(), factor);

        let aaa = result.get(codons.ids()[0]).unwrap();
        assert_eq!(aaa.codon, "AAA");
        assert_eq!(aaa.amino_acid, "Lys");
        assert_close(aaa.watson_crick_cognate, 3.0 * factor);
        assert_eq!(aaa.wobble_cognate, 0.0);
        assert_eq!(aaa.near_cognate, 0.0);

        let aag = result.get(codons.ids()[1]).unwrap();
        assert_close(aag.watson_crick_cognate, 1.0 * factor);
        assert_close(aag.wobble_cognate, 3.0 * factor);
        assert_eq!(aag.near_cognate, 0.0);
    }

    #[test]
    fn category_totals_equal_converted_abundance_of_every_classified_cell() {
        let (codons, trnas, matrices) = lysine_inputs(["5", "2.5"]);
        let result =
            aggregate(&matrices, &codons, &trnas, &AggregationConfig::default()).unwrap();
        let abundances = [5.0, 2.5];

        for category in PairingCategory::ALL {
            let expected: f64 = matrices
                .pairs()
                .iter()
                .filter(|p| p.category == category)
                .map(|p| abundances[p.row] * result.conversion_factor())
                .sum();
            assert_close(result.total(category), expected);
        }
    }

    #[test]
    fn concentrations_are_non_negative_and_zero_without_contributors() {
        let (codons, trnas, matrices) = lysine_inputs(["4", "0"]);
        let result =
            aggregate(&matrices, &codons, &trnas, &AggregationConfig::default()).unwrap();
        for (col, record) in result.records().iter().enumerate() {
            for category in PairingCategory::ALL {
                let value = record.get(category);
                assert!(value >= 0.0);
                let contributors = (0..matrices.shape().0)
                    .filter(|&row| matrices.matrix(category).is_set(row, col))
                    .count();
                if contributors == 0 {
                    assert_eq!(value, 0.0);
                }
            }
        }
    }

    #[test]
    fn custom_column_and_pool_size_are_honoured() {
        let codons = CodonSet::from_table(&table(
            &["codon", "three.letter"],
            &[&["AAA", "Lys"]],
        ))
        .unwrap();
        let trnas = TrnaSet::from_table(&table(
            &["anticodon", "three.letter", "tRNA.reads"],
            &[&["UUU", "Lys", "10"]],
        ))
        .unwrap();
        let matrices = classify(&codons, &trnas, &ProgressReporter::new()).unwrap();
        let config = AggregationConfigBuilder::new()
            .abundance_column("tRNA.reads")
            .total_trna(100.0)
            .build()
            .unwrap();

        let result = aggregate(&matrices, &codons, &trnas, &config).unwrap();
        assert_close(result.records()[0].watson_crick_cognate, 100.0 * 1e-6);
    }

    #[test]
    fn missing_abundance_column_is_rejected() {
        let (codons, trnas, matrices) = lysine_inputs(["1", "1"]);
        let config = AggregationConfigBuilder::new()
            .abundance_column("tRNA.seq.counts")
            .total_trna(190.0)
            .build()
            .unwrap();
        assert_eq!(
            aggregate(&matrices, &codons, &trnas, &config).unwrap_err(),
            AggregationError::MissingAbundanceColumn {
                column: "tRNA.seq.counts".into()
            }
        );
    }

    #[test]
    fn abundances_summing_to_zero_are_rejected() {
        let (codons, trnas, matrices) = lysine_inputs(["0", "0"]);
        let result = aggregate(&matrices, &codons, &trnas, &AggregationConfig::default());
        assert!(matches!(
            result,
            Err(AggregationError::InvalidTotal { total, .. }) if total == 0.0
        ));
    }

    #[test]
    fn non_numeric_and_negative_abundances_are_rejected_with_their_row() {
        for (bad, row) in [(["2", "many"], 2), (["-1", "3"], 1), (["NaN", "1"], 1)] {
            let (codons, trnas, matrices) = lysine_inputs(bad);
            let err = aggregate(&matrices, &codons, &trnas, &AggregationConfig::default())
                .unwrap_err();
            match err {
                AggregationError::InvalidAbundance { row: r, .. } => assert_eq!(r, row),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn matrices_from_other_inputs_are_rejected() {
        let (codons, trnas, matrices) = lysine_inputs(["1", "1"]);
        let other_codons =
            CodonSet::from_table(&table(&["codon", "three.letter"], &[&["AAA", "Lys"]])).unwrap();
        let other_trnas = TrnaSet::from_table(&table(
            &["anticodon", "three.letter", "gene.copy.number"],
            &[&["UUU", "Lys", "1"]],
        ))
        .unwrap();
        let config = AggregationConfig::default();
        assert_eq!(
            aggregate(&matrices, &codons, &other_trnas, &config).unwrap_err(),
            AggregationError::MismatchedInputs { what: "tRNA set" }
        );
        assert_eq!(
            aggregate(&matrices, &other_codons, &trnas, &config).unwrap_err(),
            AggregationError::MismatchedInputs { what: "codon set" }
        );
    }

    #[test]
    fn reordered_codon_set_of_equal_length_is_rejected() {
        let codons =
            CodonSet::from_table(&table(&["codon", "three.letter"], &[&["AAA", "Lys"], &["GGG", "Gly"]]))
                .unwrap();
        let trnas = TrnaSet::from_table(&table(
            &["anticodon", "three.letter", "gene.copy.number"],
            &[&["UUU", "Lys", "1"]],
        ))
        .unwrap();
        let matrices = classify(&codons, &trnas, &ProgressReporter::new()).unwrap();

        let reordered =
            CodonSet::from_table(&table(&["codon", "three.letter"], &[&["GGG", "Gly"], &["AAA", "Lys"]]))
                .unwrap();
        assert_eq!(reordered.ids(), codons.ids());

        let config = AggregationConfig::default();
        assert_eq!(
            aggregate(&matrices, &reordered, &trnas, &config).unwrap_err(),
            AggregationError::MismatchedInputs { what: "codon set" }
        );

        let same_rows = TrnaSet::from_table(&table(
            &["anticodon", "three.letter", "gene.copy.number"],
            &[&["UUU", "Lys", "1"]],
        ))
        .unwrap();
        assert_eq!(
            aggregate(&matrices, &codons, &same_rows, &config).unwrap_err(),
            AggregationError::MismatchedInputs { what: "tRNA set" }
        );

        let concentrations = aggregate(&matrices, &codons.clone(), &trnas, &config).unwrap();
        assert!((concentrations.records()[0].watson_crick_cognate - 190e-6).abs() < 1e-15);
        assert_eq!(concentrations.records()[1].watson_crick_cognate, 0.0);
    }
}
