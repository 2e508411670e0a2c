use super::error::ClassificationInvariantError;
use crate::core::models::ids::{CodonId, SetToken, TrnaId};
use crate::core::pairing::category::PairingCategory;
use nalgebra::DMatrix;
use slotmap::SecondaryMap;

/// A 0/1 matrix over (tRNA row, codon column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingMatrix(DMatrix<u8>);

impl PairingMatrix {
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self(DMatrix::zeros(nrows, ncols))
    }

    /// Builds a matrix from cell flags laid out column by column.
    pub(crate) fn from_column_major(nrows: usize, ncols: usize, cells: Vec<bool>) -> Self {
        Self(DMatrix::from_iterator(
            nrows,
            ncols,
            cells.into_iter().map(u8::from),
        ))
    }

    /// Marks a cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize) {
        self.0[(row, col)] = 1;
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.0.get((row, col)).is_some_and(|&v| v != 0)
    }

    pub fn shape(&self) -> (usize, usize) {
        self.0.shape()
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&v| v != 0).count()
    }

    pub fn as_matrix(&self) -> &DMatrix<u8> {
        &self.0
    }

    pub(crate) fn to_f64(&self) -> DMatrix<f64> {
        self.0.map(f64::from)
    }
}

/// One classified (tRNA, codon) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedPair {
    pub trna: TrnaId,
    pub codon: CodonId,
    pub row: usize,
    pub column: usize,
    pub category: PairingCategory,
}

/// The three mutually exclusive category matrices of one classification run.
///
/// Rows follow the tRNA order and columns the codon order of the inputs; the
/// identifiers of both are kept so every cell can also be addressed by id.
/// Matrices produced by the classifier also record the tokens of the sets
/// they were built from.
#[derive(Debug, Clone)]
pub struct PairingMatrices {
    trna_ids: Vec<TrnaId>,
    codon_ids: Vec<CodonId>,
    trna_source: SetToken,
    codon_source: SetToken,
    trna_index: SecondaryMap<TrnaId, usize>,
    codon_index: SecondaryMap<CodonId, usize>,
    watson_crick: PairingMatrix,
    wobble: PairingMatrix,
    near_cognate: PairingMatrix,
}

impl PairingMatrices {
    /// Assembles the matrices, rejecting any cell claimed by more than one
    /// category. The result is not tied to any codon or tRNA set until
    /// [`with_sources`](Self::with_sources) is applied.
    pub fn new(
        trna_ids: Vec<TrnaId>,
        codon_ids: Vec<CodonId>,
        watson_crick: PairingMatrix,
        wobble: PairingMatrix,
        near_cognate: PairingMatrix,
    ) -> Result<Self, ClassificationInvariantError> {
        let expected = (trna_ids.len(), codon_ids.len());
        for (category, matrix) in [
            (PairingCategory::WatsonCrickCognate, &watson_crick),
            (PairingCategory::WobbleCognate, &wobble),
            (PairingCategory::NearCognate, &near_cognate),
        ] {
            if matrix.shape() != expected {
                return Err(ClassificationInvariantError::ShapeMismatch {
                    category,
                    expected,
                    found: matrix.shape(),
                });
            }
        }

        let assignments = watson_crick.0.map(u16::from)
            + wobble.0.map(u16::from)
            + near_cognate.0.map(u16::from);
        if let Some((idx, &count)) = assignments.iter().enumerate().find(|&(_, &v)| v > 1) {
            // Column-major storage.
            return Err(ClassificationInvariantError::OverlappingAssignment {
                row: idx % expected.0,
                column: idx / expected.0,
                assignments: count,
            });
        }

        let trna_index = trna_ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        let codon_index = codon_ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        Ok(Self {
            trna_ids,
            codon_ids,
            trna_source: SetToken::fresh(),
            codon_source: SetToken::fresh(),
            trna_index,
            codon_index,
            watson_crick,
            wobble,
            near_cognate,
        })
    }

    pub(crate) fn with_sources(mut self, trnas: SetToken, codons: SetToken) -> Self {
        self.trna_source = trnas;
        self.codon_source = codons;
        self
    }

    /// Token of the tRNA set the rows were built from.
    pub fn trna_source(&self) -> SetToken {
        self.trna_source
    }

    /// Token of the codon set the columns were built from.
    pub fn codon_source(&self) -> SetToken {
        self.codon_source
    }

    pub fn trna_ids(&self) -> &[TrnaId] {
        &self.trna_ids
    }

    pub fn codon_ids(&self) -> &[CodonId] {
        &self.codon_ids
    }

    /// (number of tRNAs, number of codons)
    pub fn shape(&self) -> (usize, usize) {
        (self.trna_ids.len(), self.codon_ids.len())
    }

    pub fn matrix(&self, category: PairingCategory) -> &PairingMatrix {
        match category {
            PairingCategory::WatsonCrickCognate => &self.watson_crick,
            PairingCategory::WobbleCognate => &self.wobble,
            PairingCategory::NearCognate => &self.near_cognate,
        }
    }

    pub fn category_at(&self, row: usize, column: usize) -> Option<PairingCategory> {
        PairingCategory::ALL
            .into_iter()
            .find(|&c| self.matrix(c).is_set(row, column))
    }

    pub fn category(&self, trna: TrnaId, codon: CodonId) -> Option<PairingCategory> {
        let row = *self.trna_index.get(trna)?;
        let column = *self.codon_index.get(codon)?;
        self.category_at(row, column)
    }

    pub fn count(&self, category: PairingCategory) -> usize {
        self.matrix(category).count()
    }

    /// Every classified cell, row by row.
    pub fn pairs(&self) -> Vec<ClassifiedPair> {
        let mut pairs = Vec::new();
        for (row, &trna) in self.trna_ids.iter().enumerate() {
            for (column, &codon) in self.codon_ids.iter().enumerate() {
                if let Some(category) = self.category_at(row, column) {
                    pairs.push(ClassifiedPair {
                        trna,
                        codon,
                        row,
                        column,
                        category,
                    });
                }
            }
        }
        pairs
    }
}
