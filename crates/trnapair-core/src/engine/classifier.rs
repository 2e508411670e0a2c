use super::error::EngineError;
use super::matrices::{PairingMatrices, PairingMatrix};
use super::progress::{Progress, ProgressReporter};
use crate::core::models::codon::{Codon, CodonSet};
use crate::core::models::schema::{AMINO_ACID_COLUMN, SchemaError, TableKind};
use crate::core::models::trna::{Trna, TrnaSet};
use crate::core::pairing::category::PairingCategory;
use crate::core::pairing::predicates::{
    first_watson_crick, first_wobble, second_watson_crick, third_watson_crick, third_wobble,
};
use tracing::{debug, error, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluates `cell` over the whole grid, returning results column by column.
/// Progress advances once per finished codon column.
fn evaluate_grid<T, F>(
    nrows: usize,
    ncols: usize,
    reporter: &ProgressReporter,
    cell: F,
) -> Vec<T>
where
    T: Send,
    F: Fn(usize, usize) -> T + Sync,
{
    reporter.report(Progress::TaskStart {
        total_steps: ncols as u64,
    });

    let column = |col: usize| {
        let values: Vec<T> = (0..nrows).map(|row| cell(row, col)).collect();
        reporter.report(Progress::TaskAdvance { steps: 1 });
        values
    };

    #[cfg(not(feature = "parallel"))]
    let columns: Vec<Vec<T>> = (0..ncols).map(column).collect();

    #[cfg(feature = "parallel")]
    let columns: Vec<Vec<T>> = (0..ncols).into_par_iter().map(column).collect();

    reporter.report(Progress::TaskFinish);
    columns.into_iter().flatten().collect()
}

/// Classifies every (tRNA, codon) pair into at most one [`PairingCategory`].
///
/// Three passes run in order over the full grid, each reading only the
/// matrices completed before it:
///
/// 1. **Watson-Crick cognate**: Watson-Crick pairing at all three positions.
/// 2. **Wobble cognate**: not yet classified, Watson-Crick at positions 1 and 2
///    and wobble at position 3. Pairs whose amino-acid labels differ are
///    recorded as near-cognate instead.
/// 3. **Near-cognate**: not yet classified as cognate, Watson-Crick at
///    position 2 and Watson-Crick or wobble at positions 1 and 3.
///
/// # Errors
///
/// Returns [`EngineError::Schema`] if either input lacks the `three.letter`
/// label column (checked before any cell is evaluated), and
/// [`EngineError::Invariant`] if a cell ends up in more than one category.
#[instrument(skip_all, name = "classification")]
pub fn classify(
    codons: &CodonSet,
    trnas: &TrnaSet,
    reporter: &ProgressReporter,
) -> Result<PairingMatrices, EngineError> {
    if !trnas.is_labelled() {
        return Err(SchemaError::MissingColumn {
            table: TableKind::Trna,
            column: AMINO_ACID_COLUMN,
        }
        .into());
    }
    if !codons.is_labelled() {
        return Err(SchemaError::MissingColumn {
            table: TableKind::Codon,
            column: AMINO_ACID_COLUMN,
        }
        .into());
    }

    let rows: Vec<&Trna> = trnas.iter().map(|(_, t)| t).collect();
    let cols: Vec<&Codon> = codons.iter().map(|(_, c)| c).collect();
    let (nrows, ncols) = (rows.len(), cols.len());
    info!(trnas = nrows, codons = ncols, "Starting pairing classification.");

    reporter.report(Progress::PhaseStart {
        name: "Populating WC matrix",
    });
    let watson_crick = PairingMatrix::from_column_major(
        nrows,
        ncols,
        evaluate_grid(nrows, ncols, reporter, |r, c| {
            let (codon, anticodon) = (&cols[c].triplet, &rows[r].anticodon);
            second_watson_crick(codon, anticodon)
                && first_watson_crick(codon, anticodon)
                && third_watson_crick(codon, anticodon)
        }),
    );
    reporter.report(Progress::PhaseFinish);
    debug!(cells = watson_crick.count(), "Watson-Crick pass finished.");

    reporter.report(Progress::PhaseStart {
        name: "Populating wobble matrix",
    });
    let wobble_pass = evaluate_grid(nrows, ncols, reporter, |r, c| {
        let (codon, trna) = (cols[c], rows[r]);
        let candidate = !watson_crick.is_set(r, c)
            && second_watson_crick(&codon.triplet, &trna.anticodon)
            && first_watson_crick(&codon.triplet, &trna.anticodon)
            && third_wobble(&codon.triplet, &trna.anticodon);
        if !candidate {
            None
        } else if trna.amino_acid == codon.amino_acid {
            Some(PairingCategory::WobbleCognate)
        } else {
            Some(PairingCategory::NearCognate)
        }
    });
    let wobble = PairingMatrix::from_column_major(
        nrows,
        ncols,
        wobble_pass
            .iter()
            .map(|c| *c == Some(PairingCategory::WobbleCognate))
            .collect(),
    );
    let mismatched = wobble_pass
        .iter()
        .filter(|c| **c == Some(PairingCategory::NearCognate))
        .count();
    reporter.report(Progress::PhaseFinish);
    debug!(
        cells = wobble.count(),
        mismatched_amino_acid = mismatched,
        "Wobble pass finished."
    );

    reporter.report(Progress::PhaseStart {
        name: "Populating near-cognate matrix",
    });
    let near_pass = evaluate_grid(nrows, ncols, reporter, |r, c| {
        let (codon, anticodon) = (&cols[c].triplet, &rows[r].anticodon);
        !watson_crick.is_set(r, c)
            && !wobble.is_set(r, c)
            && second_watson_crick(codon, anticodon)
            && (first_wobble(codon, anticodon) || first_watson_crick(codon, anticodon))
            && (third_wobble(codon, anticodon) || third_watson_crick(codon, anticodon))
    });
    let near_cognate = PairingMatrix::from_column_major(
        nrows,
        ncols,
        wobble_pass
            .iter()
            .zip(near_pass)
            .map(|(w, n)| n || *w == Some(PairingCategory::NearCognate))
            .collect(),
    );
    reporter.report(Progress::PhaseFinish);

    let matrices = PairingMatrices::new(
        trnas.ids().to_vec(),
        codons.ids().to_vec(),
        watson_crick,
        wobble,
        near_cognate,
    )
    .inspect_err(|e| error!("Multiple relationships for identical tRNA:codon pairs: {}", e))?
    .with_sources(trnas.token(), codons.token());
    reporter.report(Progress::Message(
        "No overlapping category assignments detected.".to_string(),
    ));

    info!(
        watson_crick = matrices.count(PairingCategory::WatsonCrickCognate),
        wobble = matrices.count(PairingCategory::WobbleCognate),
        near_cognate = matrices.count(PairingCategory::NearCognate),
        "Classification finished; no overlapping assignments."
    );
    Ok(matrices)
}
