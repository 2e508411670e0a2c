pub mod classify;
pub mod concentrations;

use crate::config::InputConfig;
use crate::error::{CliError, Result};
use std::path::Path;
use tracing::info;
use trnapair::core::io::traits::TableFile;
use trnapair::core::models::table::DataTable;
use trnapair::workflows::classify::ClassificationResult;

fn read_table(input: &InputConfig, path: &Path) -> Result<DataTable> {
    info!("Loading table from {:?}", path);
    input
        .file_format(path)
        .read_from_path(path)
        .map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
}

/// Reads the codon and tRNA tables, in that order.
fn read_inputs(input: &InputConfig) -> Result<(DataTable, DataTable)> {
    let codons = read_table(input, &input.codons)?;
    let trnas = read_table(input, &input.trnas)?;
    info!(
        codons = codons.len(),
        trnas = trnas.len(),
        "Input tables loaded."
    );
    Ok((codons, trnas))
}

fn write_pairs(input: &InputConfig, result: &ClassificationResult, path: &Path) -> Result<()> {
    let pairs = result.pair_records();
    info!("Writing {} classified pair(s) to {:?}", pairs.len(), path);
    input
        .file_format(path)
        .write_records_to_path(&pairs, path)
        .map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
    println!(
        "✓ {} classified pair(s) written to: {}",
        pairs.len(),
        path.display()
    );
    Ok(())
}
