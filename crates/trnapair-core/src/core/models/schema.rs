use super::sequence::TripletError;
use super::table::DataTable;
use std::fmt;
use thiserror::Error;

pub const CODON_COLUMN: &str = "codon";
pub const ANTICODON_COLUMN: &str = "anticodon";
pub const AMINO_ACID_COLUMN: &str = "three.letter";
pub const DEFAULT_ABUNDANCE_COLUMN: &str = "gene.copy.number";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Codon,
    Trna,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Codon => f.write_str("codon"),
            TableKind::Trna => f.write_str("tRNA"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("The {table} table must contain a column named \"{column}\"")]
    MissingColumn {
        table: TableKind,
        column: &'static str,
    },
    #[error("Invalid value '{value}' in column \"{column}\" of the {table} table at row {row}: {source}")]
    InvalidTriplet {
        table: TableKind,
        column: &'static str,
        row: usize,
        value: String,
        #[source]
        source: TripletError,
    },
}

pub(crate) fn require_column(
    table: &DataTable,
    kind: TableKind,
    column: &'static str,
) -> Result<usize, SchemaError> {
    table
        .column_index(column)
        .ok_or(SchemaError::MissingColumn {
            table: kind,
            column,
        })
}
