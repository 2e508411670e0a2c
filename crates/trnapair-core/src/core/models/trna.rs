use super::amino_acid::AminoAcidLabel;
use super::ids::{SetToken, TrnaId};
use super::schema::{
    AMINO_ACID_COLUMN, ANTICODON_COLUMN, SchemaError, TableKind, require_column,
};
use super::sequence::Triplet;
use super::table::DataTable;
use slotmap::SlotMap;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trna {
    pub anticodon: Triplet,
    pub amino_acid: Option<AminoAcidLabel>,
    /// 1-based row of this tRNA in its source table.
    pub row: usize,
    fields: Vec<String>,
}

/// The tRNA species of one run, keyed by stable [`TrnaId`]s and kept in input
/// order. Every raw field of the source table is retained so that numeric
/// columns (abundances) can be looked up by name later.
#[derive(Debug, Clone)]
pub struct TrnaSet {
    trnas: SlotMap<TrnaId, Trna>,
    order: Vec<TrnaId>,
    column_index: HashMap<String, usize>,
    labelled: bool,
    token: SetToken,
}

impl TrnaSet {
    pub fn from_table(table: &DataTable) -> Result<Self, SchemaError> {
        let anticodon_idx = require_column(table, TableKind::Trna, ANTICODON_COLUMN)?;
        let label_idx = table.column_index(AMINO_ACID_COLUMN);

        let mut trnas = SlotMap::with_capacity_and_key(table.len());
        let mut order = Vec::with_capacity(table.len());

        for (i, row) in table.rows().enumerate() {
            let raw = &row[anticodon_idx];
            let anticodon = raw
                .parse::<Triplet>()
                .map_err(|source| SchemaError::InvalidTriplet {
                    table: TableKind::Trna,
                    column: ANTICODON_COLUMN,
                    row: i + 1,
                    value: raw.clone(),
                    source,
                })?;
            order.push(trnas.insert(Trna {
                anticodon,
                amino_acid: label_idx.map(|idx| AminoAcidLabel::new(&row[idx])),
                row: i + 1,
                fields: row.to_vec(),
            }));
        }

        let column_index = table
            .headers()
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Ok(Self {
            trnas,
            order,
            column_index,
            labelled: label_idx.is_some(),
            token: SetToken::fresh(),
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_labelled(&self) -> bool {
        self.labelled
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index.contains_key(name)
    }

    pub fn token(&self) -> SetToken {
        self.token
    }

    pub fn ids(&self) -> &[TrnaId] {
        &self.order
    }

    pub fn get(&self, id: TrnaId) -> Option<&Trna> {
        self.trnas.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TrnaId, &Trna)> {
        self.order.iter().map(move |&id| (id, &self.trnas[id]))
    }

    /// Raw value of `column` for the given tRNA.
    pub fn field(&self, id: TrnaId, column: &str) -> Option<&str> {
        let idx = *self.column_index.get(column)?;
        self.trnas.get(id).map(|t| t.fields[idx].as_str())
    }
}
