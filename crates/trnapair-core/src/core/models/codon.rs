use super::amino_acid::AminoAcidLabel;
use super::ids::{CodonId, SetToken};
use super::schema::{
    AMINO_ACID_COLUMN, CODON_COLUMN, SchemaError, TableKind, require_column,
};
use super::sequence::Triplet;
use super::table::DataTable;
use slotmap::SlotMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codon {
    pub triplet: Triplet,
    pub amino_acid: Option<AminoAcidLabel>,
}

/// The codons of one classification run, keyed by stable [`CodonId`]s and
/// kept in input order.
#[derive(Debug, Clone)]
pub struct CodonSet {
    codons: SlotMap<CodonId, Codon>,
    order: Vec<CodonId>,
    labelled: bool,
    token: SetToken,
}

impl CodonSet {
    /// Builds the set from a table with a `codon` column and, optionally, a
    /// `three.letter` amino-acid column.
    pub fn from_table(table: &DataTable) -> Result<Self, SchemaError> {
        let codon_idx = require_column(table, TableKind::Codon, CODON_COLUMN)?;
        let label_idx = table.column_index(AMINO_ACID_COLUMN);

        let mut codons = SlotMap::with_capacity_and_key(table.len());
        let mut order = Vec::with_capacity(table.len());

        for (i, row) in table.rows().enumerate() {
            let raw = &row[codon_idx];
            let triplet = raw
                .parse::<Triplet>()
                .map_err(|source| SchemaError::InvalidTriplet {
                    table: TableKind::Codon,
                    column: CODON_COLUMN,
                    row: i + 1,
                    value: raw.clone(),
                    source,
                })?;
            let amino_acid = label_idx.map(|idx| AminoAcidLabel::new(&row[idx]));
            order.push(codons.insert(Codon {
                triplet,
                amino_acid,
            }));
        }

        Ok(Self {
            codons,
            order,
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

    /// Whether the source table carried an amino-acid label column.
    pub fn is_labelled(&self) -> bool {
        self.labelled
    }

    pub fn token(&self) -> SetToken {
        self.token
    }

    pub fn ids(&self) -> &[CodonId] {
        &self.order
    }

    pub fn get(&self, id: CodonId) -> Option<&Codon> {
        self.codons.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CodonId, &Codon)> {
        self.order.iter().map(move |&id| (id, &self.codons[id]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> DataTable {
        DataTable::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn from_table_preserves_order_and_labels() {
        let t = table(
            &["codon", "aa", "three.letter"],
            &[&["AAA", "K", "Lys"], &["GCU", "A", "Ala"]],
        );
        let set = CodonSet::from_table(&t).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.is_labelled());

        let codons: Vec<_> = set.iter().map(|(_, c)| c.triplet.to_string()).collect();
        assert_eq!(codons, vec!["AAA", "GCU"]);

        let first = set.get(set.ids()[0]).unwrap();
        assert_eq!(first.amino_acid, Some(AminoAcidLabel::from("Lys")));
    }

    #[test]
    fn from_table_without_label_column_is_unlabelled() {
        let t = table(&["codon"], &[&["UUU"]]);
        let set = CodonSet::from_table(&t).unwrap();
        assert!(!set.is_labelled());
        assert_eq!(set.iter().next().unwrap().1.amino_acid, None);
    }

    #[test]
    fn from_table_fails_without_codon_column() {
        let t = table(&["anticodon"], &[&["UUU"]]);
        let err = CodonSet::from_table(&t).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingColumn {
                table: TableKind::Codon,
                column: "codon"
            }
        ));
    }

    #[test]
    fn from_table_reports_malformed_codon_row() {
        let t = table(&["codon"], &[&["AAA"], &["AA"]]);
        let err = CodonSet::from_table(&t).unwrap_err();
        match err {
            SchemaError::InvalidTriplet { row, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(value, "AA");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn sets_from_equal_tables_get_distinct_tokens() {
        let t = table(&["codon"], &[&["AAA"], &["GGG"]]);
        let first = CodonSet::from_table(&t).unwrap();
        let second = CodonSet::from_table(&t).unwrap();
        assert_eq!(first.ids(), second.ids());
        assert_ne!(first.token(), second.token());
        assert_eq!(first.clone().token(), first.token());
    }

    #[test]
    fn ids_are_distinct_for_duplicate_codons() {
        let t = table(&["codon"], &[&["AAA"], &["AAA"]]);
        let set = CodonSet::from_table(&t).unwrap();
        assert_ne!(set.ids()[0], set.ids()[1]);
    }
}
