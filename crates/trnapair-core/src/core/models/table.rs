use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Row {row} has {found} fields but the header declares {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Duplicate column name '{0}' in header")]
    DuplicateColumn(String),
}

/// A column-oriented view over rows of string fields, addressed by header name.
///
/// Row numbers used in lookups and error messages are 1-based and count data
/// rows only (the header is not a row).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_index: HashMap<String, usize>,
}

impl DataTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        let mut column_index = HashMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            if column_index.insert(name.clone(), i).is_some() {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(TableError::RaggedRow {
                    row: i + 1,
                    expected: headers.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self {
            headers,
            rows,
            column_index,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index.contains_key(name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_index.get(name).copied()
    }

    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + use<'a>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> DataTable {
        DataTable::new(
            strings(&["codon", "three.letter"]),
            vec![strings(&["AAA", "Lys"]), strings(&["GCU", "Ala"])],
        )
        .unwrap()
    }

    #[test]
    fn column_lookup_returns_values_in_row_order() {
        let table = sample();
        let codons: Vec<&str> = table.column("codon").unwrap().collect();
        assert_eq!(codons, vec!["AAA", "GCU"]);
        assert_eq!(table.column_index("three.letter"), Some(1));
    }

    #[test]
    fn missing_column_lookup_returns_none() {
        let table = sample();
        assert!(table.column("anticodon").is_none());
        assert!(!table.has_column("anticodon"));
    }

    #[test]
    fn ragged_rows_are_rejected_with_their_row_number() {
        let result = DataTable::new(
            strings(&["codon", "three.letter"]),
            vec![strings(&["AAA", "Lys"]), strings(&["GCU"])],
        );
        assert_eq!(
            result,
            Err(TableError::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn duplicate_headers_are_rejected() {
        let result = DataTable::new(strings(&["codon", "codon"]), vec![]);
        assert_eq!(result, Err(TableError::DuplicateColumn("codon".into())));
    }

    #[test]
    fn empty_table_has_no_rows() {
        let table = DataTable::new(strings(&["codon"]), vec![]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.column("codon").unwrap().count(), 0);
    }
}
