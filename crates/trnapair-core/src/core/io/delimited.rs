use super::traits::TableFile;
use crate::core::models::table::{DataTable, TableError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DelimitedError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Delimited text error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed table: {0}")]
    Table(#[from] TableError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }

    /// Tab for `.tsv` and `.txt` files, comma otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("tsv") | Some("txt") => Delimiter::Tab,
            _ => Delimiter::Comma,
        }
    }
}

/// Comma- or tab-separated text with a single header row.
///
/// Fields are trimmed on read. Row width is validated by [`DataTable`] so
/// ragged rows are reported with their row number.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedFile {
    delimiter: Delimiter,
}

impl DelimitedFile {
    pub fn new(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    pub fn for_path(path: &Path) -> Self {
        Self::new(Delimiter::from_path(path))
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Serializes typed records, deriving the header from their field names.
    pub fn write_records<S: Serialize>(
        &self,
        records: impl IntoIterator<Item = S>,
        writer: impl Write,
    ) -> Result<(), DelimitedError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter.as_byte())
            .from_writer(writer);
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Writes a header and rows without going through a [`DataTable`], so
    /// repeated header names are allowed.
    pub fn write_rows<'a>(
        &self,
        header: &[String],
        rows: impl IntoIterator<Item = &'a [String]>,
        writer: impl Write,
    ) -> Result<(), DelimitedError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter.as_byte())
            .from_writer(writer);
        csv_writer.write_record(header)?;
        for row in rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_records_to_path<S: Serialize, P: AsRef<Path>>(
        &self,
        records: impl IntoIterator<Item = S>,
        path: P,
    ) -> Result<(), DelimitedError> {
        let file = File::create(path)?;
        self.write_records(records, BufWriter::new(file))
    }
}

impl TableFile for DelimitedFile {
    type Error = DelimitedError;

    fn read_from(&self, reader: impl Read) -> Result<DataTable, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter.as_byte())
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(DataTable::new(headers, rows)?)
    }

    fn write_to(&self, table: &DataTable, writer: impl Write) -> Result<(), Self::Error> {
        self.write_rows(table.headers(), table.rows(), writer)
    }
}
