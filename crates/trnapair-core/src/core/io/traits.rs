use crate::core::models::table::DataTable;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Defines the interface for reading and writing tabular input files.
///
/// Implementors handle one on-disk layout and convert it to and from the
/// header-addressed [`DataTable`] used throughout the library.
pub trait TableFile {
    /// The error type for I/O and parsing operations.
    type Error: Error + From<io::Error>;

    /// Reads a table from any byte source.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be parsed or the rows do not
    /// match the header.
    fn read_from(&self, reader: impl Read) -> Result<DataTable, Self::Error>;

    /// Writes a table, header first.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(&self, table: &DataTable, writer: impl Write) -> Result<(), Self::Error>;

    /// Reads a table from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<DataTable, Self::Error> {
        let file = File::open(path)?;
        self.read_from(BufReader::new(file))
    }

    /// Writes a table to a file path, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(&self, table: &DataTable, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        self.write_to(table, BufWriter::new(file))
    }
}
