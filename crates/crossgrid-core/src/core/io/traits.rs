use crate::core::models::entry::WordEntry;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading a list of words and hints.
///
/// Implementors handle format-specific parsing; entries are returned in the
/// order they appear in the source.
pub trait WordListFile {
    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads all entries from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if a record is malformed or reading fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<WordEntry>, Self::Error>;

    /// Reads all entries from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
