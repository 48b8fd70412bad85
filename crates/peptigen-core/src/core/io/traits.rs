use crate::core::models::residue::ParsedStructure;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading protein structure file formats.
///
/// This trait provides a common API for structure intake. Implementors
/// handle format-specific parsing and produce the per-chain sequence and
/// residue list consumed by the analysis and design layers.
pub trait StructureFile {
    /// The error type for intake operations.
    type Error: Error + From<io::Error>;

    /// Reads the structure for one chain from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `chain` - The chain identifier to extract.
    ///
    /// # Return
    ///
    /// Returns the parsed per-chain structure.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails, I/O operations encounter issues,
    /// or the requested chain has no residues.
    fn read_from(reader: &mut impl BufRead, chain: char) -> Result<ParsedStructure, Self::Error>;

    /// Reads the structure for one chain from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    /// * `chain` - The chain identifier to extract.
    ///
    /// # Return
    ///
    /// Returns the parsed per-chain structure.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P, chain: char) -> Result<ParsedStructure, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, chain)
    }

    /// Reads the structure for one chain from an in-memory payload.
    fn read_from_str(payload: &str, chain: char) -> Result<ParsedStructure, Self::Error> {
        let mut reader = BufReader::new(payload.as_bytes());
        Self::read_from(&mut reader, chain)
    }
}
