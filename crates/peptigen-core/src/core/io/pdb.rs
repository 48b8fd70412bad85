use crate::core::chem;
use crate::core::io::traits::StructureFile;
use crate::core::models::residue::{ParsedStructure, ResidueRecord};
use std::collections::HashSet;
use std::io::{self, BufRead};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Chain '{chain}' contains no residues")]
    ChainNotFound { chain: char },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Line is too short for an ATOM record (must cover columns 1-26)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Returns whether a file name carries the `.pdb` extension.
///
/// Upload-side validation only; the parser itself never looks at the name.
pub fn has_pdb_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdb"))
}

/// Minimal fixed-column PDB reader for structure intake.
///
/// Only `ATOM` records of the first model are consulted: the residue list is
/// the ordered first occurrence of each residue number on the requested
/// chain, and the sequence is its one-letter rendering with `X` standing in
/// for non-standard residues. Coordinates, occupancies, and `HETATM` records
/// are outside the intake contract and are skipped.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead, chain: char) -> Result<ParsedStructure, Self::Error> {
        let mut sequence = String::new();
        let mut residues: Vec<ResidueRecord> = Vec::new();
        let mut seen_numbers: HashSet<i64> = HashSet::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            if record_type == "ENDMDL" {
                break;
            }
            if record_type != "ATOM" {
                continue;
            }
            if line.len() < 26 {
                return Err(PdbError::Parse {
                    line: line_num,
                    kind: PdbParseErrorKind::LineTooShort,
                });
            }

            let line_chain = line.chars().nth(21).unwrap_or(' ');
            if line_chain != chain {
                continue;
            }

            let number_field = slice_and_trim(&line, 22, 26);
            let residue_number: i64 =
                number_field.parse().map_err(|_| PdbError::Parse {
                    line: line_num,
                    kind: PdbParseErrorKind::InvalidInt {
                        columns: "23-26".to_string(),
                        value: number_field.to_string(),
                    },
                })?;
            if !seen_numbers.insert(residue_number) {
                continue;
            }

            let residue_name = slice_and_trim(&line, 17, 20);
            sequence.push(chem::one_letter_code(residue_name).unwrap_or('X'));
            residues.push(ResidueRecord::new(residue_name, residue_number, chain));
        }

        if residues.is_empty() {
            return Err(PdbError::ChainNotFound { chain });
        }

        Ok(ParsedStructure::new(chain, sequence, residues))
    }
}
