use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidueRecord {
    pub name: String,            // Three-letter residue name from the source file
    pub sequence_position: i64,  // Residue sequence number, 1-based in well-formed files
    pub chain: char,             // Identifier of the parent chain
}

impl ResidueRecord {
    pub fn new(name: &str, sequence_position: i64, chain: char) -> Self {
        Self {
            name: name.to_string(),
            sequence_position,
            chain,
        }
    }
}

/// The per-chain result of structure intake: the primary sequence in
/// one-letter code and the ordered residue list it was derived from.
///
/// Constructed once per analysis request and read-only downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedStructure {
    pub chain: char,
    pub sequence: String,
    pub residues: Vec<ResidueRecord>,
}

impl ParsedStructure {
    pub fn new(chain: char, sequence: String, residues: Vec<ResidueRecord>) -> Self {
        Self {
            chain,
            sequence,
            residues,
        }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}
