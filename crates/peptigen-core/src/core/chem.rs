use phf::{Map, Set, phf_map, phf_set};
use serde::Serialize;
use std::fmt;

static STANDARD_RESIDUES: Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
};

static THREE_TO_ONE: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
};

static HYDROPHOBIC: Set<char> = phf_set! { 'A', 'V', 'L', 'I', 'M', 'F', 'Y', 'W' };

static CHARGED: Set<char> = phf_set! { 'D', 'E', 'K', 'R', 'H' };

/// Side-chain chemistry class of a surface-exposed residue.
///
/// The partition is a pure function of the residue's one-letter code via two
/// fixed membership sets; everything outside them is polar or other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SurfaceProperty {
    Hydrophobic,
    Charged,
    #[serde(rename = "Polar/Other")]
    PolarOther,
}

impl fmt::Display for SurfaceProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceProperty::Hydrophobic => write!(f, "Hydrophobic"),
            SurfaceProperty::Charged => write!(f, "Charged"),
            SurfaceProperty::PolarOther => write!(f, "Polar/Other"),
        }
    }
}

pub fn is_standard_residue(residue_name: &str) -> bool {
    STANDARD_RESIDUES.contains(residue_name.trim())
}

pub fn one_letter_code(residue_name: &str) -> Option<char> {
    THREE_TO_ONE.get(residue_name.trim()).copied()
}

/// Classifies a standard residue by its side-chain chemistry.
///
/// Non-standard names have no one-letter code and fall into `PolarOther`;
/// callers filter those out before classification.
pub fn classify_residue(residue_name: &str) -> SurfaceProperty {
    let code = match one_letter_code(residue_name) {
        Some(c) => c,
        None => return SurfaceProperty::PolarOther,
    };
    if HYDROPHOBIC.contains(&code) {
        SurfaceProperty::Hydrophobic
    } else if CHARGED.contains(&code) {
        SurfaceProperty::Charged
    } else {
        SurfaceProperty::PolarOther
    }
}
