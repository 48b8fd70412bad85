use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Identity of one residue in a raw SASA result: chain and residue number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResidueKey {
    pub chain: char,
    pub number: i64,
}

/// Per-residue total solvent-accessible surface area, as reported by the
/// upstream numeric computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueArea {
    pub name: String,
    pub total: f64,
}

/// Raw per-residue SASA values keyed by chain and residue number.
///
/// Upstream tools report residue areas either as a flat mapping of composite
/// keys or as a nested per-chain mapping; both shapes collapse into this one
/// container. Iteration per chain is ordered by ascending residue number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAreas {
    areas: BTreeMap<ResidueKey, ResidueArea>,
}

impl RawAreas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the container from flat composite-key records.
    pub fn from_flat<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (ResidueKey, ResidueArea)>,
    {
        Self {
            areas: records.into_iter().collect(),
        }
    }

    /// Builds the container from a nested per-chain mapping of residue
    /// number to `(residue_name, total_sasa)`.
    pub fn from_nested<C, R>(chains: C) -> Self
    where
        C: IntoIterator<Item = (char, R)>,
        R: IntoIterator<Item = (i64, (String, f64))>,
    {
        let mut areas = BTreeMap::new();
        for (chain, residues) in chains {
            for (number, (name, total)) in residues {
                areas.insert(ResidueKey { chain, number }, ResidueArea { name, total });
            }
        }
        Self { areas }
    }

    pub fn insert(&mut self, key: ResidueKey, area: ResidueArea) {
        self.areas.insert(key, area);
    }

    /// Iterates the residues of one chain in ascending residue-number order.
    pub fn chain(&self, chain: char) -> impl Iterator<Item = (&ResidueKey, &ResidueArea)> {
        self.areas
            .range(
                ResidueKey {
                    chain,
                    number: i64::MIN,
                }..=ResidueKey {
                    chain,
                    number: i64::MAX,
                },
            )
            .map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum SasaError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Invalid chain identifier '{chain}' in '{path}' (must be a single character)")]
    InvalidChain { path: String, chain: String },
}

/// The opaque boundary to the native SASA computation.
///
/// Implementors resolve a structure path to raw per-residue areas; whether
/// that means invoking a native library or reading a precomputed table is
/// outside the classifier's contract. Unavailability is a setup failure
/// surfaced here, never a per-request failure of the pipeline.
pub trait SasaSource {
    fn residue_areas(&self, path: &Path) -> Result<RawAreas, SasaError>;
}

#[derive(Debug, Deserialize)]
struct AreaRecord {
    chain: String,
    residue_number: i64,
    residue_name: String,
    sasa: f64,
}

/// Reads precomputed per-residue SASA totals from a CSV file with
/// `chain,residue_number,residue_name,sasa` columns, e.g. converted from
/// FreeSASA's per-residue output.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvAreaFile;

impl SasaSource for CsvAreaFile {
    fn residue_areas(&self, path: &Path) -> Result<RawAreas, SasaError> {
        let display_path = path.to_string_lossy().to_string();
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                SasaError::Io {
                    path: display_path.clone(),
                    source: std::io::Error::other(e),
                }
            } else {
                SasaError::Csv {
                    path: display_path.clone(),
                    source: e,
                }
            }
        })?;

        let mut areas = RawAreas::new();
        for record in reader.deserialize() {
            let record: AreaRecord = record.map_err(|e| SasaError::Csv {
                path: display_path.clone(),
                source: e,
            })?;
            let chain_field = record.chain.trim();
            let mut chars = chain_field.chars();
            let chain = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(SasaError::InvalidChain {
                        path: display_path,
                        chain: record.chain,
                    });
                }
            };
            areas.insert(
                ResidueKey {
                    chain,
                    number: record.residue_number,
                },
                ResidueArea {
                    name: record.residue_name,
                    total: record.sasa,
                },
            );
        }
        Ok(areas)
    }
}
