use crate::analysis::sasa::{CsvAreaFile, SasaSource};
use crate::analysis::surface::{self, SurfaceResidue, SurfaceSummary};
use crate::core::io::pdb::{PdbError, PdbFile};
use crate::core::io::traits::StructureFile;
use crate::core::models::residue::ParsedStructure;
use crate::design::candidates::{self, PeptideCandidate};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Hard ceiling on the number of candidates per run.
pub const MAX_CANDIDATES: usize = 50;

const DEFAULT_NUM_CANDIDATES: usize = 5;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Structure intake failed: {source}")]
    Intake {
        #[from]
        source: PdbError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub chain: char,
    pub strategy_name: String,
    pub num_candidates: usize,
    pub exposure_threshold: f64,
    pub sasa_path: Option<PathBuf>,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    chain: Option<char>,
    strategy_name: Option<String>,
    num_candidates: Option<usize>,
    exposure_threshold: Option<f64>,
    sasa_path: Option<PathBuf>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain(mut self, chain: char) -> Self {
        self.chain = Some(chain);
        self
    }
    pub fn strategy_name(mut self, name: impl Into<String>) -> Self {
        self.strategy_name = Some(name.into());
        self
    }
    pub fn num_candidates(mut self, count: usize) -> Self {
        self.num_candidates = Some(count);
        self
    }
    pub fn exposure_threshold(mut self, threshold: f64) -> Self {
        self.exposure_threshold = Some(threshold);
        self
    }
    pub fn sasa_path(mut self, path: PathBuf) -> Self {
        self.sasa_path = Some(path);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        Ok(AnalysisConfig {
            chain: self.chain.ok_or(ConfigError::MissingParameter("chain"))?,
            strategy_name: self
                .strategy_name
                .ok_or(ConfigError::MissingParameter("strategy_name"))?,
            num_candidates: self
                .num_candidates
                .unwrap_or(DEFAULT_NUM_CANDIDATES)
                .min(MAX_CANDIDATES),
            exposure_threshold: self.exposure_threshold.unwrap_or(surface::SURFACE_THRESHOLD),
            sasa_path: self.sasa_path,
        })
    }
}

/// The classified surface table of one run together with its summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceAnalysis {
    pub table: Vec<SurfaceResidue>,
    pub summary: SurfaceSummary,
}

/// Everything one analysis run produces, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub structure: ParsedStructure,
    pub surface: Option<SurfaceAnalysis>,
    pub candidates: Vec<PeptideCandidate>,
}

/// Runs the full pipeline on an in-memory structure payload, resolving raw
/// surface areas through the given source.
///
/// Intake failures abort the run. A surface-source failure is downgraded to
/// the "no surface data" mode with a warning, so candidate generation always
/// runs.
#[instrument(skip_all, name = "analysis_workflow")]
pub fn run_with_source(
    pdb_text: &str,
    config: &AnalysisConfig,
    source: &impl SasaSource,
) -> Result<AnalysisReport, AnalysisError> {
    // === Phase 1: Structure intake ===
    let structure = PdbFile::read_from_str(pdb_text, config.chain)?;
    info!(
        chain = %config.chain,
        residues = structure.len(),
        "structure intake complete"
    );

    // === Phase 2: Surface classification (optional) ===
    let surface = match &config.sasa_path {
        Some(path) => match source.residue_areas(path) {
            Ok(raw_areas) => {
                let (table, summary) =
                    surface::classify_surface(&raw_areas, config.chain, config.exposure_threshold);
                info!(surface_residues = table.len(), "surface classification complete");
                Some(SurfaceAnalysis { table, summary })
            }
            Err(e) => {
                warn!(error = %e, "surface data unavailable, continuing without it");
                None
            }
        },
        None => None,
    };

    // === Phase 3: Candidate generation ===
    let candidates = candidates::suggest_peptides(
        &structure.sequence,
        &structure.residues,
        &config.strategy_name,
        config.num_candidates,
        surface.as_ref().map(|s| s.table.as_slice()),
    );
    info!(candidates = candidates.len(), "candidate generation complete");

    Ok(AnalysisReport {
        structure,
        surface,
        candidates,
    })
}

/// Runs the full pipeline with the default CSV-backed surface-area source.
pub fn run(pdb_text: &str, config: &AnalysisConfig) -> Result<AnalysisReport, AnalysisError> {
    run_with_source(pdb_text, config, &CsvAreaFile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sasa::{RawAreas, ResidueArea, ResidueKey, SasaError};
    use std::path::Path;

    struct FixtureSource(RawAreas);

    impl SasaSource for FixtureSource {
        fn residue_areas(&self, _path: &Path) -> Result<RawAreas, SasaError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl SasaSource for FailingSource {
        fn residue_areas(&self, path: &Path) -> Result<RawAreas, SasaError> {
            Err(SasaError::Io {
                path: path.to_string_lossy().to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }
    }

    fn atom_line(serial: usize, resname: &str, chain: char, resnum: i64) -> String {
        format!(
            "ATOM  {:>5}  CA  {:<3} {}{:>4}       0.000   0.000   0.000  1.00  0.00",
            serial, resname, chain, resnum
        )
    }

    fn fixture_pdb() -> String {
        let names = ["MET", "LYS", "THR", "ALA", "TYR", "ILE", "ALA", "LYS", "GLN", "ARG"];
        names
            .iter()
            .enumerate()
            .map(|(i, name)| atom_line(i + 1, name, 'A', (i + 1) as i64))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn config(sasa: bool) -> AnalysisConfig {
        let mut builder = AnalysisConfigBuilder::new()
            .chain('A')
            .strategy_name("OpenAI")
            .num_candidates(3);
        if sasa {
            builder = builder.sasa_path(PathBuf::from("areas.csv"));
        }
        builder.build().unwrap()
    }

    #[test]
    fn builder_requires_chain_and_strategy() {
        let missing_chain = AnalysisConfigBuilder::new().strategy_name("OpenAI").build();
        assert_eq!(missing_chain, Err(ConfigError::MissingParameter("chain")));
        let missing_strategy = AnalysisConfigBuilder::new().chain('A').build();
        assert_eq!(
            missing_strategy,
            Err(ConfigError::MissingParameter("strategy_name"))
        );
    }

    #[test]
    fn builder_applies_defaults_and_clamps_candidate_count() {
        let config = AnalysisConfigBuilder::new()
            .chain('A')
            .strategy_name("Groq")
            .build()
            .unwrap();
        assert_eq!(config.num_candidates, 5);
        assert_eq!(config.exposure_threshold, 0.0);

        let clamped = AnalysisConfigBuilder::new()
            .chain('A')
            .strategy_name("Groq")
            .num_candidates(500)
            .build()
            .unwrap();
        assert_eq!(clamped.num_candidates, MAX_CANDIDATES);
    }

    #[test]
    fn run_without_sasa_path_produces_candidates_only() {
        let report = run(&fixture_pdb(), &config(false)).unwrap();
        assert_eq!(report.structure.sequence, "MKTAYIAKQR");
        assert!(report.surface.is_none());
        assert_eq!(report.candidates.len(), 3);
    }

    #[test]
    fn run_with_surface_data_anchors_candidates() {
        let raw = RawAreas::from_flat(vec![(
            ResidueKey {
                chain: 'A',
                number: 5,
            },
            ResidueArea {
                name: "TYR".to_string(),
                total: 60.0,
            },
        )]);
        let report = run_with_source(&fixture_pdb(), &config(true), &FixtureSource(raw)).unwrap();
        let surface = report.surface.as_ref().unwrap();
        assert_eq!(surface.table.len(), 1);
        assert_eq!(surface.summary.total_surface_residues, 1);
        assert_eq!(
            report.candidates[0].properties.get("Surface Target"),
            Some("Residue 5 (Hydrophobic)")
        );
    }

    #[test]
    fn run_degrades_to_no_surface_mode_when_source_fails() {
        let report = run_with_source(&fixture_pdb(), &config(true), &FailingSource).unwrap();
        assert!(report.surface.is_none());
        assert_eq!(report.candidates.len(), 3);
        assert_eq!(
            report.candidates[0].properties.get("SASA"),
            Some("N/A")
        );
    }

    #[test]
    fn run_halts_on_missing_chain() {
        let mut config = config(false);
        config.chain = 'Z';
        let result = run(&fixture_pdb(), &config);
        assert!(matches!(
            result,
            Err(AnalysisError::Intake {
                source: PdbError::ChainNotFound { chain: 'Z' }
            })
        ));
    }

    #[test]
    fn run_with_unsupported_strategy_yields_diagnostic_candidate() {
        let mut config = config(false);
        config.strategy_name = "Cohere".to_string();
        let report = run(&fixture_pdb(), &config).unwrap();
        assert_eq!(report.candidates.len(), 1);
        assert!(report.candidates[0].explanation.contains("Cohere"));
        assert!(report.candidates[0].explanation.contains("not supported"));
    }
}
