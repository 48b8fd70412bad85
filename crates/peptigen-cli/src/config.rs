use crate::cli::SuggestArgs;
use crate::error::{CliError, Result};
use peptigen::workflows::analyze::{AnalysisConfig, AnalysisConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_CHAIN: char = 'A';
const DEFAULT_STRATEGY: &str = "OpenAI";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialAnalysisSection {
    chain: Option<char>,
    strategy: Option<String>,
    #[serde(rename = "num-peptides")]
    num_peptides: Option<usize>,
    #[serde(rename = "exposure-threshold")]
    exposure_threshold: Option<f64>,
    #[serde(rename = "sasa-path")]
    sasa_path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAnalysisConfig {
    analysis: Option<PartialAnalysisSection>,
}

impl PartialAnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Produces the final core configuration, with CLI arguments taking
    /// precedence over file values and file values over defaults.
    pub fn merge_with_cli(mut self, args: &SuggestArgs) -> Result<AnalysisConfig> {
        let section = self.analysis.take().unwrap_or_default();

        let mut builder = AnalysisConfigBuilder::new()
            .chain(args.chain.or(section.chain).unwrap_or(DEFAULT_CHAIN))
            .strategy_name(
                args.strategy
                    .clone()
                    .or(section.strategy)
                    .unwrap_or_else(|| DEFAULT_STRATEGY.to_string()),
            );
        if let Some(count) = args.num_peptides.or(section.num_peptides) {
            builder = builder.num_candidates(count);
        }
        if let Some(threshold) = args.threshold.or(section.exposure_threshold) {
            builder = builder.exposure_threshold(threshold);
        }
        if let Some(path) = args.sasa.clone().or(section.sasa_path) {
            builder = builder.sasa_path(path);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }
}
