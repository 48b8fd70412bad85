use crate::analysis::sasa::RawAreas;
use crate::core::chem::{self, SurfaceProperty};
use serde::Serialize;
use tracing::debug;

/// Exposure threshold for the full surface table: any positive SASA counts.
pub const SURFACE_THRESHOLD: f64 = 0.0;

/// Exposure threshold for the exposed-residue export, in square angstroms.
pub const EXPOSED_THRESHOLD: f64 = 25.0;

/// One classified surface-exposed residue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceResidue {
    pub residue_name: String,
    pub residue_number: i64,
    pub chain: char,
    pub sasa: f64,
    pub property: SurfaceProperty,
}

/// Aggregate statistics over a classified surface table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SurfaceSummary {
    pub total_surface_residues: usize,
    pub hydrophobic_count: usize,
    pub charged_count: usize,
    pub polar_count: usize,
    pub avg_sasa: f64,
    pub max_sasa: f64,
}

/// One residue of the unclassified exposed-residue export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposedResidue {
    pub chain: char,
    pub residue_number: i64,
    pub residue_name: String,
    pub sasa: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Filters raw per-residue areas down to the classified surface table of one
/// chain, and summarizes it.
///
/// The filtering order is fixed: restrict to `selected_chain`, drop
/// non-standard residue names, drop residues whose SASA is not strictly
/// above `exposure_threshold`, then classify the survivors. The table is
/// sorted by ascending residue number and the summary covers exactly the
/// filtered table. An absent chain is a valid "no exposed surface" result,
/// not an error.
pub fn classify_surface(
    raw_areas: &RawAreas,
    selected_chain: char,
    exposure_threshold: f64,
) -> (Vec<SurfaceResidue>, SurfaceSummary) {
    let mut table: Vec<SurfaceResidue> = Vec::new();
    for (key, area) in raw_areas.chain(selected_chain) {
        if !chem::is_standard_residue(&area.name) {
            continue;
        }
        if area.total <= exposure_threshold {
            continue;
        }
        table.push(SurfaceResidue {
            residue_name: area.name.clone(),
            residue_number: key.number,
            chain: selected_chain,
            sasa: area.total,
            property: chem::classify_residue(&area.name),
        });
    }
    table.sort_by_key(|r| r.residue_number);
    debug!(
        chain = %selected_chain,
        threshold = exposure_threshold,
        retained = table.len(),
        "surface classification complete"
    );
    let summary = summarize(&table);
    (table, summary)
}

/// Computes the aggregate summary of a classified surface table.
///
/// All counts and statistics are zero for an empty table.
pub fn summarize(table: &[SurfaceResidue]) -> SurfaceSummary {
    if table.is_empty() {
        return SurfaceSummary::default();
    }
    let total: f64 = table.iter().map(|r| r.sasa).sum();
    let max = table.iter().map(|r| r.sasa).fold(f64::MIN, f64::max);
    SurfaceSummary {
        total_surface_residues: table.len(),
        hydrophobic_count: table
            .iter()
            .filter(|r| r.property == SurfaceProperty::Hydrophobic)
            .count(),
        charged_count: table
            .iter()
            .filter(|r| r.property == SurfaceProperty::Charged)
            .count(),
        polar_count: table
            .iter()
            .filter(|r| r.property == SurfaceProperty::PolarOther)
            .count(),
        avg_sasa: round2(total / table.len() as f64),
        max_sasa: round2(max),
    }
}

/// Exposed-residue export: the chain, standard-residue, and threshold
/// filters of [`classify_surface`] without the property classification.
pub fn exposed_residues(
    raw_areas: &RawAreas,
    selected_chain: char,
    sasa_threshold: f64,
) -> Vec<ExposedResidue> {
    let mut exposed: Vec<ExposedResidue> = raw_areas
        .chain(selected_chain)
        .filter(|(_, area)| chem::is_standard_residue(&area.name))
        .filter(|(_, area)| area.total > sasa_threshold)
        .map(|(key, area)| ExposedResidue {
            chain: selected_chain,
            residue_number: key.number,
            residue_name: area.name.clone(),
            sasa: area.total,
        })
        .collect();
    exposed.sort_by_key(|r| r.residue_number);
    exposed
}
