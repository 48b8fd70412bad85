use crate::analysis::surface::SurfaceResidue;
use crate::core::models::residue::ResidueRecord;
use crate::design::strategy::Strategy;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

/// Ordered display attributes of a peptide candidate.
///
/// Keys keep their insertion order so reports render the attributes the way
/// the strategy emitted them; serialization produces a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties(Vec<(String, String)>);

impl Properties {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn push(&mut self, key: &str, value: impl Into<String>) {
        self.0.push((key.to_string(), value.into()));
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One derived peptide candidate.
///
/// Purely derived from the generation inputs; carries no identity across
/// calls.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PeptideCandidate {
    pub sequence: String,
    pub properties: Properties,
    pub explanation: String,
}

/// Window of the primary sequence centered on the anchor's residue number.
fn anchored_window(sequence: &str, position: i64) -> String {
    let chars: Vec<char> = sequence.chars().collect();
    let len = chars.len() as i64;
    let lo = (position - 4).clamp(0, len);
    let hi = (position + 4).clamp(lo, len);
    chars[lo as usize..hi as usize].iter().collect()
}

fn build_candidate(
    sequence: &str,
    surface_table: Option<&[SurfaceResidue]>,
    strategy: Strategy,
    index: usize,
) -> PeptideCandidate {
    let anchor = surface_table
        .filter(|table| !table.is_empty())
        .and_then(|table| table.get(index));

    let mut properties = Properties::default();
    match anchor {
        Some(anchor) => {
            let window = anchored_window(sequence, anchor.residue_number);
            let pep_seq = if window.chars().count() < 8 {
                strategy.fallback_window(sequence, index)
            } else {
                window
            };
            properties.push("Length", pep_seq.chars().count().to_string());
            properties.push("Net charge", strategy.net_charge(index).to_string());
            properties.push(
                "Hydrophobicity",
                strategy.hydrophobicity_label(index, Some(anchor)),
            );
            properties.push(
                "Surface Target",
                format!("Residue {} ({})", anchor.residue_number, anchor.property),
            );
            properties.push("SASA", format!("{} Å²", anchor.sasa));
            PeptideCandidate {
                sequence: pep_seq,
                properties,
                explanation: strategy.anchored_explanation(anchor),
            }
        }
        None => {
            let pep_seq = strategy.fallback_window(sequence, index);
            properties.push("Length", pep_seq.chars().count().to_string());
            properties.push("Net charge", strategy.net_charge(index).to_string());
            properties.push("Hydrophobicity", strategy.hydrophobicity_label(index, None));
            properties.push("Surface Target", strategy.general_target());
            properties.push("SASA", "N/A");
            PeptideCandidate {
                sequence: pep_seq,
                properties,
                explanation: strategy.general_explanation(),
            }
        }
    }
}

/// Derives exactly `count` peptide candidates from the sequence and the
/// optional surface table.
///
/// While `index` falls inside the surface table, the candidate anchors on
/// the table's `index`-th residue; anchored windows shorter than 8 residues
/// and indices past the table fall back to the strategy's deterministic
/// slice, so the result always has length `count`. Pure; mutates neither
/// input.
pub fn generate_candidates(
    sequence: &str,
    residues: &[ResidueRecord],
    surface_table: Option<&[SurfaceResidue]>,
    strategy: Strategy,
    count: usize,
) -> Vec<PeptideCandidate> {
    debug!(
        residues = residues.len(),
        strategy = %strategy,
        count,
        surface = surface_table.map_or(0, <[SurfaceResidue]>::len),
        "generating peptide candidates"
    );
    (0..count)
        .map(|index| build_candidate(sequence, surface_table, strategy, index))
        .collect()
}

/// Strategy-name entry point for candidate generation.
///
/// An unknown strategy name is a signaled, non-fatal outcome: the result is
/// a single diagnostic record naming the unsupported strategy, so batch
/// generation never partially fails.
pub fn suggest_peptides(
    sequence: &str,
    residues: &[ResidueRecord],
    strategy_name: &str,
    count: usize,
    surface_table: Option<&[SurfaceResidue]>,
) -> Vec<PeptideCandidate> {
    match Strategy::from_name(strategy_name) {
        Some(strategy) => generate_candidates(sequence, residues, surface_table, strategy, count),
        None => vec![PeptideCandidate {
            sequence: String::new(),
            properties: Properties::default(),
            explanation: format!("Strategy '{}' is not supported.", strategy_name),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chem::SurfaceProperty;

    const SEQ: &str = "MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQAPILSRVGDGTQDNLSGAEKAVQVKVKALPDAQFEVVHSLAKWKRQTLGQHDFSAGEGLYTHMKALRPDEDRLSPLHSVYVDQWDWELVMGDRERPFFKEIVRDVAQGKQQTGTGPSSLG";

    fn surface_residue(number: i64, name: &str, property: SurfaceProperty) -> SurfaceResidue {
        SurfaceResidue {
            residue_name: name.to_string(),
            residue_number: number,
            chain: 'A',
            sasa: 42.5,
            property,
        }
    }

    #[test]
    fn generate_candidates_returns_exactly_count_records() {
        for count in [0, 1, 5, 50] {
            let candidates = generate_candidates(SEQ, &[], None, Strategy::OpenAi, count);
            assert_eq!(candidates.len(), count);
        }
    }

    #[test]
    fn generate_candidates_handles_sequences_around_the_window_minimum() {
        for sequence in ["MKT", "MKTAYIAK", SEQ] {
            let candidates = generate_candidates(sequence, &[], None, Strategy::Mistral, 3);
            assert_eq!(candidates.len(), 3);
            assert!(candidates.iter().all(|c| !c.sequence.is_empty()));
        }
    }

    #[test]
    fn anchored_candidates_use_centered_windows_then_fall_back() {
        // Surface residues at positions 10, 50, 100; five candidates requested.
        let table = vec![
            surface_residue(10, "LYS", SurfaceProperty::Charged),
            surface_residue(50, "ALA", SurfaceProperty::Hydrophobic),
            surface_residue(100, "SER", SurfaceProperty::PolarOther),
        ];
        let candidates = generate_candidates(SEQ, &[], Some(&table), Strategy::OpenAi, 5);
        assert_eq!(candidates.len(), 5);
        assert_eq!(candidates[0].sequence, &SEQ[6..14]);
        assert_eq!(candidates[1].sequence, &SEQ[46..54]);
        assert_eq!(candidates[2].sequence, &SEQ[96..104]);
        // Indices past the table use the strategy's forward fallback slice.
        assert_eq!(candidates[3].sequence, &SEQ[3..11]);
        assert_eq!(candidates[4].sequence, &SEQ[4..12]);
    }

    #[test]
    fn anchored_candidates_report_target_and_sasa() {
        let table = vec![surface_residue(10, "LYS", SurfaceProperty::Charged)];
        let candidates = generate_candidates(SEQ, &[], Some(&table), Strategy::OpenAi, 1);
        let properties = &candidates[0].properties;
        assert_eq!(properties.get("Surface Target"), Some("Residue 10 (Charged)"));
        assert_eq!(properties.get("SASA"), Some("42.5 Å²"));
        assert_eq!(properties.get("Net charge"), Some("-1"));
        assert_eq!(properties.get("Hydrophobicity"), Some("Low"));
        assert!(candidates[0].explanation.contains("residue 10"));
    }

    #[test]
    fn short_anchored_window_falls_back_to_strategy_slice() {
        // Position 1 yields a 5-residue window, below the 8-residue minimum.
        let table = vec![surface_residue(1, "MET", SurfaceProperty::Hydrophobic)];
        let candidates = generate_candidates(SEQ, &[], Some(&table), Strategy::OpenAi, 1);
        assert_eq!(candidates[0].sequence, &SEQ[0..8]);
    }

    #[test]
    fn empty_surface_table_behaves_like_no_surface_data() {
        let sequence = "MKTAYIAKQRQI"; // 12 residues
        let candidates = generate_candidates(sequence, &[], Some(&[]), Strategy::Anthropic, 3);
        assert_eq!(candidates.len(), 3);
        for (index, candidate) in candidates.iter().enumerate() {
            let len = sequence.len();
            let expected: String = sequence
                .chars()
                .skip(len - (index + 8))
                .take(8)
                .collect();
            assert_eq!(candidate.sequence, expected);
            assert_eq!(
                candidate.properties.get("Surface Target"),
                Some("General region")
            );
            assert_eq!(candidate.properties.get("SASA"), Some("N/A"));
        }
    }

    #[test]
    fn generate_candidates_does_not_mutate_inputs() {
        let table = vec![surface_residue(10, "LYS", SurfaceProperty::Charged)];
        let before = table.clone();
        let _ = generate_candidates(SEQ, &[], Some(&table), Strategy::Groq, 4);
        assert_eq!(table, before);
    }

    #[test]
    fn suggest_peptides_dispatches_by_name() {
        let candidates = suggest_peptides(SEQ, &[], "Mistral", 2, None);
        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].explanation.starts_with("[Mistral]"));
    }

    #[test]
    fn suggest_peptides_reports_unsupported_strategy_as_diagnostic_record() {
        let candidates = suggest_peptides(SEQ, &[], "Cohere", 5, None);
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].sequence.is_empty());
        assert!(candidates[0].properties.is_empty());
        assert!(candidates[0].explanation.contains("Cohere"));
        assert!(candidates[0].explanation.contains("not supported"));
    }

    #[test]
    fn properties_preserve_insertion_order() {
        let candidates = generate_candidates(SEQ, &[], None, Strategy::Groq, 1);
        let keys: Vec<&str> = candidates[0].properties.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["Length", "Net charge", "Hydrophobicity", "Surface Target", "SASA"]
        );
    }
}
