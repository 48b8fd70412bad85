use crate::analysis::surface::SurfaceResidue;
use crate::core::chem::SurfaceProperty;
use serde::Serialize;
use std::fmt;

/// A named, deterministic candidate-generation variant.
///
/// Strategies are keyed by the model-provider names of the host application
/// and differ only in their fallback slicing rule and presentation formulas.
/// The net-charge and hydrophobicity figures below are per-strategy house
/// styles, not physicochemical computations; they fill the candidate's
/// property slots deterministically until a real scoring backend replaces
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strategy {
    OpenAi,
    Anthropic,
    Groq,
    Mistral,
}

impl Strategy {
    /// Parses a strategy from its display name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "openai" => Some(Strategy::OpenAi),
            "anthropic" => Some(Strategy::Anthropic),
            "groq" => Some(Strategy::Groq),
            "mistral" => Some(Strategy::Mistral),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::OpenAi => "OpenAI",
            Strategy::Anthropic => "Anthropic",
            Strategy::Groq => "Groq",
            Strategy::Mistral => "Mistral",
        }
    }

    /// The deterministic fallback window for candidate `index` when no
    /// usable anchored window exists.
    ///
    /// Every rule yields at most 8 residues and the whole sequence when it
    /// is shorter than that, so every candidate carries a usable sequence.
    pub(crate) fn fallback_window(&self, sequence: &str, index: usize) -> String {
        let chars: Vec<char> = sequence.chars().collect();
        let len = chars.len();
        let first_eight = || chars[..len.min(8)].iter().collect::<String>();
        let last_eight = || chars[len.saturating_sub(8)..].iter().collect::<String>();
        if len < index + 8 {
            return match self {
                Strategy::OpenAi | Strategy::Mistral => last_eight(),
                Strategy::Anthropic | Strategy::Groq => first_eight(),
            };
        }
        match self {
            // Forward slice.
            Strategy::OpenAi => chars[index..index + 8].iter().collect(),
            // The 8 residues ending `index` from the sequence end.
            Strategy::Anthropic => chars[len - (index + 8)..len - index].iter().collect(),
            // Forward slice of the reversed sequence.
            Strategy::Groq => chars.iter().rev().skip(index).take(8).collect(),
            // Forward slice, reversed.
            Strategy::Mistral => chars[index..index + 8].iter().rev().collect(),
        }
    }

    pub(crate) fn net_charge(&self, index: usize) -> i64 {
        let index = index as i64;
        match self {
            Strategy::OpenAi => index - 1,
            Strategy::Anthropic => index,
            Strategy::Groq => 1 - index,
            Strategy::Mistral => 2,
        }
    }

    pub(crate) fn hydrophobicity_label(
        &self,
        index: usize,
        anchor: Option<&SurfaceResidue>,
    ) -> &'static str {
        match self {
            Strategy::OpenAi => match anchor {
                Some(residue) if residue.property == SurfaceProperty::Charged => "Low",
                Some(_) => "Moderate",
                None => {
                    if index % 2 == 0 {
                        "Low"
                    } else {
                        "Moderate"
                    }
                }
            },
            Strategy::Anthropic | Strategy::Mistral => "Moderate",
            Strategy::Groq => {
                if index % 2 == 0 {
                    "High"
                } else {
                    "Low"
                }
            }
        }
    }

    /// Target label used when no surface anchor exists.
    pub(crate) fn general_target(&self) -> &'static str {
        match self {
            Strategy::OpenAi => "General surface region",
            Strategy::Anthropic | Strategy::Groq | Strategy::Mistral => "General region",
        }
    }

    pub(crate) fn anchored_explanation(&self, anchor: &SurfaceResidue) -> String {
        let property_lower = anchor.property.to_string().to_lowercase();
        match self {
            Strategy::OpenAi => {
                let interaction = if anchor.property == SurfaceProperty::Charged {
                    "electrostatic"
                } else {
                    "hydrophobic"
                };
                format!(
                    "This peptide targets surface-exposed residue {} ({}) with {} Å² SASA. \
                     The {} nature of this residue suggests potential for {} interactions. \
                     Peptide designed to complement the surface topology and chemical environment.",
                    anchor.residue_number, anchor.residue_name, anchor.sasa, property_lower, interaction
                )
            }
            Strategy::Anthropic => format!(
                "[Anthropic] Peptide designed to interact with surface residue {} ({}, {} Å² SASA). \
                 Optimized for {} surface interactions.",
                anchor.residue_number, anchor.property, anchor.sasa, property_lower
            ),
            Strategy::Groq => format!(
                "[Groq] High-performance peptide targeting surface residue {} ({}, {} Å²). \
                 Optimized for rapid binding and specificity.",
                anchor.residue_number, anchor.property, anchor.sasa
            ),
            Strategy::Mistral => format!(
                "[Mistral] Peptide designed for surface residue {} ({}, {} Å²). \
                 Balanced approach for stability and binding affinity.",
                anchor.residue_number, anchor.property, anchor.sasa
            ),
        }
    }

    pub(crate) fn general_explanation(&self) -> String {
        match self {
            Strategy::OpenAi => {
                "Additional peptide candidate targeting general surface regions with sequence diversity."
                    .to_string()
            }
            Strategy::Anthropic => {
                "[Anthropic] Peptide selected for sequence diversity and potential surface interaction."
                    .to_string()
            }
            Strategy::Groq => {
                "[Groq] Peptide selected for diversity and potential surface interaction.".to_string()
            }
            Strategy::Mistral => {
                "[Mistral] Chosen for sequence uniqueness and possible functional relevance."
                    .to_string()
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
