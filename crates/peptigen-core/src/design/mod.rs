//! # Design Module
//!
//! Peptide candidate generation for the analysis pipeline.
//!
//! ## Overview
//!
//! Given the primary sequence, the residue list, and the optional classified
//! surface table, this layer derives a fixed count of peptide candidate
//! records, each carrying a subsequence, a small set of descriptive
//! properties, and a human-readable rationale. Generation is deterministic
//! and side-effect free; the interchangeable "strategies" differ only in
//! their fallback slicing rule and presentation formulas.
//!
//! - **Strategies** ([`strategy`]) - The named generation variants and
//!   their per-strategy descriptors
//! - **Candidates** ([`candidates`]) - The shared generation core and the
//!   public `suggest_peptides` entry point

pub mod candidates;
pub mod strategy;
