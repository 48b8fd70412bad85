//! # Analysis Module
//!
//! Surface analysis for the peptide candidate pipeline.
//!
//! ## Overview
//!
//! The analysis layer turns raw per-residue solvent accessibility into a
//! classified, sorted surface table and an aggregate summary. The numeric
//! SASA computation itself is an external collaborator hidden behind the
//! narrow [`sasa::SasaSource`] boundary, so the classifier is a pure
//! function testable against synthetic fixtures with no native dependency.
//!
//! - **SASA Intake** ([`sasa`]) - Raw per-residue area acquisition and the
//!   flat-or-nested keying contract
//! - **Surface Classification** ([`surface`]) - Filtering, side-chain
//!   property classification, and summary aggregation

pub mod sasa;
pub mod surface;
