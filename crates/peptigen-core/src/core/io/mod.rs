//! # I/O Module
//!
//! Structure-file intake for the peptide candidate pipeline.
//!
//! ## Overview
//!
//! Intake is the only fallible boundary of the core library: a malformed
//! payload or a chain with zero residues is a caller-visible error, never a
//! silently tolerated condition. Parsing produces a read-only
//! [`ParsedStructure`](crate::core::models::residue::ParsedStructure) per
//! requested chain; everything downstream is pure.
//!
//! - **Format Abstraction** ([`traits`]) - Common reading interface for
//!   structure file formats
//! - **PDB Reading** ([`pdb`]) - Fixed-column `ATOM` record parsing

pub mod pdb;
pub mod traits;
