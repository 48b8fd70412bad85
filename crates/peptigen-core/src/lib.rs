//! # Peptigen Core Library
//!
//! A library for deriving surface-aware peptide candidates from protein
//! structures, covering chain intake, residue-level surface classification,
//! and deterministic candidate generation.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`ResidueRecord`, `ParsedStructure`), static residue chemistry tables,
//!   and structure-file I/O.
//!
//! - **[`analysis`] and [`design`]: The Logic Core.** `analysis` turns raw
//!   per-residue solvent accessibility into a classified surface table and
//!   aggregate summary; `design` turns sequence, residues, and the optional
//!   surface table into a ranked list of peptide candidates via
//!   interchangeable generation strategies.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level,
//!   user-facing layer. It ties intake, analysis, and design together into a
//!   single analysis run, providing a simple and powerful entry point for
//!   end-users of the library.

pub mod analysis;
pub mod core;
pub mod design;
pub mod workflows;
