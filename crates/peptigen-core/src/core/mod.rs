//! # Core Module
//!
//! This module provides the fundamental building blocks for the peptide
//! candidate pipeline, serving as the stateless foundation of the library.
//!
//! ## Overview
//!
//! The core module holds everything the analysis and design layers consume
//! but never mutate: residue-level data models, static amino-acid chemistry
//! tables, and structure-file parsing. All values produced here are
//! request-scoped and read-only downstream.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Residue Chemistry** ([`chem`]) - Standard-residue tables and the
//!   fixed side-chain property partition shared by every downstream layer
//! - **Molecular Representation** ([`models`]) - Residue records and the
//!   per-chain parsed structure
//! - **File I/O** ([`io`]) - Reading protein structure files into the model

pub mod chem;
pub mod io;
pub mod models;
