//! # Workflows Module
//!
//! This module provides the high-level entry point that orchestrates a
//! complete analysis run, from structure intake through surface
//! classification to candidate generation.
//!
//! ## Overview
//!
//! Workflows are the top-level API for users of the library. Each run is a
//! single-threaded, request-scoped computation with no shared state: intake
//! failures halt the pipeline before partial results, while a failure of the
//! external surface computation degrades the run to its "no surface data"
//! mode instead of aborting it.
//!
//! - **Analysis Workflow** ([`analyze`]) - Full pipeline execution with
//!   builder-validated configuration and a serializable report.

pub mod analyze;
