//! # Workflows Module
//!
//! High-level entry points that run a complete analysis over a set of molecule records.
//!
//! - **Analysis Workflow** ([`analyze`]) - Pairwise comparison followed by the statistics
//!   summary for both fingerprint kinds.

pub mod analyze;
