//! # Core Module
//!
//! Fundamental building blocks of fpsim: the fingerprint and molecule data models, the
//! Tanimoto similarity coefficient, and readers that load molecule records from disk.
//!
//! - **Data Models** ([`models`]) - Validated bit-vector fingerprints and molecule records
//! - **Similarity** ([`similarity`]) - The Tanimoto coefficient and its edge-case policies
//! - **File I/O** ([`io`]) - JSON and CSV readers for molecule record collections

pub mod io;
pub mod models;
pub mod similarity;
