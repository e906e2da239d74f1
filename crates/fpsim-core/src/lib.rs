//! # fpsim Core Library
//!
//! Pairwise similarity statistics for molecular fingerprints. Every unordered pair of
//! molecules in an input set is compared with the Tanimoto coefficient for two fingerprint
//! encodings, and the resulting samples are summarized into descriptive statistics and
//! exact-match rates.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Fingerprint`, `MoleculeRecord`),
//!   the Tanimoto coefficient calculator and input readers.
//!
//! - **[`engine`]: The Logic Core.** Configuration, error taxonomy, progress reporting, the
//!   pairwise enumeration engine and the statistics aggregator.
//!
//! - **[`workflows`]: The Public API.** Composes the engine into a single call that turns a
//!   set of molecule records into a `SimilarityReport`.

pub mod core;
pub mod engine;
pub mod workflows;
