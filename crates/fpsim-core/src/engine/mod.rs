//! # Engine Module
//!
//! The computational layer of fpsim: it enumerates every unordered pair of molecules,
//! collects Tanimoto samples and exact-match counts per fingerprint kind, and condenses
//! them into descriptive statistics.
//!
//! - **Configuration** ([`config`]) - Field names and similarity edge-case policies
//! - **Pairwise Enumeration** ([`pairwise`]) - The `i < j` comparison loop and its samples
//! - **Statistics** ([`statistics`]) - Mean, extrema, sample deviation and match rates
//! - **Progress Monitoring** ([`progress`]) - Optional observer for long-running loops
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod error;
pub mod pairwise;
pub mod progress;
pub mod statistics;
