//! Data structures for fingerprints and the molecule records that carry them.

pub mod fingerprint;
pub mod molecule;
