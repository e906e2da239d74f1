use crate::core::models::molecule::FingerprintKind;
use crate::core::similarity::SimilarityError;
use thiserror::Error;

use super::config::ConfigError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("At least two molecule records are required, found {found}")]
    InsufficientRecords { found: usize },

    #[error("At least two similarity samples are required, found {found}")]
    InsufficientSamples { found: usize },

    #[error("Similarity of {kind} between molecules {first} and {second} failed: {source}")]
    Similarity {
        first: usize,
        second: usize,
        kind: FingerprintKind,
        #[source]
        source: SimilarityError,
    },
}
