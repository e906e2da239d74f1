use super::fingerprint::Fingerprint;
use serde::Serialize;
use std::fmt;

/// The two fingerprint encodings carried by every molecule record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FingerprintKind {
    /// The topological-index fingerprint under evaluation (`new_fp`).
    Primary,
    /// The Morgan circular fingerprint used as the reference (`morgan_fp`).
    Comparison,
}

impl FingerprintKind {
    pub const ALL: [FingerprintKind; 2] = [FingerprintKind::Primary, FingerprintKind::Comparison];

    pub fn label(&self) -> &'static str {
        match self {
            FingerprintKind::Primary => "NEW FP",
            FingerprintKind::Comparison => "MORGAN FP",
        }
    }
}

impl fmt::Display for FingerprintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoleculeRecord {
    pub primary: Fingerprint,
    pub comparison: Fingerprint,
}

impl MoleculeRecord {
    pub fn new(primary: Fingerprint, comparison: Fingerprint) -> Self {
        Self {
            primary,
            comparison,
        }
    }

    #[inline]
    pub fn fingerprint(&self, kind: FingerprintKind) -> &Fingerprint {
        match kind {
            FingerprintKind::Primary => &self.primary,
            FingerprintKind::Comparison => &self.comparison,
        }
    }
}
