use crate::core::models::molecule::{FingerprintKind, MoleculeRecord};
use crate::core::similarity::{SimilarityPolicy, tanimoto};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The outcome of comparing one unordered pair of molecules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairComparison {
    pub first: usize,
    pub second: usize,
    pub primary: f64,
    pub comparison: f64,
    pub primary_identical: bool,
    pub comparison_identical: bool,
}

/// Similarity samples and exact-match counters accumulated over every pair.
///
/// Samples are stored in row-major pair order: `(0, 1), (0, 2), ..., (1, 2), ...`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairwiseSamples {
    pub primary: Vec<f64>,
    pub comparison: Vec<f64>,
    pub primary_exact_matches: u64,
    pub comparison_exact_matches: u64,
    pub total_pairs: u64,
}

impl PairwiseSamples {
    fn with_capacity(pairs: usize) -> Self {
        Self {
            primary: Vec::with_capacity(pairs),
            comparison: Vec::with_capacity(pairs),
            ..Default::default()
        }
    }

    fn record(&mut self, pair: &PairComparison) {
        self.total_pairs += 1;
        if pair.primary_identical {
            self.primary_exact_matches += 1;
        }
        if pair.comparison_identical {
            self.comparison_exact_matches += 1;
        }
        self.primary.push(pair.primary);
        self.comparison.push(pair.comparison);
    }

    pub fn samples(&self, kind: FingerprintKind) -> &[f64] {
        match kind {
            FingerprintKind::Primary => &self.primary,
            FingerprintKind::Comparison => &self.comparison,
        }
    }

    pub fn exact_matches(&self, kind: FingerprintKind) -> u64 {
        match kind {
            FingerprintKind::Primary => self.primary_exact_matches,
            FingerprintKind::Comparison => self.comparison_exact_matches,
        }
    }
}

/// Number of unordered pairs among `n` molecules.
#[inline]
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Iterates every unordered pair `(i, j)` with `i < j < n` exactly once, row by row.
pub fn pair_indices(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

pub fn compare_pair(
    records: &[MoleculeRecord],
    first: usize,
    second: usize,
    policy: &SimilarityPolicy,
) -> Result<PairComparison, EngineError> {
    let a = &records[first];
    let b = &records[second];

    let comparison = PairComparison {
        first,
        second,
        primary: coefficient(a, b, first, second, FingerprintKind::Primary, policy)?,
        comparison: coefficient(a, b, first, second, FingerprintKind::Comparison, policy)?,
        primary_identical: a.primary == b.primary,
        comparison_identical: a.comparison == b.comparison,
    };
    trace!(?comparison, "Compared pair.");
    Ok(comparison)
}

fn coefficient(
    a: &MoleculeRecord,
    b: &MoleculeRecord,
    first: usize,
    second: usize,
    kind: FingerprintKind,
    policy: &SimilarityPolicy,
) -> Result<f64, EngineError> {
    tanimoto(a.fingerprint(kind), b.fingerprint(kind), policy).map_err(|source| {
        EngineError::Similarity {
            first,
            second,
            kind,
            source,
        }
    })
}

fn compare_row(
    records: &[MoleculeRecord],
    first: usize,
    policy: &SimilarityPolicy,
) -> Result<Vec<PairComparison>, EngineError> {
    (first + 1..records.len())
        .map(|second| compare_pair(records, first, second, policy))
        .collect()
}

/// Compares every unordered pair of molecules and accumulates the samples.
///
/// One progress step is reported per row of the comparison triangle. Rows may be processed
/// in parallel, but samples are always assembled in row-major order and the first failing
/// pair in that order is the one reported.
///
/// # Errors
///
/// Returns [`EngineError::InsufficientRecords`] for fewer than two records, and
/// [`EngineError::Similarity`] when a coefficient cannot be computed.
#[instrument(skip_all, name = "pairwise_task")]
pub fn run(
    records: &[MoleculeRecord],
    policy: &SimilarityPolicy,
    reporter: &ProgressReporter,
) -> Result<PairwiseSamples, EngineError> {
    let n = records.len();
    if n < 2 {
        return Err(EngineError::InsufficientRecords { found: n });
    }

    let rows = n - 1;
    info!(
        molecules = n,
        pairs = pair_count(n),
        "Starting pairwise comparison."
    );
    reporter.report(Progress::TaskStart {
        total_steps: rows as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = 0..rows;

    #[cfg(feature = "parallel")]
    let iterator = (0..rows).into_par_iter();

    let row_results: Vec<Result<Vec<PairComparison>, EngineError>> = iterator
        .map(|first| {
            let row = compare_row(records, first, policy);
            reporter.report(Progress::TaskIncrement);
            row
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let mut samples = PairwiseSamples::with_capacity(pair_count(n));
    for row in row_results {
        for pair in row? {
            samples.record(&pair);
        }
    }

    info!(
        total_pairs = samples.total_pairs,
        primary_exact_matches = samples.primary_exact_matches,
        comparison_exact_matches = samples.comparison_exact_matches,
        "Pairwise comparison finished."
    );
    Ok(samples)
}
