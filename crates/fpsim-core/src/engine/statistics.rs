use crate::core::models::molecule::FingerprintKind;
use crate::core::similarity::round_to;
use crate::engine::error::EngineError;
use crate::engine::pairwise::PairwiseSamples;
use serde::Serialize;

/// Decimal places kept on exact-match rates.
pub const PERMYRIAD_PRECISION: u32 = 2;

/// Descriptive statistics of one similarity-sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleStatistics {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    /// Sample standard deviation (`N - 1` denominator).
    pub std_dev: f64,
}

impl SampleStatistics {
    /// # Errors
    ///
    /// Returns [`EngineError::InsufficientSamples`] for fewer than two samples, since the
    /// sample standard deviation is undefined there.
    pub fn from_samples(samples: &[f64]) -> Result<Self, EngineError> {
        let n = samples.len();
        if n < 2 {
            return Err(EngineError::InsufficientSamples { found: n });
        }

        let mean = samples.iter().sum::<f64>() / n as f64;
        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        let squared_deviations: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
        let std_dev = (squared_deviations / (n - 1) as f64).sqrt();

        Ok(Self {
            mean,
            max,
            min,
            std_dev,
        })
    }
}

/// Exact matches per ten thousand pairs, rounded to [`PERMYRIAD_PRECISION`] places.
pub fn exact_match_permyriad(matches: u64, total_pairs: u64) -> Result<f64, EngineError> {
    if total_pairs == 0 {
        return Err(EngineError::InsufficientSamples { found: 0 });
    }
    Ok(round_to(
        matches as f64 / total_pairs as f64 * 10_000.0,
        PERMYRIAD_PRECISION,
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindReport {
    pub kind: FingerprintKind,
    pub statistics: SampleStatistics,
    pub exact_matches: u64,
    pub exact_match_permyriad: f64,
}

impl KindReport {
    pub fn from_samples(
        kind: FingerprintKind,
        samples: &PairwiseSamples,
    ) -> Result<Self, EngineError> {
        let exact_matches = samples.exact_matches(kind);
        Ok(Self {
            kind,
            statistics: SampleStatistics::from_samples(samples.samples(kind))?,
            exact_matches,
            exact_match_permyriad: exact_match_permyriad(exact_matches, samples.total_pairs)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    pub molecules: usize,
    pub total_pairs: u64,
    pub primary: KindReport,
    pub comparison: KindReport,
}

impl SimilarityReport {
    pub fn from_samples(molecules: usize, samples: &PairwiseSamples) -> Result<Self, EngineError> {
        Ok(Self {
            molecules,
            total_pairs: samples.total_pairs,
            primary: KindReport::from_samples(FingerprintKind::Primary, samples)?,
            comparison: KindReport::from_samples(FingerprintKind::Comparison, samples)?,
        })
    }

    pub fn kind(&self, kind: FingerprintKind) -> &KindReport {
        match kind {
            FingerprintKind::Primary => &self.primary,
            FingerprintKind::Comparison => &self.comparison,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn statistics_match_hand_computed_values() {
        let stats = SampleStatistics::from_samples(&[0.2, 0.4, 0.6, 0.8]).unwrap();
        assert!(f64_approx_equal(stats.mean, 0.5));
        assert_eq!(stats.max, 0.8);
        assert_eq!(stats.min, 0.2);
        // sqrt(0.2 / 3)
        assert!(f64_approx_equal(stats.std_dev, 0.258198889747161));
    }

    #[test]
    fn std_dev_uses_sample_denominator() {
        let stats = SampleStatistics::from_samples(&[1.0, 0.5, 0.5]).unwrap();
        // variance = (1/9 + 1/36 + 1/36) / 2 = 1/12
        assert!(f64_approx_equal(stats.std_dev, (1.0f64 / 12.0).sqrt()));
    }

    #[test]
    fn constant_samples_have_zero_deviation() {
        let stats = SampleStatistics::from_samples(&[0.7, 0.7, 0.7]).unwrap();
        assert!(f64_approx_equal(stats.mean, 0.7));
        assert!(f64_approx_equal(stats.std_dev, 0.0));
    }

    #[test]
    fn fewer_than_two_samples_are_rejected() {
        assert!(matches!(
            SampleStatistics::from_samples(&[]),
            Err(EngineError::InsufficientSamples { found: 0 })
        ));
        assert!(matches!(
            SampleStatistics::from_samples(&[0.5]),
            Err(EngineError::InsufficientSamples { found: 1 })
        ));
    }

    #[test]
    fn permyriad_is_rounded_to_two_places() {
        assert_eq!(exact_match_permyriad(1, 6).unwrap(), 1666.67);
        assert_eq!(exact_match_permyriad(1, 3).unwrap(), 3333.33);
        assert_eq!(exact_match_permyriad(0, 10).unwrap(), 0.0);
        assert_eq!(exact_match_permyriad(5, 5).unwrap(), 10_000.0);
    }

    #[test]
    fn permyriad_without_pairs_is_rejected() {
        assert!(matches!(
            exact_match_permyriad(0, 0),
            Err(EngineError::InsufficientSamples { found: 0 })
        ));
    }

    #[test]
    fn report_aggregates_both_kinds() {
        let samples = PairwiseSamples {
            primary: vec![0.33333, 0.66667, 0.66667],
            comparison: vec![1.0, 0.5, 0.5],
            primary_exact_matches: 0,
            comparison_exact_matches: 1,
            total_pairs: 3,
        };
        let report = SimilarityReport::from_samples(3, &samples).unwrap();

        assert_eq!(report.molecules, 3);
        assert_eq!(report.total_pairs, 3);
        assert_eq!(report.primary.kind, FingerprintKind::Primary);
        assert_eq!(report.primary.exact_match_permyriad, 0.0);
        assert_eq!(
            report.kind(FingerprintKind::Comparison).exact_match_permyriad,
            3333.33
        );
        assert!(f64_approx_equal(
            report.primary.statistics.mean,
            0.5555566666666667
        ));
    }

    #[test]
    fn report_serializes_to_json() {
        let samples = PairwiseSamples {
            primary: vec![0.5, 1.0],
            comparison: vec![0.25, 0.75],
            primary_exact_matches: 1,
            comparison_exact_matches: 0,
            total_pairs: 2,
        };
        let report = SimilarityReport::from_samples(2, &samples).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["primary"]["kind"], "primary");
        assert_eq!(value["primary"]["exact_match_permyriad"], 5000.0);
        assert_eq!(value["comparison"]["statistics"]["max"], 0.75);
    }
}
