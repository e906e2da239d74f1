use crate::core::models::molecule::MoleculeRecord;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::pairwise;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::statistics::SimilarityReport;
use tracing::{info, instrument};

#[instrument(skip_all, name = "analysis_workflow", fields(molecules = records.len()))]
pub fn run(
    records: &[MoleculeRecord],
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<SimilarityReport, EngineError> {
    // === Phase 1: Pairwise comparison ===
    reporter.report(Progress::PhaseStart {
        name: "Pairwise comparison",
    });
    let samples = pairwise::run(records, &config.policy, reporter)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Statistics ===
    reporter.report(Progress::PhaseStart { name: "Statistics" });
    let report = SimilarityReport::from_samples(records.len(), &samples)?;
    reporter.report(Progress::PhaseFinish);

    info!(
        total_pairs = report.total_pairs,
        primary_mean = report.primary.statistics.mean,
        comparison_mean = report.comparison.statistics.mean,
        "Analysis complete."
    );
    Ok(report)
}
