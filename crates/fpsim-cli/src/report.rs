use crate::cli::OutputFormat;
use crate::error::Result;
use fpsim::core::models::molecule::FingerprintKind;
use fpsim::engine::statistics::{KindReport, SimilarityReport};
use std::fmt::Write as _;
use std::io::Write;

fn render_kind(out: &mut String, report: &KindReport) {
    let stats = &report.statistics;
    let _ = writeln!(out, "{}:", report.kind.label());
    let _ = writeln!(out, "mean: {:.1}%", stats.mean * 100.0);
    let _ = writeln!(out, "max: {:.1}%", stats.max * 100.0);
    let _ = writeln!(out, "min: {:.1}%", stats.min * 100.0);
    let _ = writeln!(out, "sd: {:.1}%", stats.std_dev * 100.0);
    let _ = writeln!(
        out,
        "Identical: {:.2} permyriads.",
        report.exact_match_permyriad
    );
}

/// One block per fingerprint kind, separated by a blank line.
pub fn render_text(report: &SimilarityReport) -> String {
    let mut out = String::new();
    for kind in FingerprintKind::ALL {
        render_kind(&mut out, report.kind(kind));
        out.push('\n');
    }
    out
}

pub fn render_json(report: &SimilarityReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| anyhow::Error::from(e).into())
}

pub fn write_report(
    report: &SimilarityReport,
    format: OutputFormat,
    writer: &mut impl Write,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report)? + "\n",
    };
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}
