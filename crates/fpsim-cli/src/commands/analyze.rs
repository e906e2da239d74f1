use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::report;
use crate::utils::progress::CliProgressHandler;
use fpsim::core::io::read_records;
use fpsim::engine::progress::{Progress, ProgressReporter};
use fpsim::workflows;
use std::io::Write;
use tracing::info;

pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = std::io::stdout();
    run_with_writer(config, &mut stdout.lock())
}

pub fn run_with_writer(config: &AppConfig, writer: &mut impl Write) -> Result<()> {
    let progress_handler = if config.show_progress {
        CliProgressHandler::new()
    } else {
        CliProgressHandler::hidden()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    analyze(config, &reporter, writer)
}

fn analyze(config: &AppConfig, reporter: &ProgressReporter, writer: &mut impl Write) -> Result<()> {
    info!(
        "Loading molecule records from {:?} as {:?}",
        &config.input_path, config.input_format
    );
    let records = read_records(
        &config.input_path,
        config.input_format,
        &config.analysis.fields,
    )
    .map_err(|source| CliError::Input {
        path: config.input_path.clone(),
        source,
    })?;
    info!("Loaded {} molecule record(s).", records.len());
    reporter.report(Progress::Message(format!(
        "Loaded {} molecule record(s) from {}",
        records.len(),
        config.input_path.display()
    )));

    let report = workflows::analyze::run(&records, &config.analysis, reporter)?;

    report::write_report(&report, config.output_format, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use fpsim::core::io::InputFormat;
    use fpsim::engine::config::AnalysisConfig;
    use fpsim::engine::error::EngineError;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Mutex;

    fn app_config(input_path: PathBuf, output_format: OutputFormat) -> AppConfig {
        AppConfig {
            input_format: InputFormat::from_path(&input_path),
            input_path,
            output_format,
            show_progress: false,
            analysis: AnalysisConfig::default(),
        }
    }

    #[test]
    fn analyzes_json_file_into_text_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("molecules.json");
        fs::write(
            &path,
            r#"[
                {"new_fp": "1100", "morgan_fp": "1111"},
                {"new_fp": "1010", "morgan_fp": "1111"},
                {"new_fp": "1110", "morgan_fp": "0011"}
            ]"#,
        )
        .unwrap();

        let mut buffer = Vec::new();
        run_with_writer(&app_config(path, OutputFormat::Text), &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("NEW FP:\nmean: 55.6%"));
        assert!(output.contains("Identical: 3333.33 permyriads."));
    }

    #[test]
    fn analyzes_csv_file_into_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("molecules.csv");
        fs::write(&path, "new_fp,morgan_fp\n1100,1111\n1010,1111\n1110,0011\n").unwrap();

        let mut buffer = Vec::new();
        run_with_writer(&app_config(path, OutputFormat::Json), &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["total_pairs"], 3);
    }

    #[test]
    fn loaded_record_count_is_reported_before_the_first_phase() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("molecules.csv");
        fs::write(&path, "new_fp,morgan_fp\n1100,1111\n1010,1111\n1110,0011\n").unwrap();

        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let mut buffer = Vec::new();
        analyze(&app_config(path.clone(), OutputFormat::Text), &reporter, &mut buffer).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        let expected = format!("Loaded 3 molecule record(s) from {}", path.display());
        assert!(matches!(&events[0], Progress::Message(msg) if *msg == expected));
        assert!(matches!(
            events[1],
            Progress::PhaseStart {
                name: "Pairwise comparison"
            }
        ));
    }

    #[test]
    fn missing_input_file_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let mut buffer = Vec::new();
        let err = run_with_writer(&app_config(path.clone(), OutputFormat::Text), &mut buffer)
            .unwrap_err();

        assert!(matches!(&err, CliError::Input { path: p, .. } if *p == path));
        assert!(buffer.is_empty());
    }

    #[test]
    fn single_record_produces_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.json");
        fs::write(&path, r#"[{"new_fp": "1", "morgan_fp": "1"}]"#).unwrap();

        let mut buffer = Vec::new();
        let err = run_with_writer(&app_config(path, OutputFormat::Text), &mut buffer).unwrap_err();

        assert!(matches!(
            err,
            CliError::Engine(EngineError::InsufficientRecords { found: 1 })
        ));
        assert!(buffer.is_empty());
    }
}
