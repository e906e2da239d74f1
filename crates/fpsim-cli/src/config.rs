use crate::cli::{Cli, OutputFormat};
use crate::error::{CliError, Result};
use fpsim::core::io::InputFormat;
use fpsim::core::similarity::{EmptyPolicy, LengthPolicy};
use fpsim::engine::config::{AnalysisConfig, AnalysisConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum PartialInputFormat {
    Json,
    Csv,
}

impl From<PartialInputFormat> for InputFormat {
    fn from(p: PartialInputFormat) -> Self {
        match p {
            PartialInputFormat::Json => InputFormat::Json,
            PartialInputFormat::Csv => InputFormat::Csv,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum PartialLengthPolicy {
    Strict,
    Truncate,
}

impl From<PartialLengthPolicy> for LengthPolicy {
    fn from(p: PartialLengthPolicy) -> Self {
        match p {
            PartialLengthPolicy::Strict => LengthPolicy::Strict,
            PartialLengthPolicy::Truncate => LengthPolicy::Truncate,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum PartialEmptyPolicy {
    Error,
    Zero,
}

impl From<PartialEmptyPolicy> for EmptyPolicy {
    fn from(p: PartialEmptyPolicy) -> Self {
        match p {
            PartialEmptyPolicy::Error => EmptyPolicy::Error,
            PartialEmptyPolicy::Zero => EmptyPolicy::Zero,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialInputConfig {
    #[serde(rename = "primary-field")]
    primary_field: Option<String>,
    #[serde(rename = "comparison-field")]
    comparison_field: Option<String>,
    format: Option<PartialInputFormat>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSimilarityConfig {
    #[serde(rename = "length-policy")]
    length_policy: Option<PartialLengthPolicy>,
    #[serde(rename = "empty-policy")]
    empty_policy: Option<PartialEmptyPolicy>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAnalysisConfig {
    input: Option<PartialInputConfig>,
    similarity: Option<PartialSimilarityConfig>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub input_format: InputFormat,
    pub output_format: OutputFormat,
    pub show_progress: bool,
    pub analysis: AnalysisConfig,
}

impl PartialAnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|source| CliError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the final settings. Precedence: CLI flags, then `--set` values, then the
    /// config file, then built-in defaults.
    pub fn merge_with_cli(mut self, args: &Cli) -> Result<AppConfig> {
        self.apply_set_values(&args.set_values)?;

        let input_config = self.input.take().unwrap_or_default();
        let similarity_config = self.similarity.take().unwrap_or_default();

        let input_format = args
            .input_format
            .map(InputFormat::from)
            .or(input_config.format.map(InputFormat::from))
            .unwrap_or_else(|| InputFormat::from_path(&args.input));

        let mut builder = AnalysisConfigBuilder::new();
        if let Some(field) = args
            .primary_field
            .clone()
            .or(input_config.primary_field)
        {
            builder = builder.primary_field(field);
        }
        if let Some(field) = args
            .comparison_field
            .clone()
            .or(input_config.comparison_field)
        {
            builder = builder.comparison_field(field);
        }

        let length_policy = if args.lenient_length {
            LengthPolicy::Truncate
        } else {
            similarity_config
                .length_policy
                .map(LengthPolicy::from)
                .unwrap_or_default()
        };
        let empty_policy = if args.empty_as_zero {
            EmptyPolicy::Zero
        } else {
            similarity_config
                .empty_policy
                .map(EmptyPolicy::from)
                .unwrap_or_default()
        };

        let analysis = builder
            .length_policy(length_policy)
            .empty_policy(empty_policy)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(AppConfig {
            input_path: args.input.clone(),
            input_format,
            output_format: args.format,
            show_progress: !(args.no_progress || args.quiet),
            analysis,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "input.primary-field" => {
                    self.input.get_or_insert_with(Default::default).primary_field =
                        Some(value_str.to_string());
                }
                "input.comparison-field" => {
                    self.input
                        .get_or_insert_with(Default::default)
                        .comparison_field = Some(value_str.to_string());
                }
                "input.format" => {
                    self.input.get_or_insert_with(Default::default).format =
                        Some(parse_enum_value(key, value_str)?);
                }
                "similarity.length-policy" => {
                    self.similarity
                        .get_or_insert_with(Default::default)
                        .length_policy = Some(parse_enum_value(key, value_str)?);
                }
                "similarity.empty-policy" => {
                    self.similarity
                        .get_or_insert_with(Default::default)
                        .empty_policy = Some(parse_enum_value(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_enum_value<T: for<'de> Deserialize<'de>>(key: &str, value: &str) -> Result<T> {
    T::deserialize(serde::de::value::StrDeserializer::<serde::de::value::Error>::new(value))
        .map_err(|_| CliError::Config(format!("Invalid value for {}: {}", key, value)))
}
