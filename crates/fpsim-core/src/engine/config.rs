use crate::core::io::{DEFAULT_COMPARISON_FIELD, DEFAULT_PRIMARY_FIELD, FieldNames};
use crate::core::similarity::{EmptyPolicy, LengthPolicy, SimilarityPolicy};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Field name for {0} fingerprints cannot be empty")]
    EmptyFieldName(&'static str),
    #[error("Primary and comparison fingerprints cannot share the field name '{0}'")]
    DuplicateFieldName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisConfig {
    pub fields: FieldNames,
    pub policy: SimilarityPolicy,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    primary_field: Option<String>,
    comparison_field: Option<String>,
    length_policy: Option<LengthPolicy>,
    empty_policy: Option<EmptyPolicy>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary_field(mut self, name: impl Into<String>) -> Self {
        self.primary_field = Some(name.into());
        self
    }
    pub fn comparison_field(mut self, name: impl Into<String>) -> Self {
        self.comparison_field = Some(name.into());
        self
    }
    pub fn length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = Some(policy);
        self
    }
    pub fn empty_policy(mut self, policy: EmptyPolicy) -> Self {
        self.empty_policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let primary = self
            .primary_field
            .unwrap_or_else(|| DEFAULT_PRIMARY_FIELD.to_string());
        let comparison = self
            .comparison_field
            .unwrap_or_else(|| DEFAULT_COMPARISON_FIELD.to_string());

        if primary.trim().is_empty() {
            return Err(ConfigError::EmptyFieldName("primary"));
        }
        if comparison.trim().is_empty() {
            return Err(ConfigError::EmptyFieldName("comparison"));
        }
        if primary == comparison {
            return Err(ConfigError::DuplicateFieldName(primary));
        }

        Ok(AnalysisConfig {
            fields: FieldNames {
                primary,
                comparison,
            },
            policy: SimilarityPolicy {
                length: self.length_policy.unwrap_or_default(),
                empty: self.empty_policy.unwrap_or_default(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let config = AnalysisConfigBuilder::new().build().unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.fields.primary, "new_fp");
        assert_eq!(config.fields.comparison, "morgan_fp");
        assert_eq!(config.policy.length, LengthPolicy::Strict);
        assert_eq!(config.policy.empty, EmptyPolicy::Error);
    }

    #[test]
    fn builder_overrides_every_setting() {
        let config = AnalysisConfigBuilder::new()
            .primary_field("topo")
            .comparison_field("ecfp4")
            .length_policy(LengthPolicy::Truncate)
            .empty_policy(EmptyPolicy::Zero)
            .build()
            .unwrap();

        assert_eq!(config.fields.primary, "topo");
        assert_eq!(config.fields.comparison, "ecfp4");
        assert_eq!(config.policy.length, LengthPolicy::Truncate);
        assert_eq!(config.policy.empty, EmptyPolicy::Zero);
    }

    #[test]
    fn builder_rejects_blank_field_name() {
        let result = AnalysisConfigBuilder::new().comparison_field("  ").build();
        assert_eq!(result, Err(ConfigError::EmptyFieldName("comparison")));
    }

    #[test]
    fn builder_rejects_shared_field_name() {
        let result = AnalysisConfigBuilder::new()
            .primary_field("fp")
            .comparison_field("fp")
            .build();
        assert_eq!(
            result,
            Err(ConfigError::DuplicateFieldName("fp".to_string()))
        );
    }
}
