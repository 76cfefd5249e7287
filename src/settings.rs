//! Runtime settings, read from the environment.

use std::env;

use aws_config::BehaviorVersion;
use aws_sdk_bedrockruntime::config::Region;

/// Region used when `AWS_REGION` is unset.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Model used by the CLI when `BEDROCK_MODEL_ID` is unset.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TOP_P: f32 = 0.9;

/// Application settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// AWS region hosting the model and the knowledge base
    pub region: String,
    /// Model identifier used for classification and generation
    pub model_id: String,
    /// Knowledge base queried for context
    pub knowledge_base_id: String,
    /// Sampling temperature for generation, in [0, 1]
    pub temperature: f32,
    /// Nucleus sampling threshold for generation, in [0, 1]
    pub top_p: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            knowledge_base_id: String::new(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

impl AppSettings {
    /// Read settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            region: non_empty("AWS_REGION").unwrap_or(defaults.region),
            model_id: non_empty("BEDROCK_MODEL_ID").unwrap_or(defaults.model_id),
            knowledge_base_id: non_empty("BEDROCK_KNOWLEDGE_BASE_ID")
                .unwrap_or(defaults.knowledge_base_id),
            temperature: parse_unit_interval(
                "BEDROCK_TEMPERATURE",
                non_empty("BEDROCK_TEMPERATURE"),
                defaults.temperature,
            ),
            top_p: parse_unit_interval("BEDROCK_TOP_P", non_empty("BEDROCK_TOP_P"), defaults.top_p),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_knowledge_base_id(mut self, knowledge_base_id: impl Into<String>) -> Self {
        self.knowledge_base_id = knowledge_base_id.into();
        self
    }

    /// Set the sampling parameters used for generation.
    pub fn with_sampling(mut self, temperature: f32, top_p: f32) -> Self {
        self.temperature = temperature;
        self.top_p = top_p;
        self
    }

    /// Load the AWS SDK configuration for the configured region.
    ///
    /// Credentials are resolved by the SDK's default provider chain.
    pub async fn load_sdk_config(&self) -> aws_config::SdkConfig {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .load()
            .await
    }
}

fn parse_unit_interval(key: &str, raw: Option<String>, default: f32) -> f32 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<f32>() {
        Ok(value) if (0.0..=1.0).contains(&value) => value,
        _ => {
            tracing::warn!("Ignoring {}={:?}: expected a number in [0, 1]", key, raw);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = AppSettings::from_lookup(lookup(&[]));
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.region, "us-west-2");
    }

    #[test]
    fn test_reads_environment() {
        let settings = AppSettings::from_lookup(lookup(&[
            ("AWS_REGION", "eu-west-3"),
            ("BEDROCK_MODEL_ID", "anthropic.claude-3-5-sonnet-20240620-v1:0"),
            ("BEDROCK_KNOWLEDGE_BASE_ID", "kb-123"),
            ("BEDROCK_TEMPERATURE", "0.2"),
            ("BEDROCK_TOP_P", "1"),
        ]));

        assert_eq!(settings.region, "eu-west-3");
        assert_eq!(settings.model_id, "anthropic.claude-3-5-sonnet-20240620-v1:0");
        assert_eq!(settings.knowledge_base_id, "kb-123");
        assert_eq!(settings.temperature, 0.2);
        assert_eq!(settings.top_p, 1.0);
    }

    #[test]
    fn test_empty_region_falls_back() {
        let settings = AppSettings::from_lookup(lookup(&[("AWS_REGION", "  ")]));
        assert_eq!(settings.region, DEFAULT_REGION);
    }

    #[test]
    fn test_out_of_range_sampling_falls_back() {
        let settings = AppSettings::from_lookup(lookup(&[
            ("BEDROCK_TEMPERATURE", "1.5"),
            ("BEDROCK_TOP_P", "high"),
        ]));
        assert_eq!(settings.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(settings.top_p, DEFAULT_TOP_P);
    }

    #[test]
    fn test_builders() {
        let settings = AppSettings::default()
            .with_region("us-east-1")
            .with_knowledge_base_id("kb-9")
            .with_sampling(0.0, 0.5);
        assert_eq!(settings.region, "us-east-1");
        assert_eq!(settings.knowledge_base_id, "kb-9");
        assert_eq!(settings.temperature, 0.0);
        assert_eq!(settings.top_p, 0.5);
    }
}
