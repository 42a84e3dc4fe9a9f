use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use self::detector::DetectorConfig;
use self::dictionary::DictionaryConfig;

pub mod detector;
pub mod dictionary;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub detector: DetectorConfig,

    /// Artificial pause before a translation is published
    pub processing_delay_ms: u64,
    /// Classifier calls running longer than this are reported as failed
    pub classifier_timeout_ms: u64,
    /// Capacity of the app channels
    pub channel_capacity: usize,
}

impl Default for Config {
    /// No processing delay, so nothing built from the default is time-dependent
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            detector: DetectorConfig::default(),
            processing_delay_ms: 0,
            classifier_timeout_ms: 5000,
            channel_capacity: 64,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let processing_delay_ms = env_or("PROCESSING_DELAY_MS", 2000); // 2 seconds default

        let classifier_timeout_ms = env_or("CLASSIFIER_TIMEOUT_MS", 5000);

        let channel_capacity = env_or("CHANNEL_CAPACITY", 64);

        let mut detector = DetectorConfig::default();
        if let Ok(provider) = env::var("DETECTOR_PROVIDER") {
            detector.provider = provider;
        }
        if let Ok(api_key) = env::var("DEEPL_API_KEY") {
            detector.api_key = api_key;
        }

        let dictionary = DictionaryConfig {
            path: env::var("LIBRAS_DICTIONARY").ok(),
            ..DictionaryConfig::default()
        };

        Config {
            dictionary,
            detector,
            processing_delay_ms,
            classifier_timeout_ms,
            channel_capacity,
        }
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn classifier_timeout(&self) -> Duration {
        Duration::from_millis(self.classifier_timeout_ms)
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_delay() {
        let config = Config::default();

        assert_eq!(config.processing_delay(), Duration::ZERO);
        assert_eq!(config.classifier_timeout(), Duration::from_secs(5));
        assert_eq!(config.detector.provider, "heuristic");
        assert!(config.dictionary.enabled);
        assert!(config.dictionary.path.is_none());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let json = r#"{ "processing_delay_ms": 250, "detector": { "provider": "deepl" } }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.processing_delay_ms, 250);
        assert_eq!(config.detector.provider, "deepl");
        assert_eq!(config.detector.api_url, "https://api-free.deepl.com/v2/translate");
        assert_eq!(config.channel_capacity, 64);
    }

    #[test]
    fn test_dictionary_path_from_json() {
        let json = r#"{ "dictionary": { "path": "glosses.json" } }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.dictionary.path.as_deref(), Some("glosses.json"));
        assert!(config.dictionary.enabled);
    }
}
