use async_trait::async_trait;
use libras_core::types::LanguageCode;

use crate::{Classifier, ClassifierError, ProviderMetadata};

/// Language identification through the DeepL translate endpoint.
///
/// DeepL has no standalone detection call; a translation to English reports
/// `detected_source_language`, which is all this provider reads.
#[derive(Clone)]
pub struct DeeplClassifier {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeeplClassifier {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }
}

#[async_trait]
impl Classifier for DeeplClassifier {
    async fn identify(&self, text: &str) -> Result<LanguageCode, ClassifierError> {
        if self.api_key.is_empty() {
            return Err(ClassifierError::AuthenticationError);
        }

        let params = [("text", text), ("target_lang", "EN")];

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&params)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(ClassifierError::RateLimitExceeded);
        }

        if response.status() == 403 {
            return Err(ClassifierError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(ClassifierError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            ClassifierError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        detected_language(&json)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepL".to_string(),
            requires_api_key: true,
            offline: false,
        }
    }
}

/// DeepL reports codes such as "PT" or "EN"; the rest of the crate uses
/// lowercase ISO 639-1.
fn detected_language(json: &serde_json::Value) -> Result<LanguageCode, ClassifierError> {
    let detected = json["translations"]
        .get(0)
        .and_then(|t| t["detected_source_language"].as_str())
        .ok_or_else(|| ClassifierError::ApiError("No detected language".to_string()))?;

    let code = detected
        .split(['-', '_'])
        .next()
        .unwrap_or(detected)
        .to_lowercase();

    Ok(code)
}
