//! Image-generation configuration read from a trace payload.

use serde_json::Value;
use thiserror::Error;

const DEFAULT_MODEL: &str = "gpt-image-1";
const DEFAULT_SUBMIT_EVENT: &str = "image_generation_done";

/// API key carried by the payload.
///
/// The inner value is never exposed via Debug or Display. Use `expose()`
/// only when handing the key to a backend.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// The payload cannot start a generation. The display text is rendered in
/// place of the image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImagePayloadError {
    #[error("Missing \"prompt\".")]
    MissingPrompt,

    #[error("Missing \"apiKey\". (Do not expose secrets on client)")]
    MissingApiKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    pub prompt: String,
    pub api_key: SecureString,
    pub model: String,
    pub submit_event: String,
}

impl ImageConfig {
    /// Read `prompt`, `apiKey`, `openaiModel`, and `submitEvent`. Empty or
    /// non-string values count as absent.
    pub fn from_payload(payload: &Value) -> Result<Self, ImagePayloadError> {
        let text = |field: &str| {
            payload
                .get(field)
                .and_then(Value::as_str)
                .filter(|value| !value.is_empty())
        };

        let prompt = text("prompt").ok_or(ImagePayloadError::MissingPrompt)?;
        let api_key = text("apiKey").ok_or(ImagePayloadError::MissingApiKey)?;

        Ok(Self {
            prompt: prompt.to_string(),
            api_key: SecureString::new(api_key),
            model: text("openaiModel").unwrap_or(DEFAULT_MODEL).to_string(),
            submit_event: text("submitEvent")
                .unwrap_or(DEFAULT_SUBMIT_EVENT)
                .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_fill_model_and_event() {
        let config =
            ImageConfig::from_payload(&json!({ "prompt": "a cat", "apiKey": "sk-1" })).unwrap();
        assert_eq!(config.model, "gpt-image-1");
        assert_eq!(config.submit_event, "image_generation_done");
        assert_eq!(config.api_key.expose(), "sk-1");
    }

    #[test]
    fn explicit_values_win() {
        let config = ImageConfig::from_payload(&json!({
            "prompt": "a cat",
            "apiKey": "sk-1",
            "openaiModel": "dall-e-3",
            "submitEvent": "img_done"
        }))
        .unwrap();
        assert_eq!(config.model, "dall-e-3");
        assert_eq!(config.submit_event, "img_done");
    }

    #[test]
    fn prompt_checked_before_api_key() {
        assert_eq!(
            ImageConfig::from_payload(&json!({})),
            Err(ImagePayloadError::MissingPrompt)
        );
        assert_eq!(
            ImageConfig::from_payload(&json!({ "prompt": "x", "apiKey": "" })),
            Err(ImagePayloadError::MissingApiKey)
        );
    }

    #[test]
    fn api_key_does_not_leak() {
        let config =
            ImageConfig::from_payload(&json!({ "prompt": "p", "apiKey": "my-secret-key" }))
                .unwrap();
        let debug_output = format!("{:?}", config);
        assert!(!debug_output.contains("my-secret-key"));
        assert!(!config.api_key.to_string().contains("my-secret-key"));
    }
}
