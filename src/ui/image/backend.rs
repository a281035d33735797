//! Image-generation backend seam.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::payload::SecureString;

/// Request body for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub model: String,
    pub n: u32,
    pub size: String,
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            n: 1,
            size: "1024x1024".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Image URL not found")]
    MissingUrl,

    #[error("Image backend is not available")]
    Unavailable,
}

/// Performs the generation call and returns the image URL.
pub trait ImageBackend: Send + Sync {
    fn generate(&self, api_key: &SecureString, request: &ImageRequest) -> Result<String, ImageError>;
}

/// Backend for hosts that cannot reach an image service.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableBackend;

impl ImageBackend for UnavailableBackend {
    fn generate(&self, _api_key: &SecureString, _request: &ImageRequest) -> Result<String, ImageError> {
        Err(ImageError::Unavailable)
    }
}

/// Interpret a generation response: non-2xx status is an error, otherwise
/// the URL is read from `data[0].url`.
pub fn parse_generation_response(status: u16, body: &Value) -> Result<String, ImageError> {
    if !(200..300).contains(&status) {
        return Err(ImageError::Http { status });
    }
    body.pointer("/data/0/url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .ok_or(ImageError::MissingUrl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_fixed_count_and_size() {
        let body = serde_json::to_value(ImageRequest::new("a cat", "gpt-image-1")).unwrap();
        assert_eq!(
            body,
            json!({ "prompt": "a cat", "model": "gpt-image-1", "n": 1, "size": "1024x1024" })
        );
    }

    #[test]
    fn response_url_extracted() {
        let body = json!({ "data": [{ "url": "https://img/1.png" }] });
        assert_eq!(
            parse_generation_response(200, &body),
            Ok("https://img/1.png".to_string())
        );
    }

    #[test]
    fn error_status_reported() {
        let err = parse_generation_response(401, &json!({})).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 401");
    }

    #[test]
    fn missing_url_reported() {
        assert_eq!(
            parse_generation_response(200, &json!({ "data": [] })),
            Err(ImageError::MissingUrl)
        );
    }
}
