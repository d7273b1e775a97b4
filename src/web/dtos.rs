use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    // Defaulted so an absent field reaches validate() instead of bouncing
    // off the form extractor with an opaque rejection.
    #[serde(default)]
    pub url: String,
}

impl AnalyzeRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("Missing URL parameter".to_string());
        }
        if self.url.len() > 2048 {
            return Err("URL too long".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request() {
        let request = AnalyzeRequest {
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_url_is_missing() {
        let request = AnalyzeRequest {
            url: "   ".to_string(),
        };
        assert_eq!(
            request.validate().unwrap_err(),
            "Missing URL parameter".to_string()
        );
    }

    #[test]
    fn oversized_url_rejected() {
        let request = AnalyzeRequest {
            url: "a".repeat(2049),
        };
        assert!(request.validate().is_err());
    }
}
