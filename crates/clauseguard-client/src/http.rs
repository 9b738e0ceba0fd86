//! HTTP client for the external contract analysis service.
//!
//! The service exposes a single upload-and-analyze call: the contract file
//! is the whole request payload and the response is one `AnalysisResult`.
//! Responses are validated strictly on receipt and rejected wholesale when
//! malformed; no retry or caching happens here.

use std::time::Duration;

use clauseguard_core::{AnalysisResult, CoreError};
use reqwest::multipart;
use thiserror::Error;
use tracing::info;

/// Generous timeout to cover large contract uploads.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed analysis response: {0}")]
    Malformed(#[from] CoreError),
}

/// Client for the analysis service's `/analyze-contract` endpoint.
pub struct AnalyzeClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalyzeClient {
    /// Create a client for the given service base URL.
    ///
    /// `base_url` should be like `http://localhost:8000` (no trailing slash).
    pub fn new(base_url: String) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Upload one contract document and return its analysis.
    ///
    /// Fails without partial results: a non-success status, unparsable body,
    /// or out-of-range field all yield an error and no `AnalysisResult`.
    pub async fn analyze(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<AnalysisResult, ClientError> {
        let url = format!("{}/analyze-contract", self.base_url);

        info!(url = %url, file = %file_name, bytes = contents.len(), "uploading contract for analysis");
        let part = multipart::Part::bytes(contents).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let resp = self.client.post(&url).multipart(form).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let result: AnalysisResult = serde_json::from_str(&body)?;
        result.validate()?;
        info!(
            risk_score = result.risk_score,
            issues = result.issues.len(),
            "analysis complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clauseguard_core::RiskLevel;

    #[test]
    fn client_trims_trailing_slash() {
        let client = AnalyzeClient::new("http://localhost:8000/".into()).unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn parses_service_response_shape() {
        let body = r#"{
            "risk_score": 42,
            "issues": [
                {
                    "clause": "Disputes resolved exclusively in Singapore.",
                    "risk_level": "HIGH",
                    "law_cited": "Consumer Protection Act, 2019 – Section 2(7)",
                    "eli5": "Foreign jurisdiction clause may be challenged.",
                    "confidence": 0.88
                }
            ]
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        result.validate().unwrap();
        assert_eq!(result.risk_score, 42);
        assert_eq!(result.issues[0].risk_level, RiskLevel::High);
    }

    #[test]
    fn unparsable_body_is_a_json_error() {
        let err = serde_json::from_str::<AnalysisResult>("{\"risk_score\": 42}")
            .map_err(ClientError::from)
            .unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
    }

    #[test]
    fn out_of_range_response_is_rejected_wholesale() {
        let body = r#"{
            "risk_score": 42,
            "issues": [
                {
                    "clause": "Some clause.",
                    "risk_level": "LOW",
                    "law_cited": "Some Act",
                    "eli5": "Fine.",
                    "confidence": 1.7
                }
            ]
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        let err = result.validate().map_err(ClientError::from).unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
    }

    #[test]
    fn unknown_risk_level_in_response_fails_parse() {
        let body = r#"{
            "risk_score": 10,
            "issues": [
                {
                    "clause": "Some clause.",
                    "risk_level": "EXTREME",
                    "law_cited": "Some Act",
                    "eli5": "Bad level.",
                    "confidence": 0.5
                }
            ]
        }"#;
        assert!(serde_json::from_str::<AnalysisResult>(body).is_err());
    }
}
