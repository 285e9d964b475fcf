use async_trait::async_trait;
use reqwest::{Client, Url};
use std::{fmt::Debug, time::Duration};
use tracing::debug;

use crate::{
    error::TransportError,
    model::{DecodeRequest, DecodedMetar, ErrorResult},
};

pub const DECODE_PATH: &str = "/api/metar";

/// What the decode service answered, once a response was received and parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Decoded(DecodedMetar),
    Rejected(ErrorResult),
}

#[async_trait]
pub trait DecodeService: Send + Sync + Debug {
    async fn decode(&self, raw: &str) -> Result<DecodeOutcome, TransportError>;
}

/// Decode service reached over HTTP: `POST {base}/api/metar`.
#[derive(Debug, Clone)]
pub struct HttpDecodeService {
    endpoint: Url,
    http: Client,
}

impl HttpDecodeService {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, None)
    }

    /// `timeout` of `None` means the request may wait indefinitely.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let endpoint = endpoint_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(TransportError::Client)?;

        Ok(Self { endpoint, http })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl DecodeService for HttpDecodeService {
    async fn decode(&self, raw: &str) -> Result<DecodeOutcome, TransportError> {
        debug!(endpoint = %self.endpoint, raw, "sending decode request");

        let res = self
            .http
            .post(self.endpoint.clone())
            .json(&DecodeRequest::new(raw))
            .send()
            .await
            .map_err(TransportError::Send)?;

        let status = res.status();
        let body = res.text().await.map_err(TransportError::Body)?;

        debug!(status = status.as_u16(), body = %truncate_body(&body), "decode response received");

        let malformed = |source| TransportError::Json {
            status: status.as_u16(),
            body: truncate_body(&body),
            source,
        };

        if status.is_success() {
            let metar: DecodedMetar = serde_json::from_str(&body).map_err(malformed)?;
            Ok(DecodeOutcome::Decoded(metar))
        } else {
            let error: ErrorResult = serde_json::from_str(&body).map_err(malformed)?;
            Ok(DecodeOutcome::Rejected(error))
        }
    }
}

/// Resolve the decode endpoint against a base URL; only http(s) is accepted.
///
/// The endpoint path is absolute, so any path on the base is replaced:
/// `https://host/prefix/` resolves to `https://host/api/metar`.
pub fn endpoint_url(base_url: &str) -> Result<Url, TransportError> {
    let invalid = |reason: String| TransportError::InvalidUrl { url: base_url.to_string(), reason };

    let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
    }

    base.join(DECODE_PATH).map_err(|e| invalid(e.to_string()))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_joined_to_base() {
        let url = endpoint_url("http://localhost:8080").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/metar");
    }

    #[test]
    fn base_path_is_replaced() {
        let url = endpoint_url("https://wx.example.com/some/prefix/").unwrap();
        assert_eq!(url.as_str(), "https://wx.example.com/api/metar");
    }

    #[test]
    fn rejects_non_http_base() {
        let err = endpoint_url("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));

        let err = endpoint_url("not a url").unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl { .. }));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "雲".repeat(100);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 203);

        assert_eq!(truncate_body("short"), "short");
    }
}
