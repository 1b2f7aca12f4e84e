use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{RemoteCall, SoapRequest, TransportError, block_on_future, build_envelope, parse_reply};

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const BODY_PREVIEW_LIMIT: usize = 200;

/// [`RemoteCall`] implementation posting SOAP 1.1 envelopes over HTTP.
#[derive(Debug, Clone)]
pub struct SoapTransport {
    http: Client,
}

impl SoapTransport {
    /// Build a transport with the [`DEFAULT_TIMEOUT`].
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/xml;charset=UTF-8"));
        default_headers.insert(header::ACCEPT, HeaderValue::from_static("text/xml"));

        let http = Client::builder()
            .default_headers(default_headers)
            .user_agent(format!("promostandards-client/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|error| TransportError::runtime(format!("build http client: {error}")))?;
        Ok(Self { http })
    }
}

impl RemoteCall for SoapTransport {
    fn call(&self, request: &SoapRequest<'_>) -> Result<Value, TransportError> {
        let start = Instant::now();
        let envelope = build_envelope(request);
        let http = self.http.clone();
        let endpoint = request.service.endpoint.clone();
        let soap_action = format!("\"{}\"", request.action);
        debug!(
            endpoint = %endpoint,
            operation = request.operation,
            action = request.action,
            "soap request started"
        );

        let (status, text) = block_on_future(async move {
            let response = http
                .post(endpoint)
                .header("SOAPAction", soap_action)
                .body(envelope)
                .send()
                .await
                .map_err(|error| TransportError::network(error.to_string()))?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|error| TransportError::network(error.to_string()))?;
            Ok((status, text))
        })?;

        let outcome = classify(status, &text);
        match &outcome {
            Ok(_) => debug!(
                operation = request.operation,
                status = %status,
                duration_ms = start.elapsed().as_millis(),
                "soap request completed"
            ),
            Err(error @ TransportError::Fault { .. }) => warn!(
                operation = request.operation,
                status = %status,
                error = %error,
                duration_ms = start.elapsed().as_millis(),
                "soap request returned a fault"
            ),
            Err(error) => warn!(
                operation = request.operation,
                status = %status,
                error = %error,
                duration_ms = start.elapsed().as_millis(),
                "soap request failed"
            ),
        }
        outcome
    }
}

/// Map an HTTP status and body to the call result.
///
/// A fault wins over the status. A success status needs a well-formed
/// envelope; any other status without a fault becomes [`TransportError::Http`].
fn classify(status: StatusCode, text: &str) -> Result<Value, TransportError> {
    match parse_reply(text) {
        Ok(body) if status.is_success() => Ok(body),
        Err(error @ TransportError::Fault { .. }) => Err(error),
        Err(error) if status.is_success() => Err(error),
        _ => Err(TransportError::http(status.as_u16(), preview(text))),
    }
}

fn preview(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return "<empty>".to_string();
    }
    if collapsed.chars().count() <= BODY_PREVIEW_LIMIT {
        return collapsed;
    }
    let truncated: String = collapsed.chars().take(BODY_PREVIEW_LIMIT).collect();
    format!("{}...", truncated.trim_end())
}
