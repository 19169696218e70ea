//! reqwest-backed [`Transport`].

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{debug, trace};

use super::endpoint::DaemonEndpoint;
use crate::error::{Error, Result};
use crate::port::{DaemonRequest, Method, Transport};

/// Talks to the daemon over plain HTTP.
///
/// No timeout and no retry are configured: a hung request stays pending and
/// every failure is handed straight back to the caller.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
    endpoint: DaemonEndpoint,
}

impl HttpTransport {
    /// Build a transport with the fixed `Content-Type: application/json` header.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: DaemonEndpoint) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = HttpClient::builder().default_headers(headers).build()?;
        Ok(Self { http, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &DaemonEndpoint {
        &self.endpoint
    }
}

/// Decode a response body; whitespace-only bodies decode as `null`.
fn decode_body(bytes: &[u8]) -> Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(bytes)?)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: DaemonRequest) -> Result<Value> {
        let url = self.endpoint.url_for(&request.path)?;
        debug!(method = %request.method, path = %request.path, "Sending daemon request");

        let mut builder = match request.method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
            Method::Delete => self.http.delete(url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        trace!(status = status.as_u16(), bytes = bytes.len(), "Daemon response");

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        decode_body(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_decodes_as_null() {
        assert_eq!(decode_body(b"").unwrap(), Value::Null);
        assert_eq!(decode_body(b" \r\n").unwrap(), Value::Null);
    }

    #[test]
    fn malformed_body_is_a_json_error() {
        assert!(matches!(decode_body(b"<html>"), Err(Error::Json(_))));
    }

    #[test]
    fn scalar_bodies_decode() {
        assert_eq!(decode_body(b"\"XaddrOne\"").unwrap(), Value::from("XaddrOne"));
        assert_eq!(decode_body(b"12000").unwrap(), Value::from(12000));
    }
}
