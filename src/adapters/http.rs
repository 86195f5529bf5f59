//! Live responder adapter for HTTP upstreams.

use reqwest::blocking::Client;
use reqwest::Method;

use crate::error::BoxError;
use crate::model::{Request, ResponseChunk};
use crate::ports::LiveResponder;

/// [`LiveResponder`] that forwards `http`/`https` requests to a real server.
///
/// The request maps directly onto the wire: `action` is the HTTP method,
/// `target` the absolute URL, `headers` and `body` pass through unchanged.
/// The response body is returned as a single chunk at sequence 0.
pub struct HttpResponder {
    client: Client,
}

impl HttpResponder {
    /// Creates a responder with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    /// Creates a responder over a preconfigured client (timeouts, proxies).
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveResponder for HttpResponder {
    fn respond(&mut self, request: &Request) -> Result<Vec<ResponseChunk>, BoxError> {
        if !matches!(request.protocol(), "http" | "https") {
            return Err(format!(
                "HttpResponder cannot serve protocol {:?}",
                request.protocol()
            )
            .into());
        }

        let method = Method::from_bytes(request.action().as_bytes())
            .map_err(|_| format!("invalid HTTP method {:?}", request.action()))?;

        let mut builder = self.client.request(method, request.target());
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        if !request.body().is_empty() {
            builder = builder.body(request.body().to_vec());
        }

        let response = builder.send()?;
        let status = response.status();
        let body = response.bytes()?;
        if !status.is_success() {
            return Err(format!("upstream returned {status}").into());
        }

        Ok(vec![ResponseChunk::new(body.to_vec(), 0)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_protocols() {
        let mut responder = HttpResponder::new();
        let request =
            Request::new("sql", "SELECT", "users", Vec::new(), Vec::new()).unwrap();
        let err = responder.respond(&request).unwrap_err();
        assert!(err.to_string().contains("sql"));
    }

    #[test]
    fn rejects_invalid_methods() {
        let mut responder = HttpResponder::new();
        let request =
            Request::new("http", "GE T", "http://localhost/", Vec::new(), Vec::new()).unwrap();
        let err = responder.respond(&request).unwrap_err();
        assert!(err.to_string().contains("invalid HTTP method"));
    }
}
