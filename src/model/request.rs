//! Protocol-agnostic request value.

use crate::error::Error;
use crate::model::Fingerprint;

/// Structured representation of a protocol-agnostic request.
///
/// Immutable after construction. The text fields identify the exchange
/// (`protocol` such as `"http"` or `"sql"`, `action` such as `"GET"` or
/// `"SELECT"`, `target` such as a URL path or table name); `headers` is an
/// ordered sequence of name/value pairs whose order is part of request
/// identity, and `body` is an opaque byte payload.
///
/// Adapters wanting case-insensitive header matching must canonicalize
/// header names before constructing a `Request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    protocol: String,
    action: String,
    target: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Request {
    /// Creates a request, validating that the text identifiers are non-empty.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `protocol`, `action`, or `target` is
    /// empty.
    pub fn new(
        protocol: impl Into<String>,
        action: impl Into<String>,
        target: impl Into<String>,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    ) -> Result<Self, Error> {
        let protocol = protocol.into();
        let action = action.into();
        let target = target.into();
        for (field, value) in [("protocol", &protocol), ("action", &action), ("target", &target)] {
            if value.is_empty() {
                return Err(Error::validation(format!("request {field} cannot be empty")));
            }
        }
        Ok(Self { protocol, action, target, headers, body })
    }

    /// Computes this request's fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::from_request(self)
    }

    /// Protocol identifier.
    #[must_use]
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Action or method name.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Target resource.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Ordered header pairs.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Request body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_with_all_fields() {
        let request = Request::new(
            "http",
            "GET",
            "/api/users",
            vec![("Host".to_string(), "example.com".to_string())],
            b"body".to_vec(),
        )
        .unwrap();
        assert_eq!(request.protocol(), "http");
        assert_eq!(request.action(), "GET");
        assert_eq!(request.target(), "/api/users");
        assert_eq!(request.headers().len(), 1);
        assert_eq!(request.body(), b"body");
    }

    #[test]
    fn rejects_empty_required_fields() {
        for (protocol, action, target) in
            [("", "GET", "/a"), ("http", "", "/a"), ("http", "GET", "")]
        {
            let result = Request::new(protocol, action, target, Vec::new(), Vec::new());
            assert!(matches!(result, Err(Error::Validation { .. })));
        }
    }

    #[test]
    fn empty_headers_and_body_are_allowed() {
        assert!(Request::new("http", "GET", "/a", Vec::new(), Vec::new()).is_ok());
    }
}
