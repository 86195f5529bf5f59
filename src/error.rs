//! Error taxonomy for the interposition core.

use thiserror::Error;

use crate::broker::Mode;
use crate::model::Request;

/// Boundary error type for user-supplied live responders; the broker wraps
/// it into [`Error::Responder`]. Stores return the typed taxonomy directly.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by the interposition core.
///
/// The core recovers from nothing: every failure is returned to the caller
/// as one of these kinds. Nothing is logged, swallowed, or retried.
#[derive(Debug, Error)]
pub enum Error {
    /// No recorded interaction matches the request's fingerprint.
    #[error(
        "no matching interaction for {protocol} {action} {target}",
        protocol = .request.protocol(),
        action = .request.action(),
        target = .request.target(),
    )]
    InteractionNotFound {
        /// The request that failed to match.
        request: Box<Request>,
    },

    /// A value violated a construction invariant.
    #[error("interaction validation failed: {reason}")]
    Validation {
        /// Human-readable description of the violated invariant.
        reason: String,
    },

    /// Broker construction in a mode that forwards upstream, with no responder.
    #[error("{mode} mode requires a live responder")]
    LiveResponderRequired {
        /// The mode that was requested.
        mode: Mode,
    },

    /// A store failed to load its cassette.
    #[error("failed to load cassette: {source}")]
    CassetteLoad {
        /// The underlying cause (missing storage, I/O, or parse failure).
        #[source]
        source: BoxError,
    },

    /// A store failed to persist a cassette.
    #[error("failed to save cassette: {source}")]
    CassetteSave {
        /// The underlying cause.
        #[source]
        source: BoxError,
    },

    /// The live responder failed while producing a response.
    #[error("live responder failed: {source}")]
    Responder {
        /// The responder's reported cause.
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Creates a validation error with the given reason.
    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        Self::Validation { reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Request;

    #[test]
    fn not_found_message_names_the_request() {
        let request =
            Request::new("test-proto", "fetch", "resource-123", Vec::new(), Vec::new()).unwrap();
        let error = Error::InteractionNotFound { request: Box::new(request) };
        let message = error.to_string();
        assert!(message.contains("test-proto"));
        assert!(message.contains("fetch"));
        assert!(message.contains("resource-123"));
    }

    #[test]
    fn load_error_exposes_its_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = Error::CassetteLoad { source: Box::new(cause) };
        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().contains("gone"));
    }

    #[test]
    fn responder_required_names_the_mode() {
        let error = Error::LiveResponderRequired { mode: Mode::Record };
        assert!(error.to_string().contains("record"));
    }
}
