//! Upstream responder port for recording.

use crate::error::BoxError;
use crate::model::{Request, ResponseChunk};

/// Maps a request to a finite ordered sequence of response chunks by
/// consulting a real upstream.
///
/// The port is a single operation so that any closure can be plugged in
/// directly (see the blanket implementation below). Implementations may
/// block; the broker drains the whole response before recording it.
pub trait LiveResponder: Send {
    /// Produces the response chunks for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error when the upstream call fails (network, auth,
    /// timeout, etc.). The broker propagates it without retrying.
    fn respond(&mut self, request: &Request) -> Result<Vec<ResponseChunk>, BoxError>;
}

impl<F> LiveResponder for F
where
    F: FnMut(&Request) -> Result<Vec<ResponseChunk>, BoxError> + Send,
{
    fn respond(&mut self, request: &Request) -> Result<Vec<ResponseChunk>, BoxError> {
        self(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_satisfy_the_port() {
        let mut responder = |_request: &Request| -> Result<Vec<ResponseChunk>, BoxError> {
            Ok(vec![ResponseChunk::new(b"live".to_vec(), 0)])
        };
        let request =
            Request::new("test-proto", "fetch", "resource-123", Vec::new(), Vec::new()).unwrap();
        let chunks = responder.respond(&request).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].data, b"live");
    }

    #[test]
    fn stateful_closures_satisfy_the_port() {
        let mut calls = 0u32;
        let mut responder = move |_request: &Request| -> Result<Vec<ResponseChunk>, BoxError> {
            calls += 1;
            Ok(vec![ResponseChunk::new(format!("call-{calls}").into_bytes(), 0)])
        };
        let request =
            Request::new("test-proto", "fetch", "resource-123", Vec::new(), Vec::new()).unwrap();
        assert_eq!(responder.respond(&request).unwrap()[0].data, b"call-1");
        assert_eq!(responder.respond(&request).unwrap()[0].data, b"call-2");
    }
}
