//! Recorded request/response pair.

use crate::error::Error;
use crate::model::{Fingerprint, Request, ResponseChunk};

/// One recorded request together with its fingerprint and ordered response
/// chunks. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    request: Request,
    fingerprint: Fingerprint,
    response_chunks: Vec<ResponseChunk>,
    metadata: Vec<(String, String)>,
}

impl Interaction {
    /// Creates an interaction, deriving the fingerprint from the request.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the chunk sequence is empty or not
    /// the contiguous run `0, 1, …, N-1`.
    pub fn new(request: Request, response_chunks: Vec<ResponseChunk>) -> Result<Self, Error> {
        let fingerprint = request.fingerprint();
        Self::from_parts(request, fingerprint, response_chunks)
    }

    /// Creates an interaction from an externally supplied fingerprint,
    /// typically a deserialized one.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the fingerprint does not match the
    /// request, or when the chunk sequence is empty or non-contiguous.
    pub fn from_parts(
        request: Request,
        fingerprint: Fingerprint,
        response_chunks: Vec<ResponseChunk>,
    ) -> Result<Self, Error> {
        let expected = request.fingerprint();
        if fingerprint != expected {
            return Err(Error::validation(format!(
                "fingerprint does not match request: expected {expected}, got {fingerprint}"
            )));
        }
        if response_chunks.is_empty() {
            return Err(Error::validation("response chunks cannot be empty"));
        }
        for (i, chunk) in response_chunks.iter().enumerate() {
            if chunk.sequence != i as u64 {
                return Err(Error::validation(format!(
                    "response chunks must be sequential with no gaps: \
                     expected sequence {i}, got {}",
                    chunk.sequence
                )));
            }
        }
        Ok(Self { request, fingerprint, response_chunks, metadata: Vec::new() })
    }

    /// Attaches interaction-level metadata, replacing any existing pairs.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Vec<(String, String)>) -> Self {
        self.metadata = metadata;
        self
    }

    /// The recorded request.
    #[must_use]
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// The fingerprint derived from the request.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Ordered response chunks.
    #[must_use]
    pub fn response_chunks(&self) -> &[ResponseChunk] {
        &self.response_chunks
    }

    /// Interaction-level metadata pairs.
    #[must_use]
    pub fn metadata(&self) -> &[(String, String)] {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> Request {
        Request::new("test-proto", "fetch", "resource-123", Vec::new(), Vec::new()).unwrap()
    }

    #[test]
    fn new_derives_matching_fingerprint() {
        let interaction =
            Interaction::new(request(), vec![ResponseChunk::new(b"hello".to_vec(), 0)]).unwrap();
        assert_eq!(interaction.fingerprint(), interaction.request().fingerprint());
    }

    #[test]
    fn from_parts_rejects_mismatched_fingerprint() {
        let other = Request::new("test-proto", "store", "resource-456", Vec::new(), Vec::new())
            .unwrap()
            .fingerprint();
        let result =
            Interaction::from_parts(request(), other, vec![ResponseChunk::new(b"x".to_vec(), 0)]);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn rejects_empty_chunk_sequence() {
        let result = Interaction::new(request(), Vec::new());
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn rejects_sequence_not_starting_at_zero() {
        let result = Interaction::new(request(), vec![ResponseChunk::new(b"x".to_vec(), 1)]);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn rejects_gapped_sequence() {
        let chunks =
            vec![ResponseChunk::new(b"a".to_vec(), 0), ResponseChunk::new(b"b".to_vec(), 2)];
        let result = Interaction::new(request(), chunks);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn accepts_contiguous_sequence() {
        let chunks = vec![
            ResponseChunk::new(b"a".to_vec(), 0),
            ResponseChunk::new(b"b".to_vec(), 1),
            ResponseChunk::new(b"c".to_vec(), 2),
        ];
        let interaction = Interaction::new(request(), chunks).unwrap();
        assert_eq!(interaction.response_chunks().len(), 3);
    }

    #[test]
    fn metadata_round_trips_through_builder() {
        let interaction = Interaction::new(request(), vec![ResponseChunk::new(b"x".to_vec(), 0)])
            .unwrap()
            .with_metadata(vec![("source".to_string(), "staging".to_string())]);
        assert_eq!(interaction.metadata().len(), 1);
        assert_eq!(interaction.metadata()[0].0, "source");
    }
}
