//! Discrete piece of recorded response data.

/// One chunk of a response stream.
///
/// `sequence` is the zero-based position of the chunk within its response.
/// Within an interaction, sequences form the contiguous run `0..N` in
/// storage order (enforced when the interaction is constructed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseChunk {
    /// Chunk payload bytes.
    pub data: Vec<u8>,
    /// Zero-based position within the response stream.
    pub sequence: u64,
    /// Optional chunk-level metadata as ordered name/value pairs.
    pub metadata: Vec<(String, String)>,
}

impl ResponseChunk {
    /// Creates a chunk with no metadata.
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>, sequence: u64) -> Self {
        Self { data: data.into(), sequence, metadata: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_empty_metadata() {
        let chunk = ResponseChunk::new(b"hello".to_vec(), 0);
        assert_eq!(chunk.data, b"hello");
        assert_eq!(chunk.sequence, 0);
        assert!(chunk.metadata.is_empty());
    }
}
