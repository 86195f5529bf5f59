//! Serialized form of a cassette.
//!
//! The persisted layout is a single JSON object with an `interactions`
//! array. Byte payloads (`body`, chunk `data`) are base64; fingerprints are
//! lowercase hex. Headers keep their order as an array of two-element
//! arrays. Decoding re-validates every fingerprint against its request.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::{Cassette, Fingerprint, Interaction, Request, ResponseChunk};

/// Top-level persisted document.
#[derive(Debug, Serialize, Deserialize)]
pub struct CassetteFile {
    interactions: Vec<InteractionRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct InteractionRecord {
    request: RequestRecord,
    fingerprint: String,
    response_chunks: Vec<ChunkRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    metadata: Vec<(String, String)>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RequestRecord {
    protocol: String,
    action: String,
    target: String,
    headers: Vec<(String, String)>,
    body: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChunkRecord {
    data: String,
    sequence: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    metadata: Vec<(String, String)>,
}

impl CassetteFile {
    /// Encodes a cassette into its serialized form.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        let interactions = cassette
            .interactions()
            .iter()
            .map(|interaction| InteractionRecord {
                request: RequestRecord {
                    protocol: interaction.request().protocol().to_string(),
                    action: interaction.request().action().to_string(),
                    target: interaction.request().target().to_string(),
                    headers: interaction.request().headers().to_vec(),
                    body: STANDARD.encode(interaction.request().body()),
                },
                fingerprint: interaction.fingerprint().to_hex(),
                response_chunks: interaction
                    .response_chunks()
                    .iter()
                    .map(|chunk| ChunkRecord {
                        data: STANDARD.encode(&chunk.data),
                        sequence: chunk.sequence,
                        metadata: chunk.metadata.clone(),
                    })
                    .collect(),
                metadata: interaction.metadata().to_vec(),
            })
            .collect();
        Self { interactions }
    }

    /// Decodes into a validated cassette.
    ///
    /// # Errors
    ///
    /// Returns a validation error when base64 or hex decoding fails, a
    /// required field is empty, a chunk sequence is non-contiguous, or a
    /// fingerprint does not match its request.
    pub fn into_cassette(self) -> Result<Cassette, Error> {
        let mut interactions = Vec::with_capacity(self.interactions.len());
        for record in self.interactions {
            interactions.push(record.into_interaction()?);
        }
        Ok(Cassette::new(interactions))
    }
}

impl InteractionRecord {
    fn into_interaction(self) -> Result<Interaction, Error> {
        let body = decode_base64(&self.request.body, "request body")?;
        let request = Request::new(
            self.request.protocol,
            self.request.action,
            self.request.target,
            self.request.headers,
            body,
        )?;
        let fingerprint = Fingerprint::parse_hex(&self.fingerprint)?;
        let mut chunks = Vec::with_capacity(self.response_chunks.len());
        for record in self.response_chunks {
            chunks.push(ResponseChunk {
                data: decode_base64(&record.data, "chunk data")?,
                sequence: record.sequence,
                metadata: record.metadata,
            });
        }
        Ok(Interaction::from_parts(request, fingerprint, chunks)?.with_metadata(self.metadata))
    }
}

fn decode_base64(encoded: &str, what: &str) -> Result<Vec<u8>, Error> {
    STANDARD
        .decode(encoded)
        .map_err(|err| Error::validation(format!("invalid base64 in {what}: {err}")))
}
