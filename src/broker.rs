//! Mode-driven dispatcher between cassette, upstream, and store.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::model::{Cassette, Fingerprint, Interaction, Request, ResponseChunk};
use crate::ports::{CassetteStore, LiveResponder};

/// Dispatch policy for a broker. Closed set; adding a mode is an API change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Serve recorded interactions only; a miss is fatal.
    Replay,
    /// Always forward upstream and record, even on a cassette hit.
    Record,
    /// Serve hits from the cassette, forward and record misses.
    Auto,
}

impl Mode {
    /// Whether this mode ever forwards to the live responder.
    #[must_use]
    pub fn forwards_upstream(self) -> bool {
        matches!(self, Self::Record | Self::Auto)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Replay => "replay",
            Self::Record => "record",
            Self::Auto => "auto",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replay" => Ok(Self::Replay),
            "record" => Ok(Self::Record),
            "auto" => Ok(Self::Auto),
            other => Err(Error::validation(format!(
                "unknown broker mode {other:?}, expected \"replay\", \"record\", or \"auto\""
            ))),
        }
    }
}

/// Ordered chunk sequence returned by [`Broker::replay`].
///
/// Yields chunks in strictly increasing sequence order. The consumer may
/// stop iterating at any point without side effects on the cassette: on the
/// record path the interaction is fully recorded and persisted before this
/// stream is handed out.
#[derive(Debug)]
pub struct ReplayStream {
    chunks: std::vec::IntoIter<ResponseChunk>,
}

impl ReplayStream {
    fn new(chunks: Vec<ResponseChunk>) -> Self {
        Self { chunks: chunks.into_iter() }
    }
}

impl Iterator for ReplayStream {
    type Item = ResponseChunk;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for ReplayStream {}

/// Serves `replay` calls under a fixed mode, routing between the current
/// cassette, an optional live responder, and an optional store.
///
/// The broker's only mutable state is its current cassette reference; a
/// successful record swaps that reference after persistence has committed.
/// A single broker is not meant to be shared across threads.
pub struct Broker {
    cassette: Cassette,
    mode: Mode,
    live_responder: Option<Box<dyn LiveResponder>>,
    store: Option<Box<dyn CassetteStore>>,
}

impl Broker {
    /// Creates a broker over the given cassette.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LiveResponderRequired`] when `mode` is `record` or
    /// `auto` and no responder is supplied. Enforced here rather than on the
    /// first request so that misconfiguration surfaces at wiring time.
    pub fn new(
        cassette: Cassette,
        mode: Mode,
        live_responder: Option<Box<dyn LiveResponder>>,
        store: Option<Box<dyn CassetteStore>>,
    ) -> Result<Self, Error> {
        if mode.forwards_upstream() && live_responder.is_none() {
            return Err(Error::LiveResponderRequired { mode });
        }
        Ok(Self { cassette, mode, live_responder, store })
    }

    /// Creates a broker whose initial cassette is loaded from the store.
    /// The store stays attached, so recorded interactions are persisted
    /// back to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CassetteLoad`] when the load fails, or
    /// [`Error::LiveResponderRequired`] as in [`Broker::new`].
    pub fn from_store(
        store: Box<dyn CassetteStore>,
        mode: Mode,
        live_responder: Option<Box<dyn LiveResponder>>,
    ) -> Result<Self, Error> {
        let cassette = store.load()?;
        Self::new(cassette, mode, live_responder, Some(store))
    }

    /// The broker's current cassette.
    #[must_use]
    pub fn cassette(&self) -> &Cassette {
        &self.cassette
    }

    /// The broker's fixed mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Serves one request according to the mode table.
    ///
    /// The fingerprint is computed exactly once, on entry. In `replay` mode
    /// a hit streams the recorded chunks and a miss fails; `auto` serves
    /// hits from the cassette and records misses; `record` always forwards
    /// upstream, even on a hit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InteractionNotFound`] on a `replay`-mode miss,
    /// [`Error::Responder`] when the upstream call fails,
    /// [`Error::Validation`] when the upstream response violates chunk
    /// invariants, and [`Error::CassetteSave`] when persisting the extended
    /// cassette fails. A failed call leaves the cassette unchanged and
    /// yields no chunk.
    pub fn replay(&mut self, request: &Request) -> Result<ReplayStream, Error> {
        let fingerprint = request.fingerprint();

        if self.mode != Mode::Record {
            if let Some(interaction) = self.cassette.find_interaction(fingerprint) {
                return Ok(ReplayStream::new(interaction.response_chunks().to_vec()));
            }
            if self.mode == Mode::Replay {
                return Err(Error::InteractionNotFound { request: Box::new(request.clone()) });
            }
        }

        self.forward_and_record(request, fingerprint)
    }

    /// The record path: forward, buffer, record, persist, then stream.
    ///
    /// The upstream response is drained completely before anything else
    /// happens. Streaming while recording would leave the cassette
    /// incomplete whenever the consumer cancels early, so no chunk becomes
    /// observable until the interaction is recorded and persisted.
    fn forward_and_record(
        &mut self,
        request: &Request,
        fingerprint: Fingerprint,
    ) -> Result<ReplayStream, Error> {
        let responder = self
            .live_responder
            .as_mut()
            .ok_or(Error::LiveResponderRequired { mode: self.mode })?;

        let chunks =
            responder.respond(request).map_err(|source| Error::Responder { source })?;

        let interaction = Interaction::from_parts(request.clone(), fingerprint, chunks.clone())?;
        let extended = self.cassette.append(interaction);

        if let Some(store) = &self.store {
            store.save(&extended)?;
        }

        self.cassette = extended;
        Ok(ReplayStream::new(chunks))
    }
}

impl fmt::Debug for Broker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broker")
            .field("mode", &self.mode)
            .field("interactions", &self.cassette.len())
            .field("live_responder", &self.live_responder.is_some())
            .field("store", &self.store.is_some())
            .finish()
    }
}
