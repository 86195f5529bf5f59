//! Persistence port for cassettes.

use crate::error::Error;
use crate::model::Cassette;

/// Loads and saves cassettes from some backing storage.
///
/// Whether a missing backing store is an error or yields an empty cassette
/// is decided when the store is constructed, not per call. `save` overwrites
/// any prior content; implementations should make it all-or-nothing so a
/// crashed save never leaves a truncated cassette observable.
pub trait CassetteStore: Send {
    /// Returns the persisted cassette.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CassetteLoad`] when the storage is missing (in
    /// strict mode), unreadable, or holds malformed content.
    fn load(&self) -> Result<Cassette, Error>;

    /// Persists the given cassette, replacing any prior content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CassetteSave`] when the write fails.
    fn save(&self, cassette: &Cassette) -> Result<(), Error>;
}
