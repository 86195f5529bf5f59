//! Immutable value types for recorded interactions.
//!
//! Every type here is immutable after construction; mutation is expressed
//! by producing a new value. Constructors enforce the invariants, so a
//! value that exists is a valid one.

pub mod cassette;
pub mod chunk;
pub mod fingerprint;
pub mod interaction;
pub mod request;

pub use cassette::Cassette;
pub use chunk::ResponseChunk;
pub use fingerprint::Fingerprint;
pub use interaction::Interaction;
pub use request::Request;
