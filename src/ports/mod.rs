//! Port traits defining external boundaries.
//!
//! `LiveResponder` is the upstream boundary consulted when recording;
//! `CassetteStore` is the persistence boundary. The asymmetry is
//! deliberate: the responder is a single operation (any closure works),
//! the store is a two-operation capability.

pub mod responder;
pub mod store;

pub use responder::LiveResponder;
pub use store::CassetteStore;
