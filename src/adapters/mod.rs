//! Reference adapter implementations of the ports.
//!
//! Protocol adapters translate wire traffic into core request values; the
//! core only fixes the types they produce and consume. The HTTP responder
//! here is a reference implementation, not a framework.

pub mod http;

pub use http::HttpResponder;
