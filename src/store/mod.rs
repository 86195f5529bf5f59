//! Cassette persistence implementations.

pub mod json_file;
pub mod wire;

pub use json_file::JsonFileStore;
