//! Event Sink Implementations
//!
//! Provides concrete implementations of PrepareEventSink:
//! - JsonEventSink: NDJSON output for scripts and CI
//!
//! The human-readable console sink lives with the binary's UI code.

mod json;

pub use json::JsonEventSink;
