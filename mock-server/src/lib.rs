//! HTTP servers used to exercise the todo API client.
//!
//! - [`MockServer`] replays queued responses and records every request, for
//!   asserting on exactly what a client sent.
//! - [`dev`] is a small in-memory todos/posts server, also shipped as the
//!   `mock-server` binary.

pub mod dev;
pub mod scripted;

pub use scripted::{MockResponse, MockServer, RecordedRequest};
