//! Testing utilities for the dietdesk workspace.
//!
//! Provides:
//! - Raw notification payload builders ([`fixtures`])
//! - A scripted [`dietdesk_api::ApiTransport`] for engine tests
//! - A loopback HTTP server standing in for the remote service
//! - A `TestWorld` for CLI integration tests

pub mod fixtures;
pub mod server;
pub mod transport;
pub mod world;

pub use server::MockApi;
pub use transport::ScriptedTransport;
pub use world::TestWorld;
