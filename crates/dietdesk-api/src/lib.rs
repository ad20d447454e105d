pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use transport::{ApiTransport, HttpTransport};
