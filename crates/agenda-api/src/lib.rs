// agenda-api: Async HTTP client for the Voice Agenda analytics backend

pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use endpoints::Endpoint;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
