//! Connection plumbing for the automation server.
//!
//! [`Transport`] speaks the W3C request/response contract over HTTP and
//! classifies wire errors into the [`Error`] taxonomy the rest of the
//! workspace decides against. Nothing here knows about screens or flows.

mod endpoint;
mod error;
mod transport;

pub use endpoint::{DEFAULT_HOST, DEFAULT_PORT, Endpoint};
pub use error::{Error, Result};
pub use transport::Transport;
