//! Automation-server endpoint.
//!
//! The endpoint is plain data; resolving it from the process environment
//! happens at the binary edge, never inside core logic.

use std::fmt;

use url::Url;

use crate::error::{Error, Result};

/// Default host the automation server listens on.
pub const DEFAULT_HOST: &str = "localhost";

/// Default automation server port.
pub const DEFAULT_PORT: u16 = 4723;

/// Where the automation server lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
	pub host: String,
	pub port: u16,
}

impl Endpoint {
	pub fn new(host: impl Into<String>, port: u16) -> Self {
		Self {
			host: host.into(),
			port,
		}
	}

	/// Base URL all session paths are joined onto.
	pub fn base_url(&self) -> Result<Url> {
		Url::parse(&format!("http://{}:{}/", self.host, self.port))
			.map_err(|err| Error::Config(format!("invalid endpoint {self}: {err}")))
	}
}

impl Default for Endpoint {
	fn default() -> Self {
		Self::new(DEFAULT_HOST, DEFAULT_PORT)
	}
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.host, self.port)
	}
}
