use appdrive_protocol::{WireError, error_code};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	/// The automation server could not be reached at all.
	#[error("automation server unreachable at {endpoint}: {source}")]
	ServerUnreachable {
		endpoint: String,
		#[source]
		source: reqwest::Error,
	},

	/// The server refused the capability descriptor.
	#[error("session rejected: {message}")]
	SessionRejected { message: String },

	/// The server no longer recognizes the session id.
	#[error("session closed: {message}")]
	SessionClosed { message: String },

	/// A single lookup found nothing. Absorbed by fallback chains; only
	/// chain exhaustion surfaces as [`Error::ElementNotFound`].
	#[error("no such element: {message}")]
	NoSuchElement { message: String },

	/// Every strategy for a logical target exhausted its wait budget.
	#[error("element not found: {target}")]
	ElementNotFound { target: String },

	/// The element was resolved, then the UI navigated away. Callers must
	/// re-resolve; the handle is unusable.
	#[error("stale element: {message}")]
	StaleElement { message: String },

	#[error("timeout after {ms}ms waiting for: {condition}")]
	Timeout { ms: u64, condition: String },

	#[error("invalid configuration: {0}")]
	Config(String),

	/// Any other error the server reported on the wire.
	#[error("driver error `{error}`: {message}")]
	Wire { error: String, message: String },

	#[error(transparent)]
	Http(reqwest::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// Classifies a wire error payload by its W3C error string.
	pub(crate) fn from_wire(wire: WireError) -> Self {
		match wire.error.as_str() {
			error_code::NO_SUCH_ELEMENT => Error::NoSuchElement {
				message: wire.message,
			},
			error_code::STALE_ELEMENT => Error::StaleElement {
				message: wire.message,
			},
			error_code::INVALID_SESSION => Error::SessionClosed {
				message: wire.message,
			},
			error_code::SESSION_NOT_CREATED => Error::SessionRejected {
				message: wire.message,
			},
			_ => Error::Wire {
				error: wire.error,
				message: wire.message,
			},
		}
	}

	/// True when the scenario cannot proceed at all (session-level failure).
	pub fn is_session_error(&self) -> bool {
		matches!(
			self,
			Error::ServerUnreachable { .. } | Error::SessionRejected { .. } | Error::SessionClosed { .. }
		)
	}

	pub fn is_no_such_element(&self) -> bool {
		matches!(self, Error::NoSuchElement { .. })
	}

	pub fn is_stale(&self) -> bool {
		matches!(self, Error::StaleElement { .. })
	}
}
