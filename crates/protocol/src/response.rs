//! Response envelope and error payloads.

use serde::{Deserialize, Serialize};

/// Every response wraps its payload in `value`, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
	pub value: T,
}

/// Error payload carried in `value` on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireError {
	/// Stable W3C error string, see [`error_code`].
	pub error: String,
	/// Human-readable description from the server.
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub stacktrace: Option<String>,
}

/// W3C error strings the client classifies.
pub mod error_code {
	pub const NO_SUCH_ELEMENT: &str = "no such element";
	pub const STALE_ELEMENT: &str = "stale element reference";
	pub const INVALID_SESSION: &str = "invalid session id";
	pub const SESSION_NOT_CREATED: &str = "session not created";
}

/// `value` payload of `GET /session/{id}/window/rect`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowRect {
	pub x: i64,
	pub y: i64,
	pub width: u32,
	pub height: u32,
}
