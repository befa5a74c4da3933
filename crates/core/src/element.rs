//! Element handles bound to the session that produced them.

use appdrive_protocol::ValueRequest;
use appdrive_runtime::Result;
use serde_json::json;

use crate::session::Session;

/// Ownership-free reference into the live UI tree.
///
/// Valid only until the next navigation or mutation; the borrow of
/// [`Session`] keeps a handle from outliving the scenario's session, and
/// use after a screen transition surfaces as
/// [`Error::StaleElement`](appdrive_runtime::Error::StaleElement) from the
/// server. Handles must never be retained across screen transitions.
#[derive(Clone)]
pub struct ElementHandle<'s> {
	session: &'s Session,
	id: String,
}

impl std::fmt::Debug for ElementHandle<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ElementHandle").field("id", &self.id).finish()
	}
}

impl<'s> ElementHandle<'s> {
	pub(crate) fn new(session: &'s Session, id: String) -> Self {
		Self { session, id }
	}

	pub fn element_id(&self) -> &str {
		&self.id
	}

	pub async fn click(&self) -> Result<()> {
		self.session
			.transport()
			.post::<_, serde_json::Value>(&self.path("click"), &json!({}))
			.await
			.map(|_| ())
	}

	pub async fn clear(&self) -> Result<()> {
		self.session
			.transport()
			.post::<_, serde_json::Value>(&self.path("clear"), &json!({}))
			.await
			.map(|_| ())
	}

	pub async fn send_keys(&self, text: &str) -> Result<()> {
		self.session
			.transport()
			.post::<_, serde_json::Value>(&self.path("value"), &ValueRequest::new(text))
			.await
			.map(|_| ())
	}

	pub async fn text(&self) -> Result<String> {
		self.session.transport().get(&self.path("text")).await
	}

	pub async fn displayed(&self) -> Result<bool> {
		self.session.transport().get(&self.path("displayed")).await
	}

	/// Whether the element accepts input; checked before typing.
	pub async fn enabled(&self) -> Result<bool> {
		self.session.transport().get(&self.path("enabled")).await
	}

	fn path(&self, suffix: &str) -> String {
		self.session.path(&format!("element/{}/{}", self.id, suffix))
	}
}
