//! Session lifecycle and raw protocol operations.

use appdrive_protocol::{
	ActionsRequest, AppIdRequest, ElementRef, FindRequest, NewSessionRequest, NewSessionValue,
	WindowRect,
};
use appdrive_runtime::{Result, Transport};
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::element::ElementHandle;

/// Live connection to the automation server controlling one app instance.
///
/// At most one session is active per scenario run. [`close`](Self::close)
/// is idempotent; scoped release on every exit path is the job of
/// [`ScopedSession`](crate::scenario::ScopedSession), the only place that
/// calls it.
#[derive(Debug)]
pub struct Session {
	transport: Transport,
	id: String,
	config: SessionConfig,
	closed: bool,
}

impl Session {
	/// Opens a session, launching or resetting the app under test according
	/// to the configured reset policy.
	///
	/// # Errors
	///
	/// [`Error::ServerUnreachable`](appdrive_runtime::Error::ServerUnreachable)
	/// if the server cannot be reached,
	/// [`Error::SessionRejected`](appdrive_runtime::Error::SessionRejected)
	/// if it refuses the capability descriptor.
	pub async fn open(config: SessionConfig) -> Result<Self> {
		let transport = Transport::new(&config.endpoint)?;
		debug!(
			target: "appdrive.session",
			endpoint = %config.endpoint,
			device = %config.device_name,
			"opening session"
		);
		let value: NewSessionValue = transport
			.post("session", &NewSessionRequest::new(config.capabilities()))
			.await?;
		debug!(target: "appdrive.session", id = %value.session_id, "session active");
		Ok(Self {
			transport,
			id: value.session_id,
			config,
			closed: false,
		})
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	pub fn is_closed(&self) -> bool {
		self.closed
	}

	/// Releases the session. Idempotent: the second and later calls are
	/// no-ops, even if the first delete failed on the wire.
	pub async fn close(&mut self) -> Result<()> {
		if self.closed {
			return Ok(());
		}
		self.closed = true;
		debug!(target: "appdrive.session", id = %self.id, "closing session");
		self.transport.delete(&format!("session/{}", self.id)).await
	}

	/// Single element lookup; misses surface as
	/// [`Error::NoSuchElement`](appdrive_runtime::Error::NoSuchElement).
	pub async fn find_element(&self, request: &FindRequest) -> Result<ElementHandle<'_>> {
		let found: ElementRef = self.transport.post(&self.path("element"), request).await?;
		Ok(ElementHandle::new(self, found.element_id))
	}

	/// Every match for the request, in document order. An empty result is
	/// not an error.
	pub async fn find_elements(&self, request: &FindRequest) -> Result<Vec<ElementHandle<'_>>> {
		let found: Vec<ElementRef> = self.transport.post(&self.path("elements"), request).await?;
		Ok(found
			.into_iter()
			.map(|element| ElementHandle::new(self, element.element_id))
			.collect())
	}

	/// True if an element with the given accessibility id is present.
	pub async fn has_marker(&self, id: &str) -> Result<bool> {
		let found = self
			.find_elements(&FindRequest::accessibility_id(id))
			.await?;
		Ok(!found.is_empty())
	}

	/// Count of elements whose accessibility description contains `prefix`.
	pub async fn count_marker(&self, prefix: &str) -> Result<usize> {
		let found = self.find_elements(&FindRequest::desc_contains(prefix)).await?;
		Ok(found.len())
	}

	/// Current screen dimensions, used to denormalize coordinate regions.
	pub async fn window_rect(&self) -> Result<WindowRect> {
		self.transport.get(&self.path("window/rect")).await
	}

	/// Dispatches a synthesized pointer sequence. Once dispatched there is
	/// no cancellation; the bounded request timeout is the only limit.
	pub async fn perform_actions(&self, request: &ActionsRequest) -> Result<()> {
		self.transport
			.post::<_, serde_json::Value>(&self.path("actions"), request)
			.await
			.map(|_| ())
	}

	/// Terminates and re-activates the app under test. A relaunch lands on
	/// the app's entry screen, which back-navigation does not guarantee.
	pub async fn relaunch_app(&self) -> Result<()> {
		let app = AppIdRequest::new(self.config.app_id.clone());
		debug!(target: "appdrive.session", app_id = %self.config.app_id, "relaunching app");
		self.transport
			.post::<_, serde_json::Value>(&self.path("appium/device/terminate_app"), &app)
			.await?;
		self.transport
			.post::<_, serde_json::Value>(&self.path("appium/device/activate_app"), &app)
			.await
			.map(|_| ())
	}

	pub(crate) fn transport(&self) -> &Transport {
		&self.transport
	}

	pub(crate) fn path(&self, suffix: &str) -> String {
		format!("session/{}/{}", self.id, suffix)
	}
}

impl Drop for Session {
	fn drop(&mut self) {
		// Close is async and cannot run here; a leaked open session means a
		// scenario bypassed scoped acquisition.
		if !self.closed {
			warn!(target: "appdrive.session", id = %self.id, "session dropped without close");
		}
	}
}

#[cfg(test)]
mod tests {
	use httpmock::prelude::*;
	use serde_json::json;

	use crate::testutil;

	#[tokio::test]
	async fn open_posts_capabilities_and_keeps_id() {
		let server = MockServer::start_async().await;
		let mock = testutil::mock_new_session(&server).await;

		let session = testutil::open_session(&server).await;
		assert_eq!(session.id(), testutil::SESSION_ID);
		assert!(!session.is_closed());
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn rejected_capabilities_surface_as_session_error() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(POST).path("/session");
				then.status(500).json_body(json!({
					"value": { "error": "session not created", "message": "bad caps" }
				}));
			})
			.await;

		let err = crate::Session::open(testutil::config(&server)).await.unwrap_err();
		assert!(err.is_session_error(), "got: {err}");
	}

	#[tokio::test]
	async fn close_is_idempotent() {
		let server = MockServer::start_async().await;
		testutil::mock_new_session(&server).await;
		let delete = server
			.mock_async(|when, then| {
				when.method(DELETE).path(format!("/session/{}", testutil::SESSION_ID));
				then.status(200).json_body(json!({ "value": null }));
			})
			.await;

		let mut session = testutil::open_session(&server).await;
		session.close().await.unwrap();
		session.close().await.unwrap();
		assert!(session.is_closed());
		delete.assert_hits_async(1).await;
	}

	#[tokio::test]
	async fn relaunch_terminates_then_activates() {
		let server = MockServer::start_async().await;
		testutil::mock_new_session(&server).await;
		let terminate = server
			.mock_async(|when, then| {
				when.method(POST)
					.path(format!(
						"/session/{}/appium/device/terminate_app",
						testutil::SESSION_ID
					))
					.json_body(json!({ "appId": testutil::APP_ID }));
				then.status(200).json_body(json!({ "value": true }));
			})
			.await;
		let activate = server
			.mock_async(|when, then| {
				when.method(POST)
					.path(format!(
						"/session/{}/appium/device/activate_app",
						testutil::SESSION_ID
					))
					.json_body(json!({ "appId": testutil::APP_ID }));
				then.status(200).json_body(json!({ "value": null }));
			})
			.await;

		let session = testutil::open_session(&server).await;
		session.relaunch_app().await.unwrap();
		terminate.assert_async().await;
		activate.assert_async().await;
	}
}
