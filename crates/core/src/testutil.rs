//! Shared fixtures for in-crate tests: a mock server session and short
//! timeouts so bounded waits expire quickly.

use std::time::Duration;

use appdrive_runtime::Endpoint;
use httpmock::MockServer;
use httpmock::prelude::*;
use serde_json::json;

use crate::config::{SessionConfig, Timeouts};
use crate::session::Session;

pub(crate) const SESSION_ID: &str = "test-session";
pub(crate) const APP_ID: &str = "com.example.shopapp";

pub(crate) fn short_timeouts() -> Timeouts {
	Timeouts {
		element_wait: Duration::from_millis(200),
		visibility_wait: Duration::from_millis(200),
		settle: Duration::from_millis(20),
		quiescence: Duration::from_millis(20),
		verify: Duration::from_millis(500),
		poll: Duration::from_millis(10),
	}
}

pub(crate) fn config(server: &MockServer) -> SessionConfig {
	SessionConfig::new(
		Endpoint::new(server.host(), server.port()),
		"./builds/apk/app-release.apk",
		APP_ID,
	)
	.with_timeouts(short_timeouts())
}

pub(crate) async fn mock_new_session(server: &MockServer) -> httpmock::Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(POST).path("/session");
			then.status(200).json_body(json!({
				"value": { "sessionId": SESSION_ID, "capabilities": {} }
			}));
		})
		.await
}

pub(crate) async fn open_session(server: &MockServer) -> Session {
	Session::open(config(server)).await.unwrap()
}

/// Mounts an element lookup for an accessibility id.
pub(crate) async fn mock_accessibility_hit<'a>(
	server: &'a MockServer,
	id: &str,
	element_id: &str,
) -> httpmock::Mock<'a> {
	let body = json!({ "using": "accessibility id", "value": id });
	let element = json!({ "element-6066-11e4-a52e-4f735466cecf": element_id });
	server
		.mock_async(move |when, then| {
			when.method(POST)
				.path(format!("/session/{SESSION_ID}/element"))
				.json_body(body);
			then.status(200).json_body(json!({ "value": element }));
		})
		.await
}

/// Mounts a miss for any single-element lookup with the given strategy body.
pub(crate) async fn mock_find_miss(
	server: &MockServer,
	body: serde_json::Value,
) -> httpmock::Mock<'_> {
	server
		.mock_async(move |when, then| {
			when.method(POST)
				.path(format!("/session/{SESSION_ID}/element"))
				.json_body(body);
			then.status(404).json_body(json!({
				"value": { "error": "no such element", "message": "not located" }
			}));
		})
		.await
}

/// Mounts a multi-element lookup returning the given element ids.
pub(crate) async fn mock_elements<'a>(
	server: &'a MockServer,
	body: serde_json::Value,
	element_ids: &[&str],
) -> httpmock::Mock<'a> {
	let elements: Vec<serde_json::Value> = element_ids
		.iter()
		.map(|id| json!({ "element-6066-11e4-a52e-4f735466cecf": id }))
		.collect();
	server
		.mock_async(move |when, then| {
			when.method(POST)
				.path(format!("/session/{SESSION_ID}/elements"))
				.json_body(body);
			then.status(200).json_body(json!({ "value": elements }));
		})
		.await
}

/// Mounts the window rect used by coordinate denormalization.
pub(crate) async fn mock_window_rect(
	server: &MockServer,
	width: u32,
	height: u32,
) -> httpmock::Mock<'_> {
	server
		.mock_async(move |when, then| {
			when.method(GET)
				.path(format!("/session/{SESSION_ID}/window/rect"));
			then.status(200).json_body(json!({
				"value": { "x": 0, "y": 0, "width": width, "height": height }
			}));
		})
		.await
}
