//! Capability descriptor and session-creation bodies.
//!
//! The server matches sessions against a W3C `alwaysMatch` block; everything
//! that is not a standard W3C capability carries the `appium:` vendor prefix.

use serde::{Deserialize, Serialize};

/// Automation engine driving the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutomationEngine {
	/// Android instrumentation backend.
	#[serde(rename = "UiAutomator2")]
	UiAutomator2,
	/// iOS XCTest backend.
	#[serde(rename = "XCUITest")]
	XcuiTest,
}

/// Capability descriptor sent when opening a session.
///
/// Field names match the wire exactly; `no_reset: false` asks the server to
/// reinstall the app (fresh state), `true` preserves app data between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
	/// Target platform, e.g. `"Android"`.
	#[serde(rename = "platformName")]
	pub platform_name: String,
	/// Device or emulator name the server should attach to.
	#[serde(rename = "appium:deviceName")]
	pub device_name: String,
	/// Path to the application binary under test.
	#[serde(rename = "appium:app")]
	pub app: String,
	/// Automation engine to use.
	#[serde(rename = "appium:automationName")]
	pub automation_name: AutomationEngine,
	/// `false` = fresh install, `true` = preserve app state.
	#[serde(rename = "appium:noReset")]
	pub no_reset: bool,
}

/// Body of `POST /session`.
#[derive(Debug, Clone, Serialize)]
pub struct NewSessionRequest {
	pub capabilities: CapabilityMatch,
}

/// W3C capability-matching block. Only `alwaysMatch` is used.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityMatch {
	#[serde(rename = "alwaysMatch")]
	pub always_match: Capabilities,
}

impl NewSessionRequest {
	pub fn new(capabilities: Capabilities) -> Self {
		Self {
			capabilities: CapabilityMatch {
				always_match: capabilities,
			},
		}
	}
}

/// `value` payload of a successful `POST /session`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSessionValue {
	#[serde(rename = "sessionId")]
	pub session_id: String,
	/// Capabilities the server actually granted; opaque to the client.
	#[serde(default)]
	pub capabilities: serde_json::Value,
}

/// Body of the `appium/device/terminate_app` and `activate_app` requests.
#[derive(Debug, Clone, Serialize)]
pub struct AppIdRequest {
	#[serde(rename = "appId")]
	pub app_id: String,
}

impl AppIdRequest {
	pub fn new(app_id: impl Into<String>) -> Self {
		Self {
			app_id: app_id.into(),
		}
	}
}
