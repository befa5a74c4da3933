//! Explicit configuration for session construction.
//!
//! Everything the engine needs is carried in a [`SessionConfig`] built at
//! the process edge. Core logic never reads ambient process state.

use std::time::Duration;

use appdrive_protocol::{AutomationEngine, Capabilities};
use appdrive_runtime::Endpoint;

/// Whether the server reinstalls the app or keeps its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPolicy {
	/// Reinstall the app; flows start from first-run state.
	FreshInstall,
	/// Keep app data between runs (e.g. an authenticated user).
	PreserveState,
}

impl ResetPolicy {
	fn no_reset(self) -> bool {
		matches!(self, ResetPolicy::PreserveState)
	}
}

/// Configuration for one session with the automation server.
#[derive(Debug, Clone)]
pub struct SessionConfig {
	pub endpoint: Endpoint,
	/// Device or emulator name the server should attach to.
	pub device_name: String,
	/// Path to the application binary under test; an external input.
	pub app_path: String,
	/// Bundle/package id used for app relaunch.
	pub app_id: String,
	pub reset_policy: ResetPolicy,
	pub timeouts: Timeouts,
}

impl SessionConfig {
	pub fn new(endpoint: Endpoint, app_path: impl Into<String>, app_id: impl Into<String>) -> Self {
		Self {
			endpoint,
			device_name: "Android Emulator".into(),
			app_path: app_path.into(),
			app_id: app_id.into(),
			reset_policy: ResetPolicy::FreshInstall,
			timeouts: Timeouts::default(),
		}
	}

	pub fn with_device_name(mut self, device_name: impl Into<String>) -> Self {
		self.device_name = device_name.into();
		self
	}

	pub fn with_reset_policy(mut self, reset_policy: ResetPolicy) -> Self {
		self.reset_policy = reset_policy;
		self
	}

	pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
		self.timeouts = timeouts;
		self
	}

	pub(crate) fn capabilities(&self) -> Capabilities {
		Capabilities {
			platform_name: "Android".into(),
			device_name: self.device_name.clone(),
			app: self.app_path.clone(),
			automation_name: AutomationEngine::UiAutomator2,
			no_reset: self.reset_policy.no_reset(),
		}
	}
}

/// Bounded waits. Timing nondeterminism in the app under test is tolerated
/// exclusively through these; no operation waits forever.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
	/// Per-strategy wait for an element to appear during resolution.
	pub element_wait: Duration,
	/// Wait for a resolved element to become displayed before acting on it.
	pub visibility_wait: Duration,
	/// Fixed pause allowing animations and async loads to finish.
	pub settle: Duration,
	/// Quiescence window the detector grants before its single retry.
	pub quiescence: Duration,
	/// Outer budget for scenario verification polling.
	pub verify: Duration,
	/// Poll interval inside bounded waits.
	pub poll: Duration,
}

impl Default for Timeouts {
	fn default() -> Self {
		Self {
			element_wait: Duration::from_secs(10),
			visibility_wait: Duration::from_secs(10),
			settle: Duration::from_secs(2),
			quiescence: Duration::from_secs(3),
			verify: Duration::from_secs(20),
			poll: Duration::from_millis(250),
		}
	}
}
