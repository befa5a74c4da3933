//! Environment-derived configuration, resolved once at the process edge.
//!
//! Core logic never reads ambient process state; everything it needs is
//! collected here and passed in explicitly. SDK/toolchain variables like
//! `ANDROID_HOME` are the external driver's business, not ours.

use anyhow::{Context, Result};
use appdrive::{Endpoint, ResetPolicy, SessionConfig, Timeouts};

/// Everything a scenario binary needs from its environment.
#[derive(Debug, Clone)]
pub struct FlowEnv {
	pub endpoint: Endpoint,
	pub device_name: String,
	/// Path to the application binary under test; an external input.
	pub app_path: String,
	/// Bundle id used for app relaunch.
	pub app_id: String,
	pub email: String,
	pub password: String,
	pub timeouts: Timeouts,
}

impl FlowEnv {
	/// Reads `APPIUM_HOST`, `APPIUM_PORT`, `APP_PATH`, `APP_ID`,
	/// `TEST_EMAIL`, `TEST_PASSWORD` and `DEVICE_NAME`, defaulting each to
	/// what the shop app's test rig ships with.
	pub fn from_env() -> Result<Self> {
		Self::from_vars(|key| std::env::var(key).ok())
	}

	fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let default = Endpoint::default();
		let host = var("APPIUM_HOST").unwrap_or(default.host);
		let port = match var("APPIUM_PORT") {
			Some(raw) => raw
				.parse()
				.with_context(|| format!("APPIUM_PORT must be a port number, got `{raw}`"))?,
			None => default.port,
		};

		Ok(Self {
			endpoint: Endpoint::new(host, port),
			device_name: var("DEVICE_NAME").unwrap_or_else(|| "Android Emulator".into()),
			app_path: var("APP_PATH").unwrap_or_else(|| "./builds/apk/app-release.apk".into()),
			app_id: var("APP_ID").unwrap_or_else(|| "com.example.shopapp".into()),
			email: var("TEST_EMAIL").unwrap_or_else(|| "test@example.com".into()),
			password: var("TEST_PASSWORD").unwrap_or_else(|| "test123456".into()),
			timeouts: Timeouts::default(),
		})
	}

	/// Session configuration for one scenario run.
	pub fn session_config(&self, reset_policy: ResetPolicy) -> SessionConfig {
		SessionConfig::new(self.endpoint.clone(), &self.app_path, &self.app_id)
			.with_device_name(&self.device_name)
			.with_reset_policy(reset_policy)
			.with_timeouts(self.timeouts)
	}
}
