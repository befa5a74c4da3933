//! Scenario machinery: verdicts, scoped session release, retry discipline.

use appdrive_runtime::Result;
use tracing::{debug, warn};

use crate::action::{self, ActionOutcome};
use crate::config::SessionConfig;
use crate::detect;
use crate::locator::{self, LocatorSpec};
use crate::session::Session;

/// Terminal result of a scenario: pass/fail with a human-readable reason.
/// There is no partial credit per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
	Passed,
	Failed { reason: String },
}

impl Verdict {
	pub fn failed(reason: impl Into<String>) -> Self {
		Verdict::Failed {
			reason: reason.into(),
		}
	}

	pub fn passed(&self) -> bool {
		matches!(self, Verdict::Passed)
	}

	pub fn reason(&self) -> Option<&str> {
		match self {
			Verdict::Passed => None,
			Verdict::Failed { reason } => Some(reason),
		}
	}

	/// Process exit code: 0 = pass, 1 = fail or driver error.
	pub fn exit_code(&self) -> i32 {
		if self.passed() { 0 } else { 1 }
	}
}

/// Session with guaranteed release.
///
/// Opening and finishing through this type is the only way flows touch the
/// session lifecycle, which keeps `close` at exactly one call per run no
/// matter how the scenario terminates.
pub struct ScopedSession {
	inner: Session,
}

impl ScopedSession {
	/// # Errors
	///
	/// Session-level failures from [`Session::open`]; there is nothing to
	/// release when opening fails.
	pub async fn open(config: SessionConfig) -> Result<Self> {
		let inner = Session::open(config).await?;
		Ok(Self { inner })
	}

	/// Releases the session and folds a drive result into the verdict.
	/// Errors from the drive become `Failed` with the error as the reason;
	/// a close failure is logged but cannot change the verdict.
	pub async fn finish(self, outcome: Result<Verdict>) -> Verdict {
		let mut session = self.inner;
		if let Err(err) = session.close().await {
			warn!(target: "appdrive.session", error = %err, "session close failed");
		}
		outcome.unwrap_or_else(|err| Verdict::failed(err.to_string()))
	}
}

impl std::ops::Deref for ScopedSession {
	type Target = Session;

	fn deref(&self) -> &Session {
		&self.inner
	}
}

/// Resolves a target and taps it, applying the retry discipline:
///
/// - `Timeout`: re-check screen state once (locates are idempotent), then
///   retry the resolve + tap.
/// - `StaleHandle`: re-resolve once and retry; the stale handle is never
///   reused.
///
/// Other outcomes are returned to the caller as-is.
pub async fn tap_target(session: &Session, spec: &LocatorSpec) -> Result<ActionOutcome> {
	let mut rechecked = false;
	let mut re_resolved = false;
	loop {
		let target = locator::resolve(session, spec).await?;
		match action::tap(session, &target).await? {
			ActionOutcome::Timeout if !rechecked => {
				rechecked = true;
				let state = detect::classify(session).await?;
				debug!(
					target: "appdrive.scenario",
					target_name = spec.name(),
					%state,
					"timeout; re-checked state, retrying once"
				);
			}
			ActionOutcome::StaleHandle if !re_resolved => {
				re_resolved = true;
				debug!(
					target: "appdrive.scenario",
					target_name = spec.name(),
					"stale handle; re-resolving"
				);
			}
			outcome => return Ok(outcome),
		}
	}
}

/// Resolves a text target and types into it, with the same retry
/// discipline as [`tap_target`].
pub async fn type_into(session: &Session, spec: &LocatorSpec, text: &str) -> Result<ActionOutcome> {
	let mut rechecked = false;
	let mut re_resolved = false;
	loop {
		let element = locator::resolve_element(session, spec).await?;
		match action::set_text(session, &element, text).await? {
			ActionOutcome::Timeout if !rechecked => {
				rechecked = true;
				let state = detect::classify(session).await?;
				debug!(
					target: "appdrive.scenario",
					target_name = spec.name(),
					%state,
					"timeout; re-checked state, retrying once"
				);
			}
			ActionOutcome::StaleHandle if !re_resolved => {
				re_resolved = true;
				debug!(
					target: "appdrive.scenario",
					target_name = spec.name(),
					"stale handle; re-resolving"
				);
			}
			outcome => return Ok(outcome),
		}
	}
}
