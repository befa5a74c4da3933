//! Steps shared between flows: the login prefix and home verification.

use appdrive::{ActionOutcome, Result, ScreenState, Session, Verdict, scenario};
use tokio::time::{Instant, sleep};
use tracing::info;

use crate::targets;

/// Folds a non-success outcome into a failure verdict for a required step.
pub(crate) fn step_failure(step: &str, outcome: ActionOutcome) -> Option<Verdict> {
	if outcome.is_success() {
		None
	} else {
		Some(Verdict::failed(format!("{step} failed: {outcome:?}")))
	}
}

/// Enters credentials and submits, then pauses one settle interval for the
/// transition to start. Returns a verdict only when a required step failed.
pub(crate) async fn submit_login(
	session: &Session,
	email: &str,
	password: &str,
) -> Result<Option<Verdict>> {
	info!(target: "appdrive.flow", "entering credentials");
	let outcome = scenario::type_into(session, &targets::EMAIL_FIELD, email).await?;
	if let Some(verdict) = step_failure("enter email", outcome) {
		return Ok(Some(verdict));
	}
	let outcome = scenario::type_into(session, &targets::PASSWORD_FIELD, password).await?;
	if let Some(verdict) = step_failure("enter password", outcome) {
		return Ok(Some(verdict));
	}
	let outcome = scenario::tap_target(session, &targets::LOGIN_BUTTON).await?;
	if let Some(verdict) = step_failure("submit login", outcome) {
		return Ok(Some(verdict));
	}
	sleep(session.config().timeouts.settle).await;
	Ok(None)
}

/// Polls the detector until home signals appear, bounded by the verify
/// timeout. Login markers still being present is reported distinctly.
pub(crate) async fn verify_home(session: &Session) -> Result<Verdict> {
	let timeouts = session.config().timeouts;
	let deadline = Instant::now() + timeouts.verify;
	loop {
		let state = appdrive::classify(session).await?;
		if state == ScreenState::HomeScreen {
			info!(target: "appdrive.flow", "home screen verified");
			return Ok(Verdict::Passed);
		}
		if Instant::now() >= deadline {
			let reason = match state {
				ScreenState::LoginScreen => {
					"login screen still present after the verify timeout".to_string()
				}
				other => format!("home screen not detected (last seen: {other})"),
			};
			return Ok(Verdict::failed(reason));
		}
		sleep(timeouts.poll).await;
	}
}

/// Polls the detector until `wanted` is showing; false when the verify
/// budget runs out first.
pub(crate) async fn await_state(session: &Session, wanted: ScreenState) -> Result<bool> {
	let timeouts = session.config().timeouts;
	let deadline = Instant::now() + timeouts.verify;
	loop {
		if appdrive::classify(session).await? == wanted {
			return Ok(true);
		}
		if Instant::now() >= deadline {
			return Ok(false);
		}
		sleep(timeouts.poll).await;
	}
}
