//! Signup scenario: create an account with a unique email, sign in with
//! it, and verify the home screen.

use std::time::{SystemTime, UNIX_EPOCH};

use appdrive::{ResetPolicy, Result, ScopedSession, ScreenState, Session, Verdict, scenario};
use tokio::time::sleep;
use tracing::info;

use crate::env::FlowEnv;
use crate::flows::steps;
use crate::targets;

pub async fn run(env: &FlowEnv) -> Verdict {
	let session = match ScopedSession::open(env.session_config(ResetPolicy::FreshInstall)).await {
		Ok(session) => session,
		Err(err) => return Verdict::failed(format!("session error: {err}")),
	};
	let outcome = drive(&session, env).await;
	session.finish(outcome).await
}

async fn drive(session: &Session, env: &FlowEnv) -> Result<Verdict> {
	match appdrive::classify(session).await? {
		// Fresh installs land on the login screen, which carries the link
		// to the signup form.
		ScreenState::LoginScreen => {}
		ScreenState::Unknown => {
			return Ok(Verdict::failed("could not determine initial screen"));
		}
		other => {
			return Ok(Verdict::failed(format!("unexpected initial screen: {other}")));
		}
	}

	let email = unique_email();
	info!(target: "appdrive.flow", %email, "creating account");

	let outcome = scenario::tap_target(session, &targets::SIGNUP_LINK).await?;
	if let Some(verdict) = steps::step_failure("open signup form", outcome) {
		return Ok(verdict);
	}
	sleep(session.config().timeouts.settle).await;

	let outcome = scenario::type_into(session, &targets::SIGNUP_EMAIL_FIELD, &email).await?;
	if let Some(verdict) = steps::step_failure("enter signup email", outcome) {
		return Ok(verdict);
	}
	let outcome =
		scenario::type_into(session, &targets::SIGNUP_PASSWORD_FIELD, &env.password).await?;
	if let Some(verdict) = steps::step_failure("enter signup password", outcome) {
		return Ok(verdict);
	}
	let outcome =
		scenario::type_into(session, &targets::SIGNUP_CONFIRM_FIELD, &env.password).await?;
	if let Some(verdict) = steps::step_failure("confirm signup password", outcome) {
		return Ok(verdict);
	}
	let outcome = scenario::tap_target(session, &targets::SIGNUP_BUTTON).await?;
	if let Some(verdict) = steps::step_failure("submit signup", outcome) {
		return Ok(verdict);
	}
	// Account creation round-trips to the backend before the login screen
	// returns.
	sleep(session.config().timeouts.settle).await;

	info!(target: "appdrive.flow", "signing in with the created account");
	if let Some(verdict) = steps::submit_login(session, &email, &env.password).await? {
		return Ok(verdict);
	}
	steps::verify_home(session).await
}

/// Unique per run so repeated signups never collide on the backend.
fn unique_email() -> String {
	let seconds = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|elapsed| elapsed.as_secs())
		.unwrap_or(0);
	format!("test_{seconds}@example.com")
}
