//! Authentication scenario: detect the screen, log in if needed, verify
//! the home screen is showing.

use appdrive::{ResetPolicy, Result, ScopedSession, ScreenState, Session, Verdict};
use tracing::info;

use crate::env::FlowEnv;
use crate::flows::steps;

/// Scenario states. `Done` carries the terminal verdict.
#[derive(Debug)]
enum AuthState {
	DetectingScreen,
	LoggingIn,
	AlreadyHome,
	Verifying,
	Done(Verdict),
}

pub async fn run(env: &FlowEnv) -> Verdict {
	let session = match ScopedSession::open(env.session_config(ResetPolicy::FreshInstall)).await {
		Ok(session) => session,
		// Session errors abort before any step runs; they are the sole
		// reported reason.
		Err(err) => return Verdict::failed(format!("session error: {err}")),
	};
	let outcome = drive(&session, env).await;
	session.finish(outcome).await
}

async fn drive(session: &Session, env: &FlowEnv) -> Result<Verdict> {
	let mut state = AuthState::DetectingScreen;
	loop {
		state = match state {
			AuthState::DetectingScreen => match appdrive::classify(session).await? {
				ScreenState::LoginScreen => AuthState::LoggingIn,
				ScreenState::HomeScreen => AuthState::AlreadyHome,
				ScreenState::Unknown => {
					AuthState::Done(Verdict::failed("could not determine initial screen"))
				}
				other => {
					AuthState::Done(Verdict::failed(format!("unexpected initial screen: {other}")))
				}
			},
			AuthState::LoggingIn => {
				info!(target: "appdrive.flow", "login screen detected; signing in");
				match steps::submit_login(session, &env.email, &env.password).await? {
					Some(verdict) => AuthState::Done(verdict),
					None => AuthState::Verifying,
				}
			}
			AuthState::AlreadyHome => {
				info!(target: "appdrive.flow", "already authenticated; skipping login");
				AuthState::Verifying
			}
			AuthState::Verifying => AuthState::Done(steps::verify_home(session).await?),
			AuthState::Done(verdict) => return Ok(verdict),
		};
	}
}
