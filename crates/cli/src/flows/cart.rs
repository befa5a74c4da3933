//! Cart scenario: open the first product, add it to the cart, relaunch the
//! app, open the cart, and check it holds exactly one item.

use appdrive::{ResetPolicy, Result, ScopedSession, ScreenState, Session, Verdict, markers, scenario};
use tokio::time::sleep;
use tracing::info;

use crate::env::FlowEnv;
use crate::flows::steps;
use crate::targets;

pub async fn run(env: &FlowEnv) -> Verdict {
	let session = match ScopedSession::open(env.session_config(ResetPolicy::PreserveState)).await {
		Ok(session) => session,
		Err(err) => return Verdict::failed(format!("session error: {err}")),
	};
	let outcome = drive(&session, env).await;
	session.finish(outcome).await
}

async fn drive(session: &Session, env: &FlowEnv) -> Result<Verdict> {
	// Same detect/login prefix as the authentication flow.
	match appdrive::classify(session).await? {
		ScreenState::LoginScreen => {
			info!(target: "appdrive.flow", "login screen detected; signing in first");
			if let Some(verdict) = steps::submit_login(session, &env.email, &env.password).await? {
				return Ok(verdict);
			}
			let verdict = steps::verify_home(session).await?;
			if !verdict.passed() {
				return Ok(verdict);
			}
		}
		ScreenState::HomeScreen => {
			info!(target: "appdrive.flow", "already authenticated; going straight to products");
		}
		ScreenState::Unknown => {
			return Ok(Verdict::failed("could not determine initial screen"));
		}
		other => {
			return Ok(Verdict::failed(format!("unexpected initial screen: {other}")));
		}
	}

	info!(target: "appdrive.flow", "opening first product");
	let outcome = scenario::tap_target(session, &targets::FIRST_PRODUCT).await?;
	if let Some(verdict) = steps::step_failure("open first product", outcome) {
		return Ok(verdict);
	}
	if !steps::await_state(session, ScreenState::ProductDetail).await? {
		return Ok(Verdict::failed("product detail screen not reached"));
	}

	info!(target: "appdrive.flow", "adding product to cart");
	let outcome = scenario::tap_target(session, &targets::ADD_TO_CART).await?;
	if let Some(verdict) = steps::step_failure("add to cart", outcome) {
		return Ok(verdict);
	}
	sleep(session.config().timeouts.settle).await;

	// Relaunch instead of back-navigation: back can land on an
	// unpredictable prior screen, a relaunch always lands on the entry
	// screen.
	session.relaunch_app().await?;
	sleep(session.config().timeouts.settle).await;

	// A coordinate gesture is only safe against a known screen; re-verify
	// identity after the relaunch before tapping the cart region.
	match appdrive::classify(session).await? {
		ScreenState::HomeScreen => {}
		other => {
			return Ok(Verdict::failed(format!("unexpected screen after relaunch: {other}")));
		}
	}

	info!(target: "appdrive.flow", "opening cart");
	let outcome = scenario::tap_target(session, &targets::CART_ICON).await?;
	if let Some(verdict) = steps::step_failure("open cart", outcome) {
		return Ok(verdict);
	}
	sleep(session.config().timeouts.settle).await;

	let items = session.count_marker(markers::CART_ITEM_PREFIX).await?;
	info!(target: "appdrive.flow", items, "cart inspected");
	match items {
		0 => Ok(Verdict::failed("cart empty after add")),
		1 => Ok(Verdict::Passed),
		n => Ok(Verdict::failed(format!("expected one cart item, found {n}"))),
	}
}
