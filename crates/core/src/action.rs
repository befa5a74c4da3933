//! Typed interactions with wait/retry discipline.
//!
//! Every element action is preceded by a bounded visibility wait. Failures
//! that the caller can act on (missing, timed out, stale) come back as an
//! [`ActionOutcome`], never as an error; only driver/communication
//! failures propagate as `Err`.

use appdrive_protocol::ActionsRequest;
use appdrive_runtime::{Error, Result};
use tokio::time::{Instant, sleep};
use tracing::{debug, warn};

use crate::element::ElementHandle;
use crate::locator::ResolvedTarget;
use crate::session::Session;

/// Result of one attempted interaction. Drives retry and fallback
/// decisions, so discarding one is a bug.
#[must_use = "action outcomes drive retry and fallback decisions"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
	Success,
	/// The target (or an editable target) was not there to act on.
	NotFound,
	/// The visibility wait elapsed. Retryable after a fresh state check.
	Timeout,
	/// The element resolved, then the UI navigated away. Indicates an
	/// ordering bug between action and state change; retry by
	/// re-resolving, never by reusing the handle.
	StaleHandle,
}

impl ActionOutcome {
	pub fn is_success(self) -> bool {
		matches!(self, ActionOutcome::Success)
	}
}

/// A raw gesture synthesized as a pointer sequence at explicit coordinates.
#[derive(Debug, Clone, Copy)]
pub enum Gesture {
	/// Tap at a normalized screen position (fractions of width/height).
	TapAt { x: f64, y: f64 },
	/// Swipe between two normalized positions over `duration_ms`.
	Swipe {
		from: (f64, f64),
		to: (f64, f64),
		duration_ms: u64,
	},
}

/// Taps a resolved target.
///
/// A raw point tap always dispatches successfully; whether it did the
/// right thing is for the caller's next state check to decide.
pub async fn tap(session: &Session, target: &ResolvedTarget<'_>) -> Result<ActionOutcome> {
	match target {
		ResolvedTarget::Element(element) => {
			let ready = wait_displayed(session, element).await?;
			if !ready.is_success() {
				return Ok(ready);
			}
			match element.click().await {
				Ok(()) => Ok(ActionOutcome::Success),
				Err(err) => outcome_from(err),
			}
		}
		ResolvedTarget::Point { x, y } => {
			debug!(target: "appdrive.action", x, y, "raw tap");
			session.perform_actions(&ActionsRequest::tap(*x, *y)).await?;
			Ok(ActionOutcome::Success)
		}
	}
}

/// Types into a field: focus first (tap-before-type), verify the field is
/// editable, then clear and send the text.
pub async fn set_text(
	session: &Session,
	element: &ElementHandle<'_>,
	text: &str,
) -> Result<ActionOutcome> {
	let ready = wait_displayed(session, element).await?;
	if !ready.is_success() {
		return Ok(ready);
	}

	if let Err(err) = element.click().await {
		return outcome_from(err);
	}
	match element.enabled().await {
		Ok(true) => {}
		Ok(false) => {
			warn!(
				target: "appdrive.action",
				id = %element.element_id(),
				"target is not editable"
			);
			return Ok(ActionOutcome::NotFound);
		}
		Err(err) => return outcome_from(err),
	}
	if let Err(err) = element.clear().await {
		return outcome_from(err);
	}
	match element.send_keys(text).await {
		Ok(()) => Ok(ActionOutcome::Success),
		Err(err) => outcome_from(err),
	}
}

/// Dispatches a synthesized pointer gesture at denormalized coordinates.
pub async fn gesture(session: &Session, gesture: Gesture) -> Result<ActionOutcome> {
	let rect = session.window_rect().await?;
	let scale = |fx: f64, fy: f64| {
		(
			(fx * f64::from(rect.width)).round() as i64,
			(fy * f64::from(rect.height)).round() as i64,
		)
	};
	let request = match gesture {
		Gesture::TapAt { x, y } => {
			let (px, py) = scale(x, y);
			ActionsRequest::tap(px, py)
		}
		Gesture::Swipe {
			from,
			to,
			duration_ms,
		} => ActionsRequest::swipe(scale(from.0, from.1), scale(to.0, to.1), duration_ms),
	};
	session.perform_actions(&request).await?;
	Ok(ActionOutcome::Success)
}

/// Bounded wait for the element to be displayed. The single visibility
/// rule every action goes through.
async fn wait_displayed(session: &Session, element: &ElementHandle<'_>) -> Result<ActionOutcome> {
	let timeouts = session.config().timeouts;
	let deadline = Instant::now() + timeouts.visibility_wait;
	loop {
		match element.displayed().await {
			Ok(true) => return Ok(ActionOutcome::Success),
			Ok(false) => {}
			Err(err) => return outcome_from(err),
		}
		if Instant::now() >= deadline {
			debug!(
				target: "appdrive.action",
				id = %element.element_id(),
				"visibility wait elapsed"
			);
			return Ok(ActionOutcome::Timeout);
		}
		sleep(timeouts.poll).await;
	}
}

/// Splits failures into caller-handled outcomes vs propagated errors.
fn outcome_from(err: Error) -> Result<ActionOutcome> {
	if err.is_stale() {
		Ok(ActionOutcome::StaleHandle)
	} else if err.is_no_such_element() {
		Ok(ActionOutcome::NotFound)
	} else {
		Err(err)
	}
}
