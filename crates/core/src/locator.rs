//! Ordered fallback strategies for finding one logical UI target.
//!
//! A [`LocatorSpec`] names a target and lists the ways to find it, most
//! reliable first. [`resolve`] walks that list in a single loop: each
//! strategy polls under its own bounded wait, the first match wins, and a
//! strategy that misses is absorbed rather than propagated. Only when the
//! whole chain exhausts its budget does the caller see
//! [`Error::ElementNotFound`](appdrive_runtime::Error::ElementNotFound).

use appdrive_protocol::FindRequest;
use appdrive_runtime::{Error, Result};
use tokio::time::{Instant, sleep};
use tracing::{debug, trace};

use crate::element::ElementHandle;
use crate::session::Session;

/// One way of finding a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
	/// Accessibility identifier. Highest confidence; least likely to break
	/// across UI tweaks.
	SemanticId(&'static str),
	/// The `index`-th element of a native widget class, in document order.
	/// Negative indices count from the end (`-1` = last match). Explicitly
	/// position-based; callers accept the ordering assumption.
	StructuralQuery { class: &'static str, index: isize },
	/// Normalized tap point as fractions of screen width/height. Always
	/// resolves; correctness must be validated by a subsequent state check.
	CoordinateRegion { x: f64, y: f64 },
}

/// Ordered strategies for one logical UI target. Immutable; defined once
/// per target next to the flow that uses it.
#[derive(Debug, Clone, Copy)]
pub struct LocatorSpec {
	name: &'static str,
	strategies: &'static [Strategy],
}

impl LocatorSpec {
	pub const fn new(name: &'static str, strategies: &'static [Strategy]) -> Self {
		Self { name, strategies }
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn strategies(&self) -> &'static [Strategy] {
		self.strategies
	}
}

/// What a strategy resolved to: an element, or a raw screen point from a
/// coordinate region.
#[derive(Debug)]
pub enum ResolvedTarget<'s> {
	Element(ElementHandle<'s>),
	Point { x: i64, y: i64 },
}

/// Resolves a target by trying each strategy strictly in declared order.
///
/// The first strategy to produce a match wins; later strategies are never
/// consulted once an earlier one has matched.
///
/// # Errors
///
/// [`Error::ElementNotFound`](appdrive_runtime::Error::ElementNotFound)
/// when every strategy exhausts its wait budget. Transport and session
/// failures propagate as-is.
pub async fn resolve<'s>(session: &'s Session, spec: &LocatorSpec) -> Result<ResolvedTarget<'s>> {
	for strategy in spec.strategies().iter().copied() {
		if let Some(target) = try_strategy(session, spec.name(), strategy).await? {
			return Ok(target);
		}
	}
	Err(Error::ElementNotFound {
		target: spec.name().to_string(),
	})
}

/// Like [`resolve`], but requires an element-producing strategy to match.
///
/// Used for targets that must be typed into; a raw point cannot receive
/// text, so a chain that only matched a coordinate region counts as
/// exhausted.
pub async fn resolve_element<'s>(
	session: &'s Session,
	spec: &LocatorSpec,
) -> Result<ElementHandle<'s>> {
	match resolve(session, spec).await? {
		ResolvedTarget::Element(element) => Ok(element),
		ResolvedTarget::Point { .. } => Err(Error::ElementNotFound {
			target: spec.name().to_string(),
		}),
	}
}

async fn try_strategy<'s>(
	session: &'s Session,
	target: &str,
	strategy: Strategy,
) -> Result<Option<ResolvedTarget<'s>>> {
	match strategy {
		Strategy::SemanticId(id) => {
			let request = FindRequest::accessibility_id(id);
			wait_for_element(session, target, &request).await
		}
		Strategy::StructuralQuery { class, index } => {
			wait_for_indexed(session, target, class, index).await
		}
		Strategy::CoordinateRegion { x, y } => {
			// Never fails structurally: denormalize against the live screen
			// size and hand back a point.
			let rect = session.window_rect().await?;
			let point = ResolvedTarget::Point {
				x: (x * f64::from(rect.width)).round() as i64,
				y: (y * f64::from(rect.height)).round() as i64,
			};
			debug!(target: "appdrive.locator", %target, x, y, "using coordinate region");
			Ok(Some(point))
		}
	}
}

/// Polls a single-element lookup until the per-strategy wait elapses.
async fn wait_for_element<'s>(
	session: &'s Session,
	target: &str,
	request: &FindRequest,
) -> Result<Option<ResolvedTarget<'s>>> {
	let timeouts = session.config().timeouts;
	let deadline = Instant::now() + timeouts.element_wait;
	loop {
		match session.find_element(request).await {
			Ok(element) => {
				trace!(target: "appdrive.locator", %target, id = %element.element_id(), "resolved");
				return Ok(Some(ResolvedTarget::Element(element)));
			}
			Err(err) if err.is_no_such_element() => {}
			Err(err) => return Err(err),
		}
		if Instant::now() >= deadline {
			debug!(target: "appdrive.locator", %target, ?request, "strategy exhausted its wait");
			return Ok(None);
		}
		sleep(timeouts.poll).await;
	}
}

/// Polls a class query until the requested index is available.
async fn wait_for_indexed<'s>(
	session: &'s Session,
	target: &str,
	class: &'static str,
	index: isize,
) -> Result<Option<ResolvedTarget<'s>>> {
	let timeouts = session.config().timeouts;
	let deadline = Instant::now() + timeouts.element_wait;
	loop {
		let matches = session.find_elements(&FindRequest::class_name(class)).await?;
		if let Some(element) = pick(matches, index) {
			trace!(target: "appdrive.locator", %target, class, index, "resolved");
			return Ok(Some(ResolvedTarget::Element(element)));
		}
		if Instant::now() >= deadline {
			debug!(target: "appdrive.locator", %target, class, index, "strategy exhausted its wait");
			return Ok(None);
		}
		sleep(timeouts.poll).await;
	}
}

fn pick(matches: Vec<ElementHandle<'_>>, index: isize) -> Option<ElementHandle<'_>> {
	let len = matches.len() as isize;
	let position = if index < 0 { len + index } else { index };
	if (0..len).contains(&position) {
		matches.into_iter().nth(position as usize)
	} else {
		None
	}
}
