//! Screen-state classification from observable UI signals.
//!
//! The detector is the single source of truth for "what screen are we on";
//! flows never re-implement signal inspection inline. Classification is
//! recomputed from the live UI every time it is needed and never cached
//! across actions that mutate the screen.

use appdrive_protocol::FindRequest;
use appdrive_runtime::Result;
use tokio::time::sleep;
use tracing::{debug, trace};

use crate::session::Session;

/// What the application is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
	LoginScreen,
	HomeScreen,
	ProductDetail,
	CartScreen,
	/// No recognizable signal. A valid, non-fatal result; flows decide what
	/// to do with it.
	Unknown,
}

impl std::fmt::Display for ScreenState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			ScreenState::LoginScreen => "login screen",
			ScreenState::HomeScreen => "home screen",
			ScreenState::ProductDetail => "product detail",
			ScreenState::CartScreen => "cart screen",
			ScreenState::Unknown => "unknown",
		};
		f.write_str(name)
	}
}

/// Accessibility markers the shop app exposes per screen.
pub mod markers {
	pub const SEARCH_FIELD: &str = "search_field";
	pub const CART_ICON: &str = "cart_icon";
	pub const ADD_TO_CART_BUTTON: &str = "add_to_cart_button";
	pub const PRODUCT_PRICE: &str = "product_price";
	pub const CHECKOUT_BUTTON: &str = "checkout_button";
	/// Cart rows carry identifiers like `cart_item_1`, `cart_item_2`, …
	pub const CART_ITEM_PREFIX: &str = "cart_item_";
}

const EDIT_TEXT_CLASS: &str = "android.widget.EditText";

/// Classifies the current screen from live signals, in fixed priority
/// order: input-field census first, then semantic markers.
///
/// Tolerates partial UI readiness: when the first inspection finds no
/// signal it waits one bounded quiescence interval and retries once before
/// settling on [`ScreenState::Unknown`]. An undetermined state is never an
/// error.
///
/// # Errors
///
/// Only transport and session failures.
pub async fn classify(session: &Session) -> Result<ScreenState> {
	if let Some(state) = inspect(session).await? {
		return Ok(state);
	}
	let quiescence = session.config().timeouts.quiescence;
	debug!(target: "appdrive.detect", ?quiescence, "no signal; waiting for screen to settle");
	sleep(quiescence).await;
	let state = inspect(session).await?.unwrap_or(ScreenState::Unknown);
	Ok(state)
}

async fn inspect(session: &Session) -> Result<Option<ScreenState>> {
	// (1) Input-field census: two or more editable text fields means a
	// credential form is up.
	let fields = session
		.find_elements(&FindRequest::class_name(EDIT_TEXT_CLASS))
		.await?;
	if fields.len() >= 2 {
		trace!(target: "appdrive.detect", fields = fields.len(), "classified as login screen");
		return Ok(Some(ScreenState::LoginScreen));
	}

	// (2) Semantic markers unique to a screen.
	if session.has_marker(markers::SEARCH_FIELD).await?
		&& session.has_marker(markers::CART_ICON).await?
	{
		return Ok(Some(ScreenState::HomeScreen));
	}
	if session.has_marker(markers::ADD_TO_CART_BUTTON).await?
		|| session.has_marker(markers::PRODUCT_PRICE).await?
	{
		return Ok(Some(ScreenState::ProductDetail));
	}
	if session.has_marker(markers::CHECKOUT_BUTTON).await?
		|| session.count_marker(markers::CART_ITEM_PREFIX).await? > 0
	{
		return Ok(Some(ScreenState::CartScreen));
	}

	Ok(None)
}
