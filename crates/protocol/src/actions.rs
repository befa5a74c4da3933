//! W3C pointer action sequences for raw gestures.
//!
//! A tap is synthesized as move → down → pause → up at explicit coordinates;
//! the pause must meet [`MIN_PRESS_MS`] for the platform to register a tap
//! rather than discard it as noise. A swipe inserts a duration-bearing move
//! between down and up.

use serde::Serialize;

/// Minimum press duration in milliseconds for a synthesized tap to register.
pub const MIN_PRESS_MS: u64 = 100;

/// One step of a pointer input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PointerItem {
	PointerMove { duration: u64, x: i64, y: i64 },
	PointerDown { button: u8 },
	Pause { duration: u64 },
	PointerUp { button: u8 },
}

/// A single touch input source with its ordered action steps.
#[derive(Debug, Clone, Serialize)]
pub struct PointerSource {
	#[serde(rename = "type")]
	kind: &'static str,
	id: &'static str,
	parameters: PointerParameters,
	actions: Vec<PointerItem>,
}

#[derive(Debug, Clone, Serialize)]
struct PointerParameters {
	#[serde(rename = "pointerType")]
	pointer_type: &'static str,
}

impl PointerSource {
	fn touch(actions: Vec<PointerItem>) -> Self {
		Self {
			kind: "pointer",
			id: "finger1",
			parameters: PointerParameters {
				pointer_type: "touch",
			},
			actions,
		}
	}
}

/// Body of `POST /session/{id}/actions`.
#[derive(Debug, Clone, Serialize)]
pub struct ActionsRequest {
	pub actions: Vec<PointerSource>,
}

impl ActionsRequest {
	/// A tap at absolute screen coordinates.
	pub fn tap(x: i64, y: i64) -> Self {
		Self {
			actions: vec![PointerSource::touch(vec![
				PointerItem::PointerMove { duration: 0, x, y },
				PointerItem::PointerDown { button: 0 },
				PointerItem::Pause {
					duration: MIN_PRESS_MS,
				},
				PointerItem::PointerUp { button: 0 },
			])],
		}
	}

	/// A swipe from one absolute position to another over `duration_ms`.
	pub fn swipe(from: (i64, i64), to: (i64, i64), duration_ms: u64) -> Self {
		Self {
			actions: vec![PointerSource::touch(vec![
				PointerItem::PointerMove {
					duration: 0,
					x: from.0,
					y: from.1,
				},
				PointerItem::PointerDown { button: 0 },
				PointerItem::Pause {
					duration: MIN_PRESS_MS,
				},
				PointerItem::PointerMove {
					duration: duration_ms,
					x: to.0,
					y: to.1,
				},
				PointerItem::PointerUp { button: 0 },
			])],
		}
	}
}
