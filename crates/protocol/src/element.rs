//! Element references and find-element requests.

use serde::{Deserialize, Serialize};

/// W3C element identifier key under which servers return element ids.
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Locator strategy names the server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Using {
	/// Accessibility identifier; survives layout changes.
	#[serde(rename = "accessibility id")]
	AccessibilityId,
	/// Native widget class, returns matches in document order.
	#[serde(rename = "class name")]
	ClassName,
	/// XPath over the UI tree; used for content-desc substring queries.
	#[serde(rename = "xpath")]
	XPath,
}

/// Body of `POST /session/{id}/element` and `/elements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindRequest {
	pub using: Using,
	pub value: String,
}

impl FindRequest {
	/// Looks up a single accessibility identifier.
	pub fn accessibility_id(id: &str) -> Self {
		Self {
			using: Using::AccessibilityId,
			value: id.to_string(),
		}
	}

	/// Looks up every element of a native widget class.
	pub fn class_name(class: &str) -> Self {
		Self {
			using: Using::ClassName,
			value: class.to_string(),
		}
	}

	/// Looks up elements whose accessibility description contains `needle`.
	///
	/// Content descriptions are how the app under test exposes list-item
	/// identifiers like `product_1` or `cart_item_3`.
	pub fn desc_contains(needle: &str) -> Self {
		Self {
			using: Using::XPath,
			value: format!("//*[contains(@content-desc, \"{needle}\")]"),
		}
	}
}

/// Wire form of one found element.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementRef {
	#[serde(rename = "element-6066-11e4-a52e-4f735466cecf")]
	pub element_id: String,
}

/// Body of `POST /session/{id}/element/{eid}/value`.
#[derive(Debug, Clone, Serialize)]
pub struct ValueRequest {
	pub text: String,
}

impl ValueRequest {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}
}
