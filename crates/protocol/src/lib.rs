//! Wire types for the Appium flavour of the W3C WebDriver protocol.
//!
//! These types mirror the request and response bodies the automation server
//! accepts; they carry no I/O. The transport that sends them lives in
//! `appdrive-runtime`.
//!
//! # Main Types
//!
//! - [`Capabilities`] - Capability descriptor for session creation
//! - [`FindRequest`] - Locator strategy + value pair for element lookup
//! - [`ActionsRequest`] - Synthesized pointer gesture sequences
//! - [`Envelope`] / [`WireError`] - The `{"value": …}` response contract

mod actions;
mod capabilities;
mod element;
mod response;

pub use actions::{ActionsRequest, MIN_PRESS_MS, PointerItem, PointerSource};
pub use capabilities::{
	AppIdRequest, AutomationEngine, Capabilities, CapabilityMatch, NewSessionRequest,
	NewSessionValue,
};
pub use element::{ELEMENT_KEY, ElementRef, FindRequest, Using, ValueRequest};
pub use response::{Envelope, WindowRect, WireError, error_code};
