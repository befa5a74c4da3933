//! Resilient interaction engine for mobile end-to-end flows.
//!
//! The crate drives an application under test through a remote automation
//! server: [`Session`] owns the connection, [`classify`] decides what screen
//! the app is currently showing, [`resolve`] walks a [`LocatorSpec`]
//! fallback chain, and the [`action`] module performs interactions with
//! wait/retry discipline. [`scenario`] ties these together for the flow
//! binaries in `appdrive-cli`.

pub mod action;
pub mod config;
pub mod detect;
pub mod element;
pub mod locator;
pub mod scenario;
pub mod session;

#[cfg(test)]
pub(crate) mod testutil;

pub use action::{ActionOutcome, Gesture};
pub use appdrive_runtime::{Endpoint, Error, Result};
pub use config::{ResetPolicy, SessionConfig, Timeouts};
pub use detect::{ScreenState, classify, markers};
pub use element::ElementHandle;
pub use locator::{LocatorSpec, ResolvedTarget, Strategy, resolve, resolve_element};
pub use scenario::{ScopedSession, Verdict, tap_target, type_into};
pub use session::Session;
