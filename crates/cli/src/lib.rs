//! Scenario binaries driving the shop app end-to-end.
//!
//! Each flow is an independently invocable program with no flags;
//! configuration comes from the environment (see [`env::FlowEnv`]) and the
//! outcome is a single pass/fail line plus an exit code.

pub mod env;
pub mod flows;
pub mod logging;
pub mod report;
pub mod targets;
