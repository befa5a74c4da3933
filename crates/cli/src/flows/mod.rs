//! Scenario flows with terminal pass/fail verdicts.

pub mod auth;
pub mod cart;
pub mod signup;

mod steps;
