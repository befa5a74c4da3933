//! Console verdict reporting.

use appdrive::Verdict;
use colored::Colorize;

/// Prints the single pass/fail line for a scenario. There is no partial
/// per-step reporting; diagnostics live in the tracing output.
pub fn print_verdict(scenario: &str, verdict: &Verdict) {
	match verdict {
		Verdict::Passed => println!("{} {}", "PASS".green().bold(), scenario),
		Verdict::Failed { reason } => {
			println!("{} {}: {}", "FAIL".red().bold(), scenario, reason);
		}
	}
}
