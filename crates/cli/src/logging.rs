use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Scenario binaries take no flags; the filter comes from `APPDRIVE_LOG`,
/// falling back to warnings only so the verdict line stays clean.
pub fn init_logging() {
	let env_filter =
		EnvFilter::try_from_env("APPDRIVE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

	let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(stderr)
		.with_target(true)
		.with_level(true)
		.compact()
		.init();
}
