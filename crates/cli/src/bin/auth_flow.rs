use appdrive_cli::env::FlowEnv;
use appdrive_cli::{flows, logging, report};

#[tokio::main]
async fn main() {
	logging::init_logging();

	let flow_env = match FlowEnv::from_env() {
		Ok(flow_env) => flow_env,
		Err(err) => {
			eprintln!("configuration error: {err:#}");
			std::process::exit(1);
		}
	};

	let verdict = flows::auth::run(&flow_env).await;
	report::print_verdict("authentication flow", &verdict);
	std::process::exit(verdict.exit_code());
}
