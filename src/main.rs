use playctl::cli::{parse_args, run_cli_command};
use playctl::monitor::{run_monitor, setup_panic_hook};
use playctl::session::Session;
use playctl::startup::{init_logging, ClientConfig};

use color_eyre::Result;
use tracing::debug;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = ClientConfig::from_env();
    init_logging(&config.log_filter);
    debug!(?config, "Starting playctl");

    let session = Session::start(config);

    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(command, &session) {
        return result;
    }

    setup_panic_hook();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_monitor(&session))
}
