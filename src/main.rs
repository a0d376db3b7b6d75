use bulkfind::{
    Cli,
    handlers::{handle_search, handle_usage_error},
};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    // Heartbeat lines stay on in quiet runs.
    let default_filter = if verbose {
        "bulkfind=debug"
    } else {
        "bulkfind=warn,bulkfind::reporter::progress=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_usage_error(e).into(),
    };

    init_tracing(cli.verbose);

    handle_search(&cli).into()
}
