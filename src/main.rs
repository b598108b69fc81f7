use std::process;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use buildr::{run, Error, Options, OsDirOps, OsRunner, Project};

fn main() {
    let opts = Options::parse();
    init_tracing(opts.verbose);

    if let Err(err) = ctrlc::set_handler(on_interrupt) {
        warn!("could not install interrupt handler: {err}");
    }

    if let Err(err) = try_run(&opts) {
        eprintln!("error: {err}");
        process::exit(err.exit_code());
    }
}

fn try_run(opts: &Options) -> Result<(), Error> {
    let project = Project::from_cwd()?;
    run(opts, &project, &mut OsDirOps, &mut OsRunner)
}

/// Step echo at info level, per-entry detail at debug with `-v`;
/// `RUST_LOG` overrides both when set.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();
}

/// Ctrl-C prints a short notice and exits clean; an interrupt is not a
/// failure.
fn on_interrupt() {
    eprintln!();
    eprintln!("interrupted");
    process::exit(0);
}
