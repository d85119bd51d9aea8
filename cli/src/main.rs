//! ckint CLI - evaluate one checked integer operation.
//!
//! ```text
//! ckint [--hex] <width> <lhs> <op> <rhs>
//! ```
//!
//! Prints the result, or `[error]` when the operation overflowed, divided by
//! zero, or shifted by an out-of-range amount.
//!
//! Exit status: 0 for a valid result, 1 for an invalid one, 2 for usage errors.

mod eval;

use std::io;
use std::process::ExitCode;

use ckint_config::CkintConfig;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use eval::Request;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn install_reporter() {
    let config = CkintConfig::load().unwrap_or_default();
    match config.install_reporter() {
        Ok(mode) => tracing::debug!(mode = mode.as_str(), "Reporter installed"),
        Err(err) => tracing::warn!("Using strict enforcement: {err}"),
    }
}

fn main() -> ExitCode {
    init_tracing();

    // Usage errors exit 2, --help exits 0.
    let request = Request::parse();

    install_reporter();

    match eval::evaluate(&request) {
        Ok(evaluation) => {
            println!("{}", evaluation.rendered);
            if evaluation.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => eval::operand_error(&err).exit(),
    }
}
