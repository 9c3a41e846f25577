//! wirehook-check
//!
//! Usage: `wirehook-check <config.yaml> <url>...`
//! - Loads the config and registers the host policy as the process enforcer
//! - Evaluates each URL as a GET and prints one JSON line per URL
//! - Exit code 1 if any URL is rejected, 2 on usage/config errors

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use wirehook_core::EnforcerSlot;
use wirehook_net::{check, config, install_enforcer};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: wirehook-check <config.yaml> <url>...");
        return ExitCode::from(2);
    };

    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "config load failed");
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    // Registration happens before any check runs.
    let slot = EnforcerSlot::global();
    if let Err(e) = install_enforcer(&cfg, slot) {
        tracing::error!(error = %e, "enforcer setup failed");
        eprintln!("{e}");
        return ExitCode::from(2);
    }

    let report = check::check_urls(slot, args);
    for line in &report.lines {
        println!("{line}");
    }

    tracing::info!(rejected = report.rejected, "check finished");
    if report.all_allowed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
