//! CLI entry point for dt
//!
//! stderr carries at most the root-open failure, so the log filter is fixed
//! at `warn` and does not read `RUST_LOG`.

use std::io::{self, BufWriter, Write};
use std::process;

use dt::{Invocation, OutputConfig, TreeError, TreeFormatter, TreeWalker, USAGE, WalkerConfig};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILTER: &str = "warn";

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::new(LOG_FILTER))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let root = match Invocation::from_args(std::env::args_os().skip(1)) {
        Invocation::Help => {
            print!("{}", USAGE);
            let _ = io::stdout().flush();
            return;
        }
        Invocation::Tree(root) => root,
    };

    let stdout = io::stdout();
    let mut formatter = TreeFormatter::new(BufWriter::new(stdout.lock()), OutputConfig::default());

    match TreeWalker::new(WalkerConfig::default()).walk(&root, &mut formatter) {
        Ok(summary) => {
            debug!(
                directories = summary.directories,
                files = summary.files,
                suppressed = summary.suppressed.len(),
                "walk complete"
            );
        }
        Err(e @ TreeError::OpenRoot { .. }) => {
            eprintln!("{}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("dt: {}", e);
            process::exit(1);
        }
    }
}
