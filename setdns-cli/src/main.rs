//! `setdns` entry point.
//!
//! Exit code policy: argument parsing is the only fatal step (clap exits
//! non-zero on a usage error). Everything after that is best-effort — HTTP
//! and file failures are logged and the process still exits 0, with the
//! log file as the record of what succeeded.

use std::path::Path;

use clap::Parser;
use setdns_client::TechnitiumClient;

use setdns_cli::cli::Args;
use setdns_cli::{logging, provision};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    logging::init(Path::new(logging::LOG_FILE));

    let client = TechnitiumClient::new(&args.server, &args.token);
    provision::run(&client, &args.zones, &args.csv).await;
}
