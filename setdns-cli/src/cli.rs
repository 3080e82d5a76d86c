//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Create DNS zones and import records on a Technitium DNS server.
#[derive(Parser, Debug)]
#[command(name = "setdns")]
#[command(
    about = "Create zones and add records on a Technitium DNS server",
    long_about = "Create zones and add records on a Technitium DNS server.\n\n\
        Zones are created first, in the order given, then records are read \
        from the CSV file and added one by one. Failures of individual zones \
        or records are logged and do not stop the run."
)]
pub struct Args {
    /// Base URL of the Technitium DNS server, e.g. http://127.0.0.1:5380
    #[arg(long)]
    pub server: String,

    /// API token for the Technitium DNS server (generated manually).
    #[arg(long)]
    pub token: String,

    /// Zone names to create as Primary zones, in order.
    #[arg(required = true)]
    pub zones: Vec<String>,

    /// CSV file with the DNS records to add.
    #[arg(long, default_value = "dns_records.csv")]
    pub csv: PathBuf,
}
