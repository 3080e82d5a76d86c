//! # setdns-cli
//!
//! Command-line provisioning for a Technitium DNS server: create the zones
//! named on the command line, then read a CSV of records and add each one
//! through the management API.
//!
//! The run is best-effort by design: individual zone or record failures are
//! logged (to stdout and to the append-only `dns_management.log`) and the
//! loop moves on. Only a CSV that cannot be read at all aborts the record
//! phase, and nothing past argument parsing changes the exit code — the log
//! is the authoritative account of what actually happened on the server.

pub mod cli;
pub mod logging;
pub mod provision;
pub mod records;
