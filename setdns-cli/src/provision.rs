//! The provisioning run: zones first, then records.
//!
//! Both phases are fully sequential and best-effort. Each attempt produces
//! exactly one log event — `info` on success, `error` on failure — and a
//! failure never stops the remaining attempts. Only a record file that
//! cannot be read skips its whole phase.

use std::path::Path;

use setdns_client::TechnitiumClient;
use tracing::{error, info};

use crate::records::{self, RecordRow};

/// Creates every zone in `zones`, in order, one request each.
pub async fn create_zones(client: &TechnitiumClient, zones: &[String]) {
    for zone in zones {
        match client.create_zone(zone).await {
            Ok(()) => info!("zone '{zone}' created successfully"),
            Err(e) => error!("failed to create zone '{zone}': {e}"),
        }
    }
}

/// Submits every row, in file order, one request each.
pub async fn submit_records(client: &TechnitiumClient, rows: Vec<RecordRow>) {
    for row in rows {
        let request = row.into_request();
        match client.add_record(&request).await {
            Ok(()) => info!(
                "added {} record for {} in zone {}",
                request.record_type, request.domain, request.zone
            ),
            Err(e) => error!(
                "failed to add {} record for {}: {e}",
                request.record_type, request.domain
            ),
        }
    }
    info!("all records processed");
}

/// Runs the full provisioning sequence against `client`.
///
/// The record file is read to completion before any submission starts; if
/// it cannot be read, the record phase is skipped and zones already created
/// remain created.
pub async fn run(client: &TechnitiumClient, zones: &[String], csv_path: &Path) {
    create_zones(client, zones).await;

    match records::load_records(csv_path) {
        Ok(rows) => submit_records(client, rows).await,
        Err(e) => error!("error processing record file {}: {e}", csv_path.display()),
    }
}
