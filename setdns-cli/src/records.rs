//! CSV record import.
//!
//! The input file is a header-delimited CSV. `Domain`, `zone`, `type` and
//! `ttl` are required columns; `ipAddress`, `ptr` and `cname` may be absent
//! (as columns or as values). Rows missing a required field fail at parse
//! time, and the whole import fails with them: a file that cannot be read
//! cleanly is reported once and no records from it are submitted.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use setdns_client::AddRecordRequest;

/// Import failure for the whole CSV file.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file could not be opened, read, or parsed into rows.
    #[error("{0}")]
    Csv(#[from] csv::Error),
}

/// One row of the record file, as parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordRow {
    /// Fully qualified record name.
    #[serde(rename = "Domain")]
    pub domain: String,
    /// Zone the record belongs to. Not checked against the zones being
    /// created; the server rejects records for unknown zones.
    pub zone: String,
    /// Record type string (`A`, `CNAME`, or anything the server accepts).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Cache time-to-live in seconds.
    pub ttl: u32,
    /// Address, for `A` rows.
    #[serde(rename = "ipAddress", default)]
    pub ip_address: Option<String>,
    /// Reverse-pointer flag, for `A` rows. Only the literal string `true`
    /// (case-insensitive) enables it.
    #[serde(default)]
    pub ptr: Option<String>,
    /// Target, for `CNAME` rows.
    #[serde(default)]
    pub cname: Option<String>,
}

impl RecordRow {
    /// Whether the row asks for a PTR record alongside an `A` record.
    fn ptr_requested(&self) -> bool {
        self.ptr
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    /// Converts the row into the outbound API request.
    pub fn into_request(self) -> AddRecordRequest {
        let ptr = self.ptr_requested();
        AddRecordRequest {
            domain: self.domain,
            zone: self.zone,
            record_type: self.record_type,
            ttl: self.ttl,
            ip_address: self.ip_address,
            ptr,
            cname: self.cname,
        }
    }
}

/// Reads all rows from the CSV at `path`, preserving file order.
///
/// The file is read to completion before any submission starts; the first
/// unreadable row aborts the import.
pub fn load_records(path: &Path) -> Result<Vec<RecordRow>, ImportError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
