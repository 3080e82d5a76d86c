//! # setdns-client
//!
//! A small typed client for the [Technitium DNS Server] HTTP management API.
//!
//! The API authenticates with a session token passed as a request parameter
//! and answers every call with an HTTP status code; `200` means the operation
//! was accepted. This crate covers the two calls needed to provision a server
//! from scratch:
//!
//! - `POST /api/zones/create` — register an authoritative (Primary) zone
//! - `POST /api/zones/records/add` — add a record to an existing zone
//!
//! [Technitium DNS Server]: https://technitium.com/dns/
//!
//! ## Usage
//!
//! ```rust,no_run
//! use setdns_client::{AddRecordRequest, TechnitiumClient};
//!
//! # async fn example() -> setdns_client::Result<()> {
//! let client = TechnitiumClient::new("http://127.0.0.1:5380", "api-token");
//! client.create_zone("example.com").await?;
//!
//! let request = AddRecordRequest {
//!     domain: "www.example.com".to_string(),
//!     zone: "example.com".to_string(),
//!     record_type: "A".to_string(),
//!     ttl: 3600,
//!     ip_address: Some("10.0.0.5".to_string()),
//!     ptr: true,
//!     cname: None,
//! };
//! client.add_record(&request).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All calls return [`Result<T, ApiError>`](ApiError). A non-200 response
//! surfaces as [`ApiError::Status`] carrying the status code and response
//! body; transport failures surface as [`ApiError::Network`] or
//! [`ApiError::Timeout`]. The client never retries.

mod client;
mod error;
mod types;

pub use client::TechnitiumClient;
pub use error::{ApiError, Result};
pub use types::AddRecordRequest;
