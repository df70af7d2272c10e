//! proxycrawl-leads: Rust client for the ProxyCrawl Leads API
//!
//! A thin wrapper around the Leads API endpoint: one GET per call with
//! `token` and `domain` query parameters, returning the raw status code and
//! body. The body is an opaque JSON string; this crate performs no decoding,
//! no retries, and no rate limiting.
//!
//! ```no_run
//! use proxycrawl_leads::LeadsClient;
//!
//! # async fn run() -> Result<(), proxycrawl_leads::LeadsError> {
//! let client = LeadsClient::new("MY_TOKEN")?;
//! let response = client.get("example.com").await?;
//! println!("{} {}", response.status, response.body);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

// Re-export main types for convenience
pub use client::{LeadsClient, LeadsResponse};
pub use error::LeadsError;
