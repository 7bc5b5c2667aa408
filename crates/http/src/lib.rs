//! HTTP layer for prodsearch: the search client and the filter-lists client.
//!
//! - [`client`] — [`SearchClient`] issuing search and lists requests
//! - [`error`] — [`ClientError`] for transport and decode failures

pub mod client;
pub mod error;

pub use client::SearchClient;
pub use error::ClientError;
