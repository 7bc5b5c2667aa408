//! prodsearch core — UI-independent pieces of the product search front end.
//!
//! Nothing here touches the network or a renderer; the HTTP client and the
//! app drive these types.
//!
//! # Modules
//!
//! - [`product`] — Product records and result-card summaries
//! - [`filters`] — Filter state and the collector that reads raw control values
//! - [`query`] — Query builder producing ordered GET parameters
//! - [`errors`] — Field-keyed error maps and the error board presenter state
//! - [`detail`] — Product overlay and image selection
//! - [`session`] — Search cycle state machine with superseded-response guard
//! - [`config`] — `prodsearch.toml` loading

pub mod config;
pub mod detail;
pub mod errors;
pub mod filters;
pub mod product;
pub mod query;
pub mod session;

pub use config::ClientConfig;
pub use errors::{ErrorBoard, ErrorMap, FilterControl};
pub use filters::{FilterControls, FilterOptions, FilterState, StockStatus};
pub use product::Product;
pub use query::{build_params, SearchParams};
pub use session::{SearchOutcome, SearchSession};
