//! Tabsearch Client - HTTP transport for tabsearch.
//!
//! - `Transport`: The seam the DataFrame talks through; one GET and one POST
//!   against a fixed endpoint, answering parsed JSON
//! - `RestClient`: `Transport` over the engine's REST API
//!
//! # Example
//!
//! ```no_run
//! use tabsearch_client::{RestClient, Transport};
//! use serde_json::json;
//!
//! let client = RestClient::new("http://localhost:9200", "people/_search")
//!     .basic_auth("elastic", "changeme");
//! let response = client.post(&json!({"query": {"match_all": {}}}), None).unwrap();
//! println!("{}", response["hits"]["hits"]);
//! ```

mod rest;
mod transport;

pub use rest::RestClient;
pub use transport::{Params, Transport};
