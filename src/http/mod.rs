//! HTTP protocol layer module
//!
//! Response builders shared by the route table, kept free of route knowledge.

pub mod response;

pub use response::{build_404_response, build_json_response};
