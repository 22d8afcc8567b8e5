//! Shared frontend utilities for API access, configuration, errors, and
//! build metadata. Centralizing these helpers keeps network behavior
//! consistent and avoids duplicated logic in routes and features. They do
//! not hold secrets themselves, but callers must still avoid logging
//! credentials or token material.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;

#[cfg(target_arch = "wasm32")]
pub use api::{
    get_json_with_headers, get_optional_json_with_headers, post_empty_with_headers,
    post_json_with_headers_response,
};
pub use errors::AppError;
