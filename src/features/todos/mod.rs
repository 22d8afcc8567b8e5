//! Shared task list read from the provider's data API; backs the home page.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod types;
