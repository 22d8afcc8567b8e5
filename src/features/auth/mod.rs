//! Auth feature: field validation, the account session gate, and the
//! identity provider capability. Forms validate locally before credentials
//! are forwarded to the provider, and the dashboard re-checks verification
//! through the gate before rendering protected content. Nothing in this
//! module logs credentials or token material.
//!
//! Flow Overview: Signup posts email, password, and profile metadata and
//! prompts the caller to verify their email. Login exchanges credentials
//! for a session held in memory. The gate fetches the caller's user record
//! once per dashboard visit and admits, withholds, or redirects.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod gate;
pub mod provider;
#[cfg(target_arch = "wasm32")]
pub mod state;
pub mod types;
pub mod validate;
