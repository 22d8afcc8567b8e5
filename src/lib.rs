//! Aula student portal frontend.
//!
//! Client-side rendered Leptos application backed by a GoTrue/PostgREST
//! compatible provider (Supabase in the reference deployment). Signup and
//! login validate locally before credentials leave the browser, and the
//! dashboard re-checks email verification with the provider on every visit.
//!
//! UI modules compile only for `wasm32`; the validator, session gate, wire
//! types, and configuration build everywhere so the test suite runs on the
//! host without a wasm toolchain.

#[cfg(target_arch = "wasm32")]
pub mod app;
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
pub mod components;
pub mod features;
#[cfg(target_arch = "wasm32")]
pub mod routes;
