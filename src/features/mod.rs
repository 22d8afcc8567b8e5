//! Feature modules grouping domain logic with their API clients and types.

pub mod auth;
pub mod todos;
