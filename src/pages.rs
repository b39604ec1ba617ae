//! Top-level pages, one module per route.

pub mod dashboard;
pub mod login;
