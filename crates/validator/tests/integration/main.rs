//! Integration tests for fieldcheck.
//!
//! Records here are built with `#[derive(Record)]` and validated through the
//! public API only.

mod config;
mod nesting;
mod rendering;
mod scenarios;
mod usage_errors;
