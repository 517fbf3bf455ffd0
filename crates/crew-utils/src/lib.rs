//! Shared utilities for stock-crew
//!
//! This crate provides common functionality used across the stock-crew workspace,
//! currently the tracing subscriber setup shared by the binaries.

pub mod logging;

pub use logging::{LogFormat, init_tracing_with};
