//! Gardenmate Library
//!
//! This crate exposes the caching, lookup, resolver, and request-handler
//! modules for use by the CLI binary and integration tests.

pub mod analysis;
pub mod api;
pub mod cache;
pub mod cli;
pub mod data;
pub mod lookup;
