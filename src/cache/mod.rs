//! Cache module for lookup responses
//!
//! This module provides an in-memory key-value cache with per-entry TTL
//! (time-to-live) values. Expired entries are evicted lazily on read; there is
//! no background sweeper, no size bound, and no persistence across restarts.

mod store;

pub use store::TtlCache;
