//! Configuration registry module
//!
//! This module holds the in-memory key/value registry: insertion,
//! lookup, bulk loading from associative structures, and reset.

pub mod registry;

pub use registry::*;
