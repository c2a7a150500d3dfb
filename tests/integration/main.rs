//! Cross-layer integration tests for Crossroads
//!
//! Tests that verify correct interaction between multiple crates.

mod sessions;
