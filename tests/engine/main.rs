//! Integration tests for Layer 3: Engine
//!
//! Tests for game state, player actions, room views, and command execution.

mod actions;
