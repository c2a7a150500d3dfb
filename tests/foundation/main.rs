//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: RoomId, ItemId, Direction, and Error.

mod ids;
