//! Test fixtures and data for estimation board tests
//!
//! This module provides consistent test data used across all test suites.

use shared::{RoomKey, ThreePointEstimate};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Standard item names
    pub const ITEM: &'static str = "checkout-flow";
    pub const OTHER_ITEM: &'static str = "search-index";
    pub const DESCRIPTION: &'static str = "Rework the checkout flow";

    /// Standard users
    pub const ALICE: &'static str = "alice";
    pub const BOB: &'static str = "bob";
    pub const CAROL: &'static str = "carol";

    /// Two independent rooms for isolation tests
    pub fn backend_room() -> RoomKey {
        RoomKey::named("backend")
    }

    pub fn frontend_room() -> RoomKey {
        RoomKey::named("frontend")
    }

    /// Shorthand for an estimate triple
    pub fn triple(optimistic: i64, realistic: i64, pessimistic: i64) -> ThreePointEstimate {
        ThreePointEstimate::new(optimistic, realistic, pessimistic)
    }

    /// Triples that violate the ordering invariant
    pub fn absurd_triples() -> Vec<ThreePointEstimate> {
        vec![
            Self::triple(4, 1, 8),  // realistic below optimistic
            Self::triple(1, 8, 4),  // pessimistic below realistic
            Self::triple(-1, 1, 2), // negative optimistic
        ]
    }
}
