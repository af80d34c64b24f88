//! Core types used throughout the estimation system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one estimation room.
///
/// Rooms partition sessions so several teams can estimate concurrently
/// without interference. A key of `None` addresses the shared default room
/// used by callers that never mention a room at all. Rooms come into being
/// on first reference and are never deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomKey(Option<String>);

impl RoomKey {
    /// The shared default room.
    pub fn shared() -> Self {
        Self(None)
    }

    /// A named room.
    pub fn named(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    /// Build a key from an optional request parameter.
    pub fn from_param(param: Option<String>) -> Self {
        Self(param)
    }

    /// Whether this is the shared default room.
    pub fn is_shared(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(key) => f.write_str(key),
            None => f.write_str("(default)"),
        }
    }
}

/// One user's optimistic/realistic/pessimistic guess for a work item.
///
/// The values are dimensionless; callers assign meaning such as hours or
/// story points. A recorded triple is never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreePointEstimate {
    pub optimistic: i64,
    pub realistic: i64,
    pub pessimistic: i64,
}

impl ThreePointEstimate {
    pub fn new(optimistic: i64, realistic: i64, pessimistic: i64) -> Self {
        Self {
            optimistic,
            realistic,
            pessimistic,
        }
    }

    /// Whether the triple satisfies `0 <= optimistic <= realistic <= pessimistic`.
    ///
    /// The board refuses anything else as an absurd estimation.
    pub fn is_ordered(&self) -> bool {
        self.optimistic >= 0
            && self.optimistic <= self.realistic
            && self.realistic <= self.pessimistic
    }
}
