//! Internal state types for the estimation board
//!
//! These never cross the boundary; front ends only ever see the projection
//! types from the `shared` crate.

use chrono::{DateTime, Utc};
use shared::{ThreePointEstimate, UserEstimate};

/// Lifecycle state of a work item.
///
/// Cancellation removes an item outright instead of marking it, so it needs
/// no third state here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    InProgress,
    Completed,
}

/// One unit of work awaiting estimation.
#[derive(Debug, Clone)]
pub struct WorkItem {
    /// Unique among live items within its room.
    pub name: String,
    /// Set at creation, immutable afterwards.
    pub description: String,
    pub status: ItemStatus,
    /// Submission-ordered; at most one entry per user.
    pub estimates: Vec<UserEstimate>,
    pub created_at: DateTime<Utc>,
}

impl WorkItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            status: ItemStatus::InProgress,
            estimates: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ItemStatus::Completed
    }

    pub fn has_estimates(&self) -> bool {
        !self.estimates.is_empty()
    }

    /// The triple this user already recorded, if any.
    pub fn estimate_by(&self, user: &str) -> Option<&ThreePointEstimate> {
        self.estimates
            .iter()
            .find(|entry| entry.user == user)
            .map(|entry| &entry.estimate)
    }
}
