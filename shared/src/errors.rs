//! Rejection taxonomy for the estimation board
//!
//! Every mutating operation either succeeds with no payload or is refused
//! with exactly one of these reasons. The set is closed; nothing inside the
//! board panics or unwinds past this boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the board refused an operation.
///
/// Serializes as the symbolic snake_case code (`"empty_name"`, ...) so the
/// consuming layer can pass it through a query string or JSON body unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("item name must not be blank")]
    EmptyName,

    #[error("user must not be blank")]
    EmptyUser,

    #[error("an item with this name is already on the board")]
    AddedPreviously,

    #[error("no item with this name exists in the room")]
    NonexistentName,

    #[error("the item was completed previously")]
    CompletedPreviously,

    #[error("the item already has estimates and can no longer be cancelled")]
    AlreadyEstimated,

    #[error("this user already estimated the item")]
    UserEstimatedPreviously,

    #[error("estimate must satisfy 0 <= optimistic <= realistic <= pessimistic")]
    AbsurdEstimation,

    #[error("the item cannot be completed without at least one estimate")]
    Unestimated,
}

impl RejectReason {
    /// Stable symbolic code, identical to the serde representation.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::EmptyUser => "empty_user",
            Self::AddedPreviously => "added_previously",
            Self::NonexistentName => "nonexistent_name",
            Self::CompletedPreviously => "completed_previously",
            Self::AlreadyEstimated => "already_estimated",
            Self::UserEstimatedPreviously => "user_estimated_previously",
            Self::AbsurdEstimation => "absurd_estimation",
            Self::Unestimated => "unestimated",
        }
    }
}

/// Outcome of a board operation: applied, or refused with one reason.
pub type EstimationResult<T = ()> = Result<T, RejectReason>;
