//! Operation requests and their responses
//!
//! `EstimationRequest` is the closed set of operations the board accepts,
//! one variant per store operation. The boundary layer decodes each inbound
//! request into exactly one variant; dispatch behind the boundary is an
//! ordinary match, never reflective.

use serde::{Deserialize, Serialize};

use crate::errors::RejectReason;
use crate::messages::views::{CompletedItem, InProgressItem};
use crate::types::{RoomKey, ThreePointEstimate};

/// Operations on the estimation board.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum EstimationRequest {
    /// Put a new item up for estimation.
    Add {
        room: RoomKey,
        name: String,
        description: String,
    },
    /// Record one user's three-point estimate for an item.
    Estimate {
        room: RoomKey,
        name: String,
        user: String,
        estimate: ThreePointEstimate,
    },
    /// Remove an estimate-free item; its name becomes reusable.
    Cancel { room: RoomKey, name: String },
    /// Freeze an item that has at least one estimate.
    Complete { room: RoomKey, name: String },
    /// Query the items still being estimated.
    InProgress { room: RoomKey },
    /// Query the completed items with their aggregates.
    Completed { room: RoomKey },
}

/// What the board answers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum EstimationResponse {
    /// The mutation was applied.
    Ack,
    /// The operation was refused; no state was written.
    Rejected(RejectReason),
    /// Answer to `InProgress`.
    InProgress(Vec<InProgressItem>),
    /// Answer to `Completed`.
    Completed(Vec<CompletedItem>),
}

impl EstimationResponse {
    /// The rejection carried by this response, if any.
    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}
