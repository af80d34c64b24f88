//! Read-only projections of a room's work items

use serde::{Deserialize, Serialize};

use crate::types::ThreePointEstimate;

/// One user's recorded triple, kept in submission order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserEstimate {
    pub user: String,
    #[serde(flatten)]
    pub estimate: ThreePointEstimate,
}

impl UserEstimate {
    pub fn new(user: impl Into<String>, estimate: ThreePointEstimate) -> Self {
        Self {
            user: user.into(),
            estimate,
        }
    }
}

/// An item still awaiting estimation.
///
/// Only the names of the users who have weighed in are exposed; their values
/// stay hidden until the item completes, so a front end cannot leak them
/// mid-session.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InProgressItem {
    pub name: String,
    pub description: String,
    pub estimates: Vec<String>,
}

/// A completed item with full per-user detail and the PERT aggregate.
///
/// `estimates` is an insertion-ordered user-to-triple mapping.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompletedItem {
    pub name: String,
    pub description: String,
    /// Aggregate PERT value; absent for an item that somehow carries no
    /// estimates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<f64>,
    pub estimates: Vec<UserEstimate>,
}
