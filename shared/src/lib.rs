//! Shared boundary contract for the estimation board
//!
//! Contains only the types that cross the line between the estimation
//! component and whatever front end drives it: room keys, estimate triples,
//! the request/response message set and the rejection taxonomy. Everything
//! internal to the board (work items, room state) stays in the
//! `estimations` crate.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

// Re-export the boundary message set
pub use messages::{
    // Operations and their outcomes
    EstimationRequest, EstimationResponse,

    // Read-only projections
    CompletedItem, InProgressItem, UserEstimate,
};
