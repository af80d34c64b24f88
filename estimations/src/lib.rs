//! Estimation board library
//!
//! Tracks collaborative three-point ("PERT") effort estimation sessions:
//! participants add work items, several users submit
//! optimistic/realistic/pessimistic estimates, and each item is completed
//! with a single consensus value aggregated from every submission. Sessions
//! are partitioned into independent rooms that never block one another.

pub mod core;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;

// Re-export main types
pub use state::EstimationState;
pub use types::{ItemStatus, WorkItem};

// Re-export trait definition
pub use traits::EstimationBoard;

// Re-export service implementations
pub use services::{handle_request, RealEstimationBoard};
