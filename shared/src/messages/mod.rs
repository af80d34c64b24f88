//! Messages crossing the estimation board boundary
//!
//! The front end decodes whatever transport it speaks (HTTP form fields,
//! JSON, a test harness) into `EstimationRequest` values and renders
//! `EstimationResponse` values back out. Nothing else crosses the line.

pub mod requests;
pub mod views;

pub use requests::{EstimationRequest, EstimationResponse};
pub use views::{CompletedItem, InProgressItem, UserEstimate};
