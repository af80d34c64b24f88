//! Core business logic modules
//!
//! This module contains pure estimation rules with no I/O dependencies:
//! the per-room state machine and the PERT aggregation math. All functions
//! are deterministic and easily testable.

pub mod pert;
pub mod room;

pub use pert::pert_aggregate;
pub use room::Room;
