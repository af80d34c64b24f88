//! Service implementations for the estimation board

pub mod board;
pub mod dispatch;

pub use board::RealEstimationBoard;
pub use dispatch::handle_request;
