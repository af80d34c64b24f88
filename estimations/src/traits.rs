//! Service trait for the estimation board boundary
//!
//! The front end (HTTP layer, CLI, test harness) consumes the board through
//! this trait only, which keeps the consumer mockable and the board
//! replaceable.

use async_trait::async_trait;

use shared::{CompletedItem, EstimationResult, InProgressItem, RoomKey, ThreePointEstimate};

/// The six operations of the estimation board.
///
/// Every operation is scoped by an explicit room key and is a short,
/// bounded in-memory computation; the async surface exists only for lock
/// acquisition, never for I/O.
#[mockall::automock]
#[async_trait]
pub trait EstimationBoard: Send + Sync {
    /// Put a new item up for estimation in a room.
    async fn add(&self, room: &RoomKey, name: &str, description: &str) -> EstimationResult;

    /// Record one user's three-point estimate for an item.
    async fn estimate(
        &self,
        room: &RoomKey,
        name: &str,
        user: &str,
        estimate: ThreePointEstimate,
    ) -> EstimationResult;

    /// Remove an estimate-free item; its name becomes reusable.
    async fn cancel(&self, room: &RoomKey, name: &str) -> EstimationResult;

    /// Freeze an item that has at least one estimate.
    async fn complete(&self, room: &RoomKey, name: &str) -> EstimationResult;

    /// Items still being estimated, in creation order.
    async fn in_progress(&self, room: &RoomKey) -> Vec<InProgressItem>;

    /// Completed items with their PERT aggregate, in creation order.
    async fn completed(&self, room: &RoomKey) -> Vec<CompletedItem>;
}
