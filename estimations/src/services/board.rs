//! Real estimation board implementation
//!
//! Thin async shell over the pure room state machine: each call resolves the
//! room handle, takes that room's own lock, and delegates. Mutations hold
//! the write lock, projections the read lock, which gives every operation
//! the per-room atomicity the board promises.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use shared::{CompletedItem, EstimationResult, InProgressItem, RoomKey, ThreePointEstimate};

use crate::state::EstimationState;
use crate::traits::EstimationBoard;

/// Real estimation board backed by shared in-memory state.
#[derive(Clone, Default)]
pub struct RealEstimationBoard {
    state: Arc<EstimationState>,
}

impl RealEstimationBoard {
    /// Create a board with fresh state.
    pub fn new() -> Self {
        Self {
            state: Arc::new(EstimationState::new()),
        }
    }

    /// Create a board over existing state, e.g. one shared with an admin
    /// surface.
    pub fn with_state(state: Arc<EstimationState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EstimationBoard for RealEstimationBoard {
    async fn add(&self, room: &RoomKey, name: &str, description: &str) -> EstimationResult {
        let handle = self.state.room(room).await;
        let result = handle.write().await.add(name, description);

        match &result {
            Ok(()) => info!(room = %room, name, "item added to board"),
            Err(reason) => debug!(room = %room, name, %reason, "add rejected"),
        }
        result
    }

    async fn estimate(
        &self,
        room: &RoomKey,
        name: &str,
        user: &str,
        estimate: ThreePointEstimate,
    ) -> EstimationResult {
        let handle = self.state.room(room).await;
        let result = handle.write().await.estimate(name, user, estimate);

        match &result {
            Ok(()) => info!(room = %room, name, user, "estimate recorded"),
            Err(reason) => debug!(room = %room, name, user, %reason, "estimate rejected"),
        }
        result
    }

    async fn cancel(&self, room: &RoomKey, name: &str) -> EstimationResult {
        let handle = self.state.room(room).await;
        let result = handle.write().await.cancel(name);

        match &result {
            Ok(()) => info!(room = %room, name, "item cancelled"),
            Err(reason) => debug!(room = %room, name, %reason, "cancel rejected"),
        }
        result
    }

    async fn complete(&self, room: &RoomKey, name: &str) -> EstimationResult {
        let handle = self.state.room(room).await;
        let result = handle.write().await.complete(name);

        match &result {
            Ok(()) => info!(room = %room, name, "item completed"),
            Err(reason) => debug!(room = %room, name, %reason, "complete rejected"),
        }
        result
    }

    async fn in_progress(&self, room: &RoomKey) -> Vec<InProgressItem> {
        let handle = self.state.room(room).await;
        let guard = handle.read().await;
        guard.in_progress()
    }

    async fn completed(&self, room: &RoomKey) -> Vec<CompletedItem> {
        let handle = self.state.room(room).await;
        let guard = handle.read().await;
        guard.completed()
    }
}
