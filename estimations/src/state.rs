//! Shared concurrent state for the estimation board
//!
//! Rooms come into being on first reference and each one carries its own
//! lock: operations in different rooms never block each other, while every
//! operation within a room is atomic and serializable. Projections take the
//! room's read lock, so they observe a consistent snapshot and never
//! interleave with an in-flight mutation.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use shared::RoomKey;

use crate::core::Room;

/// Room map with per-room exclusion.
#[derive(Debug, Default)]
pub struct EstimationState {
    rooms: RwLock<HashMap<RoomKey, Arc<RwLock<Room>>>>,
}

impl EstimationState {
    pub fn new() -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
        }
    }

    /// Handle for a room, creating it on first reference.
    ///
    /// The map lock is only held long enough to resolve the handle; callers
    /// then lock the room itself for the actual operation.
    pub async fn room(&self, key: &RoomKey) -> Arc<RwLock<Room>> {
        if let Some(room) = self.rooms.read().await.get(key) {
            return Arc::clone(room);
        }

        let mut rooms = self.rooms.write().await;
        Arc::clone(rooms.entry(key.clone()).or_default())
    }

    /// Number of rooms referenced so far. Rooms are never deleted.
    pub async fn room_count(&self) -> usize {
        self.rooms.read().await.len()
    }
}
