//! Test helpers for driving the estimation board

use estimations::{EstimationBoard, RealEstimationBoard};
use shared::{CompletedItem, RoomKey, ThreePointEstimate};

/// Helper methods wrapping common multi-step board interactions
pub struct TestHelpers;

impl TestHelpers {
    /// A fresh board with no rooms.
    pub fn board() -> RealEstimationBoard {
        RealEstimationBoard::new()
    }

    /// Add an item and record one estimate per (user, triple) pair.
    pub async fn add_with_estimates(
        board: &RealEstimationBoard,
        room: &RoomKey,
        name: &str,
        estimates: &[(&str, ThreePointEstimate)],
    ) {
        board.add(room, name, "test item").await.unwrap();
        for (user, triple) in estimates {
            board.estimate(room, name, user, *triple).await.unwrap();
        }
    }

    /// Complete an item and return its completed view.
    pub async fn complete_and_fetch(
        board: &RealEstimationBoard,
        room: &RoomKey,
        name: &str,
    ) -> CompletedItem {
        board.complete(room, name).await.unwrap();
        board
            .completed(room)
            .await
            .into_iter()
            .find(|item| item.name == name)
            .expect("completed view must contain the item just completed")
    }

    /// Names of the in-progress items, in projection order.
    pub async fn open_names(board: &RealEstimationBoard, room: &RoomKey) -> Vec<String> {
        board
            .in_progress(room)
            .await
            .into_iter()
            .map(|item| item.name)
            .collect()
    }
}
