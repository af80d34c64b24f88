//! Per-room estimation state machine
//!
//! All validation lives here and runs to completion before any mutation: an
//! operation either applies in full or leaves the room untouched. A work
//! item moves `add -> InProgress -> Completed`, or is removed again by
//! `cancel` while it has no estimates; the two endings are mutually
//! exclusive.

use shared::{
    CompletedItem, EstimationResult, InProgressItem, RejectReason, ThreePointEstimate,
    UserEstimate,
};

use crate::core::pert::pert_aggregate;
use crate::types::{ItemStatus, WorkItem};

/// One isolated estimation session: an ordered collection of work items.
///
/// Items keep their creation order; both projections report in that order.
#[derive(Debug, Default)]
pub struct Room {
    items: Vec<WorkItem>,
}

impl Room {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Put a new item on the board.
    ///
    /// The name is stored exactly as given; only the blank check trims.
    /// Completed items still occupy their name, cancelled ones do not.
    pub fn add(&mut self, name: &str, description: &str) -> EstimationResult {
        if name.trim().is_empty() {
            return Err(RejectReason::EmptyName);
        }
        if self.find(name).is_some() {
            return Err(RejectReason::AddedPreviously);
        }

        self.items.push(WorkItem::new(name, description));
        Ok(())
    }

    /// Record one user's triple for an item.
    ///
    /// Checks run in a fixed order: blank user, unknown item, completed
    /// item, duplicate user, unordered triple.
    pub fn estimate(
        &mut self,
        name: &str,
        user: &str,
        estimate: ThreePointEstimate,
    ) -> EstimationResult {
        if user.trim().is_empty() {
            return Err(RejectReason::EmptyUser);
        }

        let item = self.find_mut(name).ok_or(RejectReason::NonexistentName)?;
        if item.is_completed() {
            return Err(RejectReason::CompletedPreviously);
        }
        if item.estimate_by(user).is_some() {
            return Err(RejectReason::UserEstimatedPreviously);
        }
        if !estimate.is_ordered() {
            return Err(RejectReason::AbsurdEstimation);
        }

        item.estimates.push(UserEstimate::new(user, estimate));
        Ok(())
    }

    /// Remove an item that nobody has estimated yet.
    ///
    /// The name becomes reusable by a subsequent `add`.
    pub fn cancel(&mut self, name: &str) -> EstimationResult {
        let index = self.position(name).ok_or(RejectReason::NonexistentName)?;
        if self.items[index].has_estimates() {
            return Err(RejectReason::AlreadyEstimated);
        }

        self.items.remove(index);
        Ok(())
    }

    /// Freeze an item that has at least one estimate. Terminal.
    pub fn complete(&mut self, name: &str) -> EstimationResult {
        let item = self.find_mut(name).ok_or(RejectReason::NonexistentName)?;
        if item.is_completed() {
            return Err(RejectReason::CompletedPreviously);
        }
        if !item.has_estimates() {
            return Err(RejectReason::Unestimated);
        }

        item.status = ItemStatus::Completed;
        Ok(())
    }

    /// Items still being estimated, in creation order, values withheld.
    pub fn in_progress(&self) -> Vec<InProgressItem> {
        self.items
            .iter()
            .filter(|item| !item.is_completed())
            .map(|item| InProgressItem {
                name: item.name.clone(),
                description: item.description.clone(),
                estimates: item.estimates.iter().map(|e| e.user.clone()).collect(),
            })
            .collect()
    }

    /// Completed items with full detail and the PERT aggregate, in creation
    /// order. The aggregate is computed here on every call, never cached.
    pub fn completed(&self) -> Vec<CompletedItem> {
        self.items
            .iter()
            .filter(|item| item.is_completed())
            .map(|item| CompletedItem {
                name: item.name.clone(),
                description: item.description.clone(),
                estimate: pert_aggregate(&item.estimates),
                estimates: item.estimates.clone(),
            })
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    fn find(&self, name: &str) -> Option<&WorkItem> {
        self.items.iter().find(|item| item.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut WorkItem> {
        self.items.iter_mut().find(|item| item.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(o: i64, r: i64, p: i64) -> ThreePointEstimate {
        ThreePointEstimate::new(o, r, p)
    }

    #[test]
    fn test_add_rejects_blank_names() {
        let mut room = Room::new();

        assert_eq!(room.add("", "desc"), Err(RejectReason::EmptyName));
        assert_eq!(room.add("   ", "desc"), Err(RejectReason::EmptyName));
        assert_eq!(room.item_count(), 0);
    }

    #[test]
    fn test_add_rejects_live_duplicates() {
        let mut room = Room::new();

        room.add("checkout-flow", "original").unwrap();
        assert_eq!(
            room.add("checkout-flow", "replacement"),
            Err(RejectReason::AddedPreviously)
        );

        // The original description survives the rejected second add.
        assert_eq!(room.in_progress()[0].description, "original");
    }

    #[test]
    fn test_completed_items_still_occupy_their_name() {
        let mut room = Room::new();
        room.add("checkout-flow", "").unwrap();
        room.estimate("checkout-flow", "alice", triple(1, 4, 8)).unwrap();
        room.complete("checkout-flow").unwrap();

        assert_eq!(
            room.add("checkout-flow", "again"),
            Err(RejectReason::AddedPreviously)
        );
    }

    #[test]
    fn test_cancel_frees_the_name() {
        let mut room = Room::new();
        room.add("checkout-flow", "first").unwrap();
        room.cancel("checkout-flow").unwrap();

        room.add("checkout-flow", "second").unwrap();
        assert_eq!(room.in_progress()[0].description, "second");
    }

    #[test]
    fn test_estimate_validation_order() {
        let mut room = Room::new();
        room.add("checkout-flow", "").unwrap();
        room.estimate("checkout-flow", "alice", triple(1, 4, 8)).unwrap();

        // Blank user wins over everything, even an unknown item.
        assert_eq!(
            room.estimate("missing", "  ", triple(1, 4, 8)),
            Err(RejectReason::EmptyUser)
        );
        // Unknown item wins over an absurd triple.
        assert_eq!(
            room.estimate("missing", "bob", triple(8, 4, 1)),
            Err(RejectReason::NonexistentName)
        );
        // Duplicate user wins over an absurd triple.
        assert_eq!(
            room.estimate("checkout-flow", "alice", triple(8, 4, 1)),
            Err(RejectReason::UserEstimatedPreviously)
        );
    }

    #[test]
    fn test_absurd_triples_leave_estimates_untouched() {
        let mut room = Room::new();
        room.add("checkout-flow", "").unwrap();

        for bad in [triple(4, 1, 8), triple(1, 8, 4), triple(-1, 1, 2)] {
            assert_eq!(
                room.estimate("checkout-flow", "alice", bad),
                Err(RejectReason::AbsurdEstimation)
            );
        }

        assert!(room.in_progress()[0].estimates.is_empty());
        // A rejected triple does not burn the user's turn.
        room.estimate("checkout-flow", "alice", triple(1, 4, 8)).unwrap();
    }

    #[test]
    fn test_estimated_items_cannot_be_cancelled() {
        let mut room = Room::new();
        room.add("checkout-flow", "").unwrap();
        room.estimate("checkout-flow", "alice", triple(1, 4, 8)).unwrap();

        assert_eq!(
            room.cancel("checkout-flow"),
            Err(RejectReason::AlreadyEstimated)
        );
        assert_eq!(room.cancel("missing"), Err(RejectReason::NonexistentName));
    }

    #[test]
    fn test_complete_requires_an_estimate_and_is_terminal() {
        let mut room = Room::new();
        room.add("checkout-flow", "").unwrap();

        assert_eq!(room.complete("missing"), Err(RejectReason::NonexistentName));
        assert_eq!(room.complete("checkout-flow"), Err(RejectReason::Unestimated));

        room.estimate("checkout-flow", "alice", triple(1, 4, 8)).unwrap();
        room.complete("checkout-flow").unwrap();

        assert_eq!(
            room.complete("checkout-flow"),
            Err(RejectReason::CompletedPreviously)
        );
        assert_eq!(
            room.estimate("checkout-flow", "bob", triple(1, 4, 8)),
            Err(RejectReason::CompletedPreviously)
        );
    }

    #[test]
    fn test_projections_partition_by_status_in_creation_order() {
        let mut room = Room::new();
        room.add("first", "").unwrap();
        room.add("second", "").unwrap();
        room.add("third", "").unwrap();

        room.estimate("second", "alice", triple(1, 4, 8)).unwrap();
        room.complete("second").unwrap();

        let open: Vec<_> = room.in_progress().into_iter().map(|i| i.name).collect();
        let done: Vec<_> = room.completed().into_iter().map(|i| i.name).collect();

        assert_eq!(open, ["first", "third"]);
        assert_eq!(done, ["second"]);
    }

    #[test]
    fn test_in_progress_withholds_values_but_names_users() {
        let mut room = Room::new();
        room.add("checkout-flow", "").unwrap();
        room.estimate("checkout-flow", "alice", triple(1, 4, 8)).unwrap();
        room.estimate("checkout-flow", "bob", triple(2, 5, 9)).unwrap();

        let view = room.in_progress();
        assert_eq!(view[0].estimates, ["alice", "bob"]);
    }

    #[test]
    fn test_completed_view_carries_aggregate_and_detail() {
        let mut room = Room::new();
        room.add("checkout-flow", "Rework the checkout flow").unwrap();
        room.estimate("checkout-flow", "alice", triple(1, 4, 8)).unwrap();
        room.complete("checkout-flow").unwrap();

        let view = room.completed();
        assert_eq!(view[0].estimate, Some(6.5));
        assert_eq!(
            view[0].estimates,
            [UserEstimate::new("alice", triple(1, 4, 8))]
        );
    }
}
