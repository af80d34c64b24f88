//! Request dispatch for the estimation board
//!
//! Maps each decoded request variant one-to-one onto a board operation with
//! an ordinary match. The boundary layer owns decoding; nothing behind it
//! picks operations from raw request data.

use shared::{EstimationRequest, EstimationResponse, EstimationResult};

use crate::traits::EstimationBoard;

/// Apply one decoded request to the board and wrap its outcome.
pub async fn handle_request(
    board: &dyn EstimationBoard,
    request: EstimationRequest,
) -> EstimationResponse {
    match request {
        EstimationRequest::Add {
            room,
            name,
            description,
        } => outcome(board.add(&room, &name, &description).await),
        EstimationRequest::Estimate {
            room,
            name,
            user,
            estimate,
        } => outcome(board.estimate(&room, &name, &user, estimate).await),
        EstimationRequest::Cancel { room, name } => outcome(board.cancel(&room, &name).await),
        EstimationRequest::Complete { room, name } => outcome(board.complete(&room, &name).await),
        EstimationRequest::InProgress { room } => {
            EstimationResponse::InProgress(board.in_progress(&room).await)
        }
        EstimationRequest::Completed { room } => {
            EstimationResponse::Completed(board.completed(&room).await)
        }
    }
}

fn outcome(result: EstimationResult) -> EstimationResponse {
    match result {
        Ok(()) => EstimationResponse::Ack,
        Err(reason) => EstimationResponse::Rejected(reason),
    }
}
