use std::io;

use common::engine::tictactoe::{
    BOARD_SIZE, Board, Side, evaluate, get_available_moves, pick_best, score_move, select_move,
};
use tokio::task::JoinHandle;

/// Runs the computer's search on the blocking pool so the input loop stays responsive.
pub async fn compute_move(board: Board, parallel: bool) -> io::Result<Option<usize>> {
    if !parallel {
        return tokio::task::spawn_blocking(move || select_move(&board))
            .await
            .map_err(io::Error::other);
    }

    if evaluate(&board).is_terminal() {
        return Ok(None);
    }

    let branches: Vec<(usize, JoinHandle<Option<i32>>)> = get_available_moves(&board)
        .into_iter()
        .map(|index| {
            let handle = tokio::task::spawn_blocking(move || score_move(&board, index, Side::O));
            (index, handle)
        })
        .collect();

    // Awaited in index order, so ties still go to the lowest cell.
    let mut scores = [None; BOARD_SIZE];
    for (index, handle) in branches {
        scores[index] = handle.await.map_err(io::Error::other)?;
    }

    Ok(pick_best(&scores, Side::O))
}
