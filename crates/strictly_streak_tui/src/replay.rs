//! Non-interactive replay of a move list.

use anyhow::Result;
use strictly_streak::{Cell, GameConfig, GameState};
use tracing::{info, instrument};

/// Plays `moves` on a fresh game and renders the final position, either as a
/// board diagram with a status line or as pretty-printed JSON.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn render_replay(config: GameConfig, moves: &[Cell], json: bool) -> Result<String> {
    let state = GameState::replay(config, moves);
    info!(status = ?state.status(), move_count = state.move_count(), "Replay finished");

    if json {
        return Ok(serde_json::to_string_pretty(&state)?);
    }

    let status = state
        .status()
        .message()
        .unwrap_or_else(|| format!("Player {} to move", state.current_player()));
    Ok(format!("{}\n\n{}", state.board().display(), status))
}
