//! End-to-end game scenarios on different board sizes.

use strictly_streak::{Cell, Game, GameConfig, GameState, GameStatus, Player, Square};

fn play(config: GameConfig, moves: &[(usize, usize)]) -> GameState {
    let mut game = Game::new(config);
    for &(row, col) in moves {
        game.place_mark(row, col);
    }
    game.state().clone()
}

#[test]
fn test_top_row_win_on_classic_board() {
    let state = play(
        GameConfig::new(3, 3),
        &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)],
    );

    assert_eq!(state.status(), GameStatus::Won(Player::X));
    assert_eq!(state.winner(), Some(Player::X));
    assert_eq!(
        state.winning_line(),
        &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
    );
    assert_eq!(state.status().message().as_deref(), Some("X Wins!"));
}

#[test]
fn test_full_board_draw() {
    let state = play(
        GameConfig::new(3, 3),
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.winner(), None);
    assert!(state.winning_line().is_empty());
    assert_eq!(state.move_count(), 9);
    assert_eq!(state.status().message().as_deref(), Some("It's a Draw!"));
}

#[test]
fn test_four_in_a_row_on_five_board() {
    let mut game = Game::new(GameConfig::new(5, 4));
    let x_moves = [(2, 0), (2, 1), (2, 2), (2, 3)];
    let o_moves = [(0, 0), (0, 1), (0, 2)];

    for (i, &(row, col)) in x_moves.iter().enumerate() {
        game.place_mark(row, col);
        if i < 3 {
            assert_eq!(game.state().status(), GameStatus::InProgress);
            let (o_row, o_col) = o_moves[i];
            game.place_mark(o_row, o_col);
        }
    }

    let state = game.state();
    assert_eq!(state.status(), GameStatus::Won(Player::X));
    assert_eq!(
        state.winning_line(),
        &[Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2), Cell::new(2, 3)]
    );
}

#[test]
fn test_three_is_not_enough_when_streak_is_four() {
    let state = play(
        GameConfig::new(4, 4),
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
    );
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.current_player(), Player::O);
}

#[test]
fn test_o_can_win_on_anti_diagonal() {
    let state = play(
        GameConfig::new(4, 3),
        &[(0, 0), (0, 3), (0, 1), (1, 2), (3, 3), (2, 1)],
    );
    assert_eq!(state.status(), GameStatus::Won(Player::O));
    assert_eq!(
        state.winning_line(),
        &[Cell::new(0, 3), Cell::new(1, 2), Cell::new(2, 1)]
    );
}

#[test]
fn test_winning_line_cells_share_winner_mark() {
    let state = play(
        GameConfig::new(6, 5),
        &[
            (5, 0),
            (0, 0),
            (4, 1),
            (0, 1),
            (3, 2),
            (0, 2),
            (2, 3),
            (0, 3),
            (1, 4),
        ],
    );
    assert_eq!(state.status(), GameStatus::Won(Player::X));
    assert_eq!(state.winning_line().len(), 5);
    for cell in state.winning_line() {
        assert_eq!(state.board().get(*cell), Some(Square::Occupied(Player::X)));
    }
}

#[test]
fn test_last_move_win_beats_draw() {
    // X completes the middle column with the ninth mark.
    let state = play(
        GameConfig::new(3, 3),
        &[
            (0, 1),
            (0, 0),
            (1, 0),
            (0, 2),
            (2, 2),
            (1, 2),
            (1, 1),
            (2, 0),
            (2, 1),
        ],
    );
    assert_eq!(state.move_count(), 9);
    assert_eq!(state.status(), GameStatus::Won(Player::X));
    assert_eq!(
        state.winning_line(),
        &[Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)]
    );
}

#[test]
fn test_move_count_tracks_occupied_squares() {
    let moves = [(0, 0), (0, 0), (1, 1), (9, 9), (2, 2), (1, 1), (3, 3)];
    let mut game = Game::new(GameConfig::new(6, 5));
    for (row, col) in moves {
        game.place_mark(row, col);
        assert_eq!(
            game.state().move_count(),
            game.state().board().occupied_count()
        );
    }
    assert_eq!(game.state().move_count(), 4);
}
