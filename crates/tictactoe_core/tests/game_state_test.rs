//! Tests for the game state: moves, scoring, reset.

use tictactoe_core::rules::LINES;
use tictactoe_core::{GameState, MoveError, Outcome, Player, Position, Scores, Square};

/// Plays `indices` in order, asserting every move but the last continues.
fn play(game: &mut GameState, indices: &[usize]) -> Outcome {
    let (last, rest) = indices.split_last().expect("at least one move");
    for &index in rest {
        assert_eq!(game.apply_move(index), Ok(Outcome::Continue), "move {index}");
    }
    game.apply_move(*last).expect("valid move")
}

/// Filler squares for the opponent that never complete a line together with
/// each other and stay off `line`.
fn filler_for(line: [Position; 3]) -> Vec<usize> {
    let free: Vec<usize> = Position::ALL
        .iter()
        .copied()
        .filter(|pos| !line.contains(pos))
        .map(Position::to_index)
        .collect();
    // Two squares from six can never form a line on their own.
    free.into_iter().take(2).collect()
}

#[test]
fn test_new_game() {
    let game = GameState::new();
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.scores().get(Player::X), 0);
    assert_eq!(game.scores().get(Player::O), 0);
    assert_eq!(game.available_cells().len(), 9);
    assert_eq!(game.generation(), 0);
}

#[test]
fn test_each_line_wins_for_x() {
    for line in LINES {
        let mut game = GameState::new();
        let filler = filler_for(line);
        let moves = [
            line[0].to_index(),
            filler[0],
            line[1].to_index(),
            filler[1],
            line[2].to_index(),
        ];
        assert_eq!(play(&mut game, &moves), Outcome::Win(Player::X), "line {line:?}");
        assert!(game.check_winner(Player::X));
        assert!(!game.check_winner(Player::O));
        assert_eq!(game.winner(), Some(Player::X));
    }
}

#[test]
fn test_each_line_wins_for_o() {
    for line in LINES {
        let mut game = GameState::new();
        let free: Vec<usize> = Position::ALL
            .iter()
            .copied()
            .filter(|pos| !line.contains(pos))
            .map(Position::to_index)
            .collect();
        // X takes three free squares that do not form a line of their own.
        let x_moves = pick_non_line(&free);
        let moves = [
            x_moves[0],
            line[0].to_index(),
            x_moves[1],
            line[1].to_index(),
            x_moves[2],
            line[2].to_index(),
        ];
        assert_eq!(play(&mut game, &moves), Outcome::Win(Player::O), "line {line:?}");
        assert_eq!(game.scores().get(Player::O), 1);
        assert_eq!(game.scores().get(Player::X), 0);
    }
}

fn pick_non_line(free: &[usize]) -> [usize; 3] {
    for a in 0..free.len() {
        for b in a + 1..free.len() {
            for c in b + 1..free.len() {
                let triple = [free[a], free[b], free[c]];
                let is_line = LINES.iter().any(|line| {
                    line.iter().all(|pos| triple.contains(&pos.to_index()))
                });
                if !is_line {
                    return triple;
                }
            }
        }
    }
    panic!("no non-winning triple in {free:?}");
}

#[test]
fn test_occupied_cell_is_rejected_without_change() {
    let mut game = GameState::new();
    game.apply_move(4).expect("valid move");
    let before = game.clone();

    assert_eq!(
        game.apply_move(4),
        Err(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(game, before);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_invalid_index_is_rejected_without_change() {
    let mut game = GameState::new();
    let before = game.clone();
    assert_eq!(game.apply_move(9), Err(MoveError::InvalidIndex(9)));
    assert_eq!(game, before);
}

#[test]
fn test_move_errors_are_leaf_errors() {
    use std::error::Error;

    let occupied = MoveError::CellOccupied(Position::Center);
    assert!(occupied.source().is_none());
    assert_eq!(occupied.to_string(), format!("Square {} is already occupied", Position::Center));
    assert!(MoveError::InvalidIndex(12).source().is_none());
    assert_eq!(
        MoveError::InvalidIndex(12).to_string(),
        "Position 12 is out of bounds (must be 0-8)"
    );
}

#[test]
fn test_turn_alternates() {
    let mut game = GameState::new();
    assert_eq!(game.apply_move(0), Ok(Outcome::Continue));
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game.apply_move(1), Ok(Outcome::Continue));
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(game.board().get(Position::TopCenter), Square::Occupied(Player::O));
}

#[test]
fn test_win_scores_exactly_one_point() {
    let mut game = GameState::new();
    let before = game.scores();
    assert_eq!(play(&mut game, &[0, 3, 1, 4, 2]), Outcome::Win(Player::X));
    assert_eq!(game.scores().get(Player::X), before.get(Player::X) + 1);
    assert_eq!(game.scores().get(Player::O), before.get(Player::O));
}

#[test]
fn test_reset_keeps_scores() {
    let mut game = GameState::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    game.reset();
    play(&mut game, &[0, 3, 1, 4, 8, 5]);
    let scores = game.scores();

    game.reset();

    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.scores(), scores);
    assert_eq!(scores.get(Player::X), 1);
    assert_eq!(scores.get(Player::O), 1);
    assert_eq!(game.generation(), 2);
}

#[test]
fn test_reset_mid_game_hands_move_to_x() {
    let mut game = GameState::new();
    game.apply_move(0).expect("valid move");
    assert_eq!(game.current_player(), Player::O);
    game.reset();
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.available_cells().len(), 9);
}

#[test]
fn test_top_row_scenario() {
    let mut game = GameState::new();
    assert_eq!(play(&mut game, &[0, 3, 1, 4, 2]), Outcome::Win(Player::X));
    assert_eq!(game.scores().x, 1);

    game.reset();
    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = GameState::new();
    // Ends as X O X / X O O / O X X.
    let outcome = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(outcome, Outcome::Draw);
    assert!(outcome.is_terminal());
    assert!(game.is_draw());
    assert_eq!(game.winner(), None);
    assert!(!game.check_winner(Player::X));
    assert!(!game.check_winner(Player::O));
    assert_eq!(game.scores(), Scores::default());
}

#[test]
fn test_last_move_filling_the_board_with_a_line_is_a_win() {
    let mut game = GameState::new();
    // Ends as X O X / O X O / O X X, the final X closing the main diagonal.
    let outcome = play(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
    assert_eq!(game.filled_cells(), 9);
    assert!(game.is_draw());
    assert_eq!(outcome, Outcome::Win(Player::X));
    assert_eq!(game.scores().x, 1);
}
