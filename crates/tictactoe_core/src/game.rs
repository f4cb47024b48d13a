//! The game state: board, turn, score.

use crate::ai::pick_uniform;
use crate::outcome::{MoveError, Outcome};
use crate::position::Position;
use crate::rules;
use crate::score::Scores;
use crate::types::{Board, Player, Square};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Complete state of a tic-tac-toe table.
///
/// Play cycles `Continue* -> (Win | Draw) -> reset` forever. Scores survive
/// [`reset`](Self::reset); the board and turn do not.
///
/// The generation counter increases on every reset. Callers that defer work
/// (the AI timer) stamp it at schedule time and compare on wake-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    scores: Scores,
    generation: u64,
}

impl GameState {
    /// Empty board, X to move, zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            scores: Scores::default(),
            generation: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark goes down next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns a snapshot of the score tally.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Number of resets since creation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Empty squares in row-major order.
    pub fn available_cells(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Number of occupied squares.
    pub fn filled_cells(&self) -> usize {
        self.board.filled()
    }

    /// Places the current player's mark at board index `index` (0-8).
    ///
    /// # Errors
    ///
    /// `InvalidIndex` if `index > 8`, `CellOccupied` if the square is
    /// taken. Neither changes any state.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        self.place(position)
    }

    /// Places the current player's mark at `position`.
    ///
    /// A completed line scores a point for the mover and returns `Win`; a
    /// full board returns `Draw`. In both cases the turn does not pass and
    /// the caller is expected to [`reset`](Self::reset). Otherwise the turn
    /// passes and `Continue` is returned.
    ///
    /// # Errors
    ///
    /// `CellOccupied` if the square is taken; the board is left untouched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, position: Position) -> Result<Outcome, MoveError> {
        if !self.board.is_empty(position) {
            debug!(%position, "Square already occupied, ignoring move");
            return Err(MoveError::CellOccupied(position));
        }

        let player = self.current_player;
        self.board.set(position, Square::Occupied(player));

        if self.check_winner(player) {
            self.scores.increment(player);
            info!(%player, scores = %self.scores, "Player completed a line");
            return Ok(Outcome::Win(player));
        }

        if self.is_draw() {
            info!("Board full, game drawn");
            return Ok(Outcome::Draw);
        }

        self.current_player = player.opponent();
        debug!(%position, next = %self.current_player, "Move applied");
        Ok(Outcome::Continue)
    }

    /// True if `player` holds any of the eight lines.
    pub fn check_winner(&self, player: Player) -> bool {
        rules::check_winner(&self.board, player)
    }

    /// The player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(&self.board)
    }

    /// True if no empty square remains.
    ///
    /// This does not look for a winner: a last move can fill the board and
    /// complete a line at once, so check [`check_winner`](Self::check_winner)
    /// first.
    pub fn is_draw(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Clears the board and hands the move to X. Scores are kept.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.generation += 1;
        debug!(generation = self.generation, "Board reset");
    }

    /// Plays a uniformly random square from `available` for the current
    /// player.
    ///
    /// # Errors
    ///
    /// `NoAvailableCells` if `available` is empty, otherwise whatever
    /// [`place`](Self::place) returns for the chosen square.
    #[instrument(skip(self, available, rng), fields(choices = available.len()))]
    pub fn ai_move<R: Rng>(
        &mut self,
        available: &[Position],
        rng: &mut R,
    ) -> Result<Outcome, MoveError> {
        let position = pick_uniform(available, rng).ok_or(MoveError::NoAvailableCells)?;
        debug!(%position, player = %self.current_player, "AI chose position");
        self.place(position)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
