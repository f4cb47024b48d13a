//! The session: one game table plus the menu state around it.
//!
//! Everything the menu and the board can do goes through here. Outcomes
//! are turned into sound cues and the board is reset after a win or a draw,
//! with the score carried over.

use crate::sound::{SoundCue, SoundPlayer};
use crate::theme::Theme;
use rand::Rng;
use rand::rngs::StdRng;
use tictactoe_core::{GameState, Outcome, Player, Position};
use tracing::{debug, info, instrument, warn};

/// The seat the computer plays in AI mode.
pub const AI_PLAYER: Player = Player::O;

/// Stamp for a deferred AI move.
///
/// Captured when the move is scheduled; the move only happens if the board
/// is still in the same game at the same turn when the timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AiTicket {
    /// Board generation at schedule time.
    pub generation: u64,
    /// Number of marks on the board at schedule time.
    pub turn: usize,
}

/// Result of a move that was actually played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// What the move did.
    pub outcome: Outcome,
    /// Set when the AI should answer; hand it to the scheduler.
    pub schedule_ai: Option<AiTicket>,
}

/// A game table with its mode, theme, sound and RNG.
pub struct Session<R: Rng = StdRng> {
    game: GameState,
    ai_mode: bool,
    theme: Theme,
    rng: R,
    sound: Box<dyn SoundPlayer>,
    message: String,
}

impl<R: Rng> std::fmt::Debug for Session<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game)
            .field("ai_mode", &self.ai_mode)
            .field("theme", &self.theme)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<R: Rng> Session<R> {
    /// Two-player mode, classic theme, fresh game.
    #[instrument(skip_all)]
    pub fn new(rng: R, sound: Box<dyn SoundPlayer>) -> Self {
        Self {
            game: GameState::new(),
            ai_mode: false,
            theme: Theme::default(),
            rng,
            sound,
            message: "Player X to move.".to_string(),
        }
    }

    /// Sets the starting mode.
    pub fn with_ai_mode(mut self, ai_mode: bool) -> Self {
        self.ai_mode = ai_mode;
        self
    }

    /// Sets the starting theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// True when the computer plays O.
    pub fn ai_mode(&self) -> bool {
        self.ai_mode
    }

    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Latest message for the player.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replaces the message line, e.g. with a startup notice.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Scoreboard text.
    pub fn score_text(&self) -> String {
        self.game.scores().to_string()
    }

    /// Mode label.
    pub fn mode_text(&self) -> &'static str {
        if self.ai_mode {
            "Mode: AI"
        } else {
            "Mode: Two Player"
        }
    }

    /// Theme label.
    pub fn theme_text(&self) -> String {
        format!("Theme: {}", self.theme.label())
    }

    /// True while the human should wait for the AI.
    pub fn awaiting_ai(&self) -> bool {
        self.ai_mode && self.game.current_player() == AI_PLAYER
    }

    /// A click on a cell.
    ///
    /// Returns `None` when the click is ignored: the cell is taken, or the
    /// AI is to move.
    #[instrument(skip(self), fields(player = %self.game.current_player()))]
    pub fn click(&mut self, position: Position) -> Option<MoveReport> {
        if self.awaiting_ai() {
            debug!("Ignoring click during AI turn");
            return None;
        }
        match self.game.place(position) {
            Ok(outcome) => Some(self.settle(outcome)),
            Err(e) => {
                debug!(error = %e, "Ignoring click");
                None
            }
        }
    }

    /// The deferred AI move.
    ///
    /// Does nothing (returns `None`) if the ticket is stale: AI mode was
    /// switched off, the board was reset, or the turn moved on since the
    /// ticket was issued.
    #[instrument(skip(self))]
    pub fn ai_turn(&mut self, ticket: AiTicket) -> Option<MoveReport> {
        if !self.ai_mode
            || ticket.generation != self.game.generation()
            || ticket.turn != self.game.filled_cells()
            || self.game.current_player() != AI_PLAYER
        {
            debug!(
                current_generation = self.game.generation(),
                current_turn = self.game.filled_cells(),
                "Dropping stale AI move"
            );
            return None;
        }

        let available = self.game.available_cells();
        match self.game.ai_move(&available, &mut self.rng) {
            Ok(outcome) => Some(self.settle(outcome)),
            Err(e) => {
                warn!(error = %e, "AI could not move");
                None
            }
        }
    }

    /// Clears the board; scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.message = "Board reset. Player X to move.".to_string();
    }

    /// Switches to two-player mode and starts a new board.
    #[instrument(skip(self))]
    pub fn two_player_mode(&mut self) {
        self.ai_mode = false;
        self.game.reset();
        info!("Two-player mode");
        self.message = "Two-player mode. Player X to move.".to_string();
    }

    /// Flips AI mode and starts a new board.
    #[instrument(skip(self))]
    pub fn toggle_ai_mode(&mut self) {
        self.ai_mode = !self.ai_mode;
        self.game.reset();
        info!(ai_mode = self.ai_mode, "Mode toggled");
        self.message = if self.ai_mode {
            "AI mode. You are X.".to_string()
        } else {
            "Two-player mode. Player X to move.".to_string()
        };
    }

    /// Changes the colour theme. The game is untouched.
    #[instrument(skip(self))]
    pub fn select_theme(&mut self, theme: Theme) {
        self.theme = theme;
        info!(theme = %theme, "Theme selected");
    }

    fn ticket(&self) -> AiTicket {
        AiTicket {
            generation: self.game.generation(),
            turn: self.game.filled_cells(),
        }
    }

    /// Plays the cue for `outcome` and resets the board if the game ended.
    fn settle(&mut self, outcome: Outcome) -> MoveReport {
        debug!(%outcome, "Settling move");
        match outcome {
            Outcome::Win(player) => {
                self.sound.play(SoundCue::Win);
                self.game.reset();
                self.message = format!("Player {} wins! {}", player, self.game.scores());
                MoveReport {
                    outcome,
                    schedule_ai: None,
                }
            }
            Outcome::Draw => {
                self.sound.play(SoundCue::Draw);
                self.game.reset();
                self.message = "It's a draw!".to_string();
                MoveReport {
                    outcome,
                    schedule_ai: None,
                }
            }
            Outcome::Continue => {
                self.sound.play(SoundCue::Move);
                let next = self.game.current_player();
                self.message = format!("Player {} to move.", next);
                let schedule_ai = (self.ai_mode && next == AI_PLAYER).then(|| self.ticket());
                MoveReport {
                    outcome,
                    schedule_ai,
                }
            }
        }
    }
}
