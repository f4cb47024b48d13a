//! Application state for the terminal front end.

use tictactoe_core::Position;
use tracing::debug;

use super::input::Command;
use crate::session::{AiTicket, Session};

/// What the event loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Keep going and start the AI timer.
    ScheduleAi(AiTicket),
    /// Leave the loop.
    Quit,
}

/// Session plus the keyboard cursor.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
}

impl App {
    /// Creates the app with the cursor in the centre.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Position::Center,
        }
    }

    /// The session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Applies a command.
    pub fn handle(&mut self, command: Command) -> Flow {
        debug!(?command, "Handling command");
        match command {
            Command::Cursor(position) => self.cursor = position,
            Command::Place(position) => {
                self.cursor = position;
                if let Some(ticket) = self
                    .session
                    .click(position)
                    .and_then(|report| report.schedule_ai)
                {
                    return Flow::ScheduleAi(ticket);
                }
            }
            Command::Reset => self.session.reset(),
            Command::TwoPlayer => self.session.two_player_mode(),
            Command::ToggleAi => self.session.toggle_ai_mode(),
            Command::SelectTheme(theme) => self.session.select_theme(theme),
            Command::CycleTheme => {
                let next = self.session.theme().next();
                self.session.select_theme(next);
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Delivers a fired AI timer.
    pub fn ai_turn(&mut self, ticket: AiTicket) {
        self.session.ai_turn(ticket);
    }
}
