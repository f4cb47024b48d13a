//! Terminal front end.

mod app;
mod input;
mod ui;

pub use app::{App, Flow};
pub use input::{Command, key_command, mouse_command, move_cursor};
pub use ui::ScreenLayout;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::scheduler::{AiScheduler, AppEvent};
use crate::session::Session;

/// Runs the game in the terminal until the player quits.
///
/// Takes over the terminal (raw mode, alternate screen, mouse capture) and
/// restores it on the way out, also when the loop fails.
#[instrument(skip_all, fields(ai_delay_ms = ai_delay.as_millis() as u64))]
pub async fn run(session: Session, ai_delay: Duration) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (scheduler, mut events) = AiScheduler::new(ai_delay);
    let res = run_app(&mut terminal, App::new(session), &scheduler, &mut events).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    scheduler: &AiScheduler,
    events: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        // Timers that fired since the last frame, applied before drawing.
        drain_events(&mut app, events);

        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            ui::draw(f, &app);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            tokio::task::yield_now().await;
            continue;
        }

        let command = match event::read()? {
            Event::Key(key) => key_command(key, app.cursor()),
            Event::Mouse(mouse) => mouse_command(mouse, &ScreenLayout::new(area)),
            _ => None,
        };
        let Some(command) = command else {
            continue;
        };

        match app.handle(command) {
            Flow::Continue => {}
            Flow::ScheduleAi(ticket) => {
                debug!(?ticket, "Scheduling AI move");
                scheduler.schedule(ticket);
            }
            Flow::Quit => {
                info!("User quit");
                return Ok(());
            }
        }
    }
}

/// Applies every event already waiting on the channel. Returns how many.
pub fn drain_events(app: &mut App, events: &mut mpsc::UnboundedReceiver<AppEvent>) -> usize {
    let mut handled = 0;
    while let Ok(event) = events.try_recv() {
        match event {
            AppEvent::AiTurn(ticket) => app.ai_turn(ticket),
        }
        handled += 1;
    }
    handled
}
