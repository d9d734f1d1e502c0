//! Terminal User Interface module using ratatui

mod app;
pub mod components;
mod events;
mod keys;
pub mod styles;
pub mod utils;

pub use app::App;
pub use events::EventHandler;

use crate::config::Config;
use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{CrosstermBackend, TestBackend};
use ratatui::Terminal;
use std::io;
use tokio::sync::mpsc;
use tracing::{debug, info};

pub type Backend = CrosstermBackend<io::Stdout>;
pub type Frame<'a> = ratatui::Frame<'a>;

/// Initialize the terminal for TUI mode
pub fn init_terminal(mouse_enabled: bool) -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Best-effort terminal reset for the panic path
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Show `comment` in the interactive viewer until it is dismissed
pub async fn run(config: &Config, comment: String) -> Result<()> {
    let mut event_handler = EventHandler::new();
    let mut app = App::new(config, comment, event_handler.sender())?;
    let mut terminal = init_terminal(config.mouse_enabled)?;

    let result = run_app(&mut terminal, &mut app, &mut event_handler).await;

    restore_terminal(&mut terminal)?;
    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> Result<()> {
    info!("Starting interactive viewer");
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let event = event_handler.next().await?;
        if app.handle_event(event).await? {
            break; // Exit requested
        }
    }
    Ok(())
}

/// Draw a single frame off-screen and return it as plain text
pub fn render_to_string(config: &Config, comment: String, width: u16, height: u16) -> Result<String> {
    debug!(width, height, "Rendering comment off-screen");
    let (sender, _receiver) = mpsc::unbounded_channel();
    let mut app = App::new(config, comment, sender)?;

    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| app.render(frame))?;

    Ok(utils::buffer::to_text(terminal.backend().buffer()))
}
