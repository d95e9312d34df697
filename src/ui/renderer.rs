//! Terminal setup and the main event loop

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use super::app_component::AppComponent;
use super::core::{Component, EventHandler};
use crate::config::Config;
use crate::logger::Logger;

/// Run the main TUI application
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    // Terminal initialization
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(&config, logger.clone());
    logger.log("App: Started".to_string());

    // Main application loop
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup runs even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    logger.log("App: Exited".to_string());
    res
}

/// Draw, wait for the next event, apply it, repeat until quit
pub async fn run_ui<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppComponent) -> Result<()> {
    let mut events = EventHandler::new();

    loop {
        terminal.draw(|f| {
            let area = f.area();
            app.render(f, area);
        })?;

        let event = events.next_event().await?;
        app.handle_event(event)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
