//! Helpers shared by the UI tests

use chrono::{DateTime, Local, TimeZone};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use todolist::config::Config;
use todolist::logger::Logger;
use todolist::ui::core::{Component, EventType};
use todolist::ui::AppComponent;
use todolist::utils::datetime::Clock;

/// Clock pinned to a single instant
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

pub fn fixed_instant() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 10, 16, 14, 5, 0).single().unwrap()
}

pub fn test_app() -> AppComponent {
    test_app_with_config(&Config::default())
}

pub fn test_app_with_config(config: &Config) -> AppComponent {
    AppComponent::with_clock(config, Logger::new(), Box::new(FixedClock(fixed_instant())))
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(key(code))).unwrap();
}

pub fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Open the add dialog, type a title and save it
pub fn add_task(app: &mut AppComponent, title: &str) {
    press(app, KeyCode::Char('a'));
    type_text(app, title);
    press(app, KeyCode::Enter);
}

/// Render the app into an in-memory terminal and return its text, one line per row
pub fn render_to_text(app: &mut AppComponent, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
