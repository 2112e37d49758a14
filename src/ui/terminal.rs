use crate::app::{App, AppMode};
use crate::engine::AlphabetError;
use crate::ui::layout::ScreenLayout;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::draw_screen;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info};

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // Declared last so the terminal is dropped before the screen is restored
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, AlphabetError> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        info!("screen active");
        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> Result<(), AlphabetError> {
        let poll_timeout = Duration::from_millis(app.config().ui.poll_ms);
        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                info!("screen closing");
                return Ok(());
            }

            if event::poll(poll_timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                    Event::Mouse(mouse) => app.handle_mouse(mouse),
                    Event::Resize(width, height) => debug!(width, height, "resized"),
                    _ => {}
                }
            }

            // Redraw every pass so the flash expires even without input
            self.render_frame(app)?;
        }
    }

    pub fn render_frame(&mut self, app: &mut App) -> Result<(), AlphabetError> {
        let flash = app.is_flashing();
        let mut layout = ScreenLayout::default();

        let state = app.render_state();
        self.terminal.draw(|frame| {
            layout = draw_screen(frame, state, flash);
        })?;

        app.set_layout(layout);
        Ok(())
    }
}
