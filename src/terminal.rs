use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{App, PanelView};
use crate::dashboard::Renderer;
use crate::error::Result;
use crate::input;
use crate::ui;

/// Draws dashboard views with ratatui and turns key presses into a quit signal.
pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
}

impl TerminalRenderer {
    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter(app: App) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self { terminal, app })
    }

    /// Give the terminal back to the shell.
    pub fn leave(mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let app = &self.app;
        self.terminal.draw(|f| ui::draw(f, app))?;
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &PanelView) -> Result<()> {
        self.app.view = view.clone();
        self.redraw()
    }

    fn poll_quit(&mut self, timeout: Duration) -> Result<bool> {
        if event::poll(timeout)? {
            match event::read()? {
                // On Windows, crossterm fires Press and Release; only handle Press
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_input(&mut self.app, key);
                }
                Event::Resize(_, _) => self.redraw()?,
                _ => {}
            }
        }
        Ok(self.app.should_quit)
    }
}
