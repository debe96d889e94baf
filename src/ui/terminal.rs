//! Terminal Setup
//!
//! Raw mode and the alternate screen, entered together and left together.

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Runs its cleanup on drop unless disarmed.
pub struct RestoreGuard<F: FnOnce()> {
    cleanup: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    pub fn new(cleanup: F) -> Self {
        Self {
            cleanup: Some(cleanup),
        }
    }

    /// Setup finished; keep the terminal as it is.
    pub fn disarm(mut self) {
        self.cleanup = None;
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

/// Enter raw mode and the alternate screen. If any step fails the terminal
/// is put back before the error is returned.
pub fn setup() -> io::Result<Tui> {
    enable_raw_mode()?;
    let guard = RestoreGuard::new(|| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    });

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    guard.disarm();
    Ok(terminal)
}

pub fn restore(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
