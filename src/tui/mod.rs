//! TUI (Text User Interface): edit text and preview it with every space variant.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;
mod text;
mod theme;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Runtime;

use crate::core::clipboard::{Clipboard, SystemClipboard};
use crate::core::config::Config;

use app::App;
use handlers::{HandleResult, PendingCopy};

use draw::draw;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(
            std::io::stdout(),
            crossterm::event::DisableBracketedPaste,
            crossterm::event::DisableMouseCapture,
            LeaveAlternateScreen
        );
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for clipboard writes.
pub fn run(config: Arc<Config>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    // Read once at startup; not monitored afterwards.
    let theme = config.initial_theme();
    log::info!("starting TUI with {} theme", theme);

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    // Mouse for click-to-focus and wheel; bracketed paste so pasted text arrives in one event.
    execute!(
        stdout,
        crossterm::event::EnableMouseCapture,
        crossterm::event::EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Runtime::new()
        .map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?;
    let clipboard: Arc<dyn Clipboard> = Arc::new(SystemClipboard);

    let mut app = App::new(theme, config.copy_confirm);
    let mut pending_copies: Vec<PendingCopy> = Vec::new();

    loop {
        let now = Instant::now();
        handlers::copy::poll_copies(&mut pending_copies, &mut app, now);
        app.expire_copy_status(now);

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    let result = handlers::handle_key(
                        key,
                        handlers::HandleKeyContext {
                            app: &mut app,
                            clipboard: &clipboard,
                            pending_copies: &mut pending_copies,
                            rt: &rt,
                        },
                    );
                    if result == HandleResult::Break {
                        break;
                    }
                }
                Event::Mouse(mouse) => handlers::handle_mouse(mouse, &mut app),
                Event::Paste(text) => handlers::handle_paste(&text, &mut app),
                _ => {}
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
