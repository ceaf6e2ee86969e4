use super::app::InteractiveApp;
use super::event::{EventSource, TerminalEvent};
use crate::cli_context::CliContext;
use crate::error::{SmelError, SmelResult};
use crate::logging::{log_debug, log_error, log_info};
use crate::store::SessionStore;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub fn run_interactive_mode(context: &mut CliContext) -> SmelResult<()> {
    log_info("Starting interactive mode");

    let capabilities = context.capabilities();
    log_debug(&format!("Export capabilities: {:?}", capabilities));

    let export_dir = context.export_dir().clone();
    log_debug(&format!("Export directory: {}", export_dir.display()));

    let mut app = InteractiveApp::new(SessionStore::new(), capabilities, export_dir);

    let mut terminal = setup_terminal()?;
    log_debug("Terminal initialized");

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    log_info("Exiting interactive mode");

    result
}

fn event_loop(terminal: &mut AppTerminal, app: &mut InteractiveApp) -> SmelResult<()> {
    let events = EventSource::new(250);

    loop {
        if let Err(e) = terminal.draw(|f| super::ui::draw(f, app)) {
            log_error(&format!("Error drawing UI: {}", e));
            return Err(SmelError::TerminalError(e.to_string()));
        }

        match events.next()? {
            TerminalEvent::Key(key) => {
                log_debug(&format!("Key pressed: {:?}, Page: {:?}, Focus: {:?}", key.code, app.page, app.focus));
                app.handle_key(key);
            }
            TerminalEvent::Resize => {}
            TerminalEvent::Tick => app.tick(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn setup_terminal() -> SmelResult<AppTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut AppTerminal) -> SmelResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Puts the terminal back before the panic message is printed.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        crate::logging::log_panic_info(info);
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        previous(info);
    }));
}
