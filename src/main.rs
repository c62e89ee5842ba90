//! Skyglance - current conditions and forecasts in the terminal
//!
//! A terminal UI application that shows the current weather, an hourly strip
//! and a multi-day forecast for a searchable city, using Open-Meteo data.

use std::io;
use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use skyglance::app::App;
use skyglance::cli::{Cli, StartupConfig};
use skyglance::{logging, ui};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

async fn run(config: StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    setup_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let initial_location = config.location.clone();
    let mut app = App::new(config);
    let mut theme_updates = app.themes().subscribe();

    app.load_weather(initial_location);

    let mut needs_redraw = true;
    loop {
        if app.poll_messages() {
            needs_redraw = true;
        }
        if theme_updates.has_changed().unwrap_or(false) {
            theme_updates.borrow_and_update();
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|frame| ui::render(frame, &app))?;
            needs_redraw = false;
        }

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                    needs_redraw = true;
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(2);
        }
    };

    let log_path = logging::init(config.log_file.as_deref());
    tracing::info!(city = %config.location.name, logging = log_path.is_some(), "starting");

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
