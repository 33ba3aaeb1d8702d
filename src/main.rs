use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use glucose_tracker::config::DEFAULT_CONFIG_PATH;
use glucose_tracker::{events, ui, App, LibreViewSource, Settings, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
    Auto,
}

#[derive(Parser, Debug)]
#[command(name = "glucose-tracker")]
#[command(about = "Terminal dashboard for LibreLinkUp glucose readings")]
struct Args {
    /// Path to the config file with an [API] section (patient_id, token)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Refresh interval in seconds
    #[arg(short, long, default_value = "120", value_parser = clap::value_parser!(u64).range(1..))]
    refresh: u64,

    /// File that log output is appended to
    #[arg(long, default_value = "glucose-tracker.log")]
    log_file: PathBuf,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    theme: ThemeChoice,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_file)?;

    let settings = Settings::load(&args.config)?;
    let refresh = Duration::from_secs(args.refresh);
    info!(
        "Starting for patient {} with {}s refresh",
        settings.api.patient_id, args.refresh
    );

    let source = LibreViewSource::new(&settings.api.patient_id, &settings.api.token)?;
    let theme = match args.theme {
        ThemeChoice::Dark => Theme::dark(),
        ThemeChoice::Light => Theme::light(),
        ThemeChoice::Auto => Theme::auto_detect(),
    };

    run_tui(App::new(Box::new(source), refresh, theme))
}

/// Send tracing output to a file so it never draws over the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the TUI until the user quits
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Glucose Tracker")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    // First cycle is due immediately
    app.start(Instant::now());

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                _ => {}
            }
        }

        // Blocks for the duration of the request when a cycle is due
        app.tick(Instant::now());
    }

    info!("Shutting down");
    Ok(())
}
