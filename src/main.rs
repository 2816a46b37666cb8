use std::io::stdout;
use std::sync::mpsc;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use skypick::app::App;
use skypick::config;
use skypick::registry::WidgetRegistry;
use skypick::source::spawn_worker;

/// Interactive Bluesky handle picker
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Pick a Bluesky handle interactively with typeahead suggestions"
)]
struct Args {
    /// Initial query to search right away
    query: Option<String>,

    /// Base URL of the actor-search host
    #[arg(long)]
    host: Option<String>,

    /// Maximum suggestion rows (non-numeric values fall back to the default)
    #[arg(long)]
    rows: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/skypick-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/skypick-debug.log")
            .expect("Failed to open /tmp/skypick-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== SKYPICK DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early, then layer CLI overrides on top
    let config_result = config::load_config();
    let args = Args::parse();

    let mut config = config_result.config;
    if let Some(host) = args.host {
        config.source.host = host;
    }
    if let Some(rows) = &args.rows {
        config.source.override_rows(rows);
    }

    // Registration is explicit and host-driven, never a load-time side effect
    let mut registry = WidgetRegistry::new();
    registry
        .register_default()
        .map_err(skypick::error::SkypickError::from)?;

    let terminal = init_terminal()?;

    let mut app = App::new(&config);
    setup_search_worker(&mut app, &config);

    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }
    if let Some(query) = args.query {
        app.input.textarea.insert_str(&query);
        app.on_query_changed();
    }

    let result = run(terminal, app);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    if let Some(handle) = app.picked() {
        println!("{}", handle);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== SKYPICK DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, mouse capture, and
/// focus-change reporting
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableFocusChange,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        EnableBracketedPaste
    ) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(
                stdout(),
                DisableMouseCapture,
                DisableFocusChange,
                DisableBracketedPaste,
                LeaveAlternateScreen
            );
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableMouseCapture,
        DisableFocusChange,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        // Apply worker replies before rendering
        app.poll_source();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Set up the search worker thread and channels
fn setup_search_worker(app: &mut App, config: &config::Config) {
    let (request_tx, request_rx) = mpsc::channel();
    let (reply_tx, reply_rx) = mpsc::channel();
    app.source.set_channels(request_tx, reply_rx);

    spawn_worker(&config.source.host, request_rx, reply_tx);
}
