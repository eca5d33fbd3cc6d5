use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio_util::sync::CancellationToken;

use bookfind::app::App;
use bookfind::autocomplete::Autocomplete;
use bookfind::config::{self, ConfigResult};
use bookfind::dropdown::{DropdownState, sanitize_for_terminal};
use bookfind::input::InputState;
use bookfind::suggest::{SuggestClient, SuggestState, search_query, spawn_worker};

/// Upper bound on how long the event loop sleeps between worker polls
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Type-ahead book title search
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Suggestion endpoint, e.g. http://127.0.0.1:5000/api/books (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Config file (default: <config dir>/bookfind/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Look up QUERY once, print the suggestions and exit
    #[arg(long, value_name = "QUERY")]
    once: Option<String>,

    /// Print the suggestions as HTML list markup (with --once)
    #[arg(long, requires = "once")]
    html: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_debug_logging();

    let args = Args::parse();

    let ConfigResult { config, warning } = config::load_config(args.config.as_deref());
    let endpoint = config::resolve_endpoint(args.endpoint.as_deref(), &config)?;
    let client = SuggestClient::new(endpoint, Duration::from_millis(config.suggest.timeout_ms))?;

    if let Some(query) = args.once.as_deref() {
        if let Some(warning) = warning {
            eprintln!("bookfind: {}", warning);
        }
        return run_once(&client, query, args.html);
    }

    if let Some(output) = run_interactive(client, warning)? {
        println!("{}", output);
    }
    Ok(())
}

/// Write debug logs to a file in the temp dir so they never corrupt the TUI
#[cfg(debug_assertions)]
fn init_debug_logging() {
    let path = std::env::temp_dir().join("bookfind-debug.log");
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

/// One lookup, printed to stdout
///
/// Short queries print nothing and make no request.
fn run_once(client: &SuggestClient, raw: &str, html: bool) -> Result<()> {
    let Some(query) = search_query(raw) else {
        return Ok(());
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let suggestions =
        runtime.block_on(client.fetch_suggestions(query, &CancellationToken::new()))?;

    let mut dropdown = DropdownState::new();
    dropdown.render(suggestions);

    let mut stdout = io::stdout().lock();
    if html {
        writeln!(stdout, "{}", dropdown.to_markup())?;
    } else {
        for row in dropdown.rows() {
            writeln!(stdout, "{}", sanitize_for_terminal(row.text()))?;
        }
    }
    Ok(())
}

/// Run the TUI; returns the submitted value, if any
fn run_interactive(client: SuggestClient, warning: Option<String>) -> Result<Option<String>> {
    let endpoint_label = client.endpoint().to_string();

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    let worker = spawn_worker(client, request_rx, response_tx);

    let mut suggest = SuggestState::new();
    suggest.set_channels(request_tx, response_rx);
    let autocomplete = Autocomplete::new(InputState::new(), DropdownState::new(), suggest);
    let mut app = App::new(autocomplete, endpoint_label).with_config_warning(warning);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    let _ = execute!(io::stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();
    result?;

    // Dropping the app closes the request channel, which stops the worker
    let output = app.into_output();
    if worker.join().is_err() {
        log::error!("Suggestion worker panicked");
    }
    Ok(output)
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events(POLL_INTERVAL)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
