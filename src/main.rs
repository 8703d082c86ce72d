//! waypoint: scroll-synced section navigation for an API reference.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use waypoint::app_state::{AppState, View};
use waypoint::{config, ui};

/// Input poll timeout, which also paces animation ticks.
const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(about = "Scroll-synced navigation for API reference documents", long_about = None)]
struct Args {
    /// Start at a section, e.g. "#chat-completions" (the "#" is optional)
    #[arg(long, value_name = "FRAGMENT")]
    at: Option<String>,

    /// Print the flattened search index as JSON and exit
    #[arg(long)]
    dump_index: bool,

    /// Append tracing output to a file (the TUI owns the terminal)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let cfg = config::Config::load();
    let mut app = match AppState::new(cfg) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("document integrity error: {e}");
            std::process::exit(1);
        }
    };

    if args.dump_index {
        let json = serde_json::to_string_pretty(app.index.entries()).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    if let Some(fragment) = &args.at {
        app.handle_incoming_fragment(fragment, Instant::now());
    }

    run_tui(app)
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_tui(mut app: AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                let now = Instant::now();
                match app.view {
                    View::Browse => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.open_search();
                        }
                        KeyCode::Up => app.scroll_by(-1),
                        KeyCode::Down => app.scroll_by(1),
                        KeyCode::PageUp => app.scroll_by(-app.page()),
                        KeyCode::PageDown => app.scroll_by(app.page()),
                        KeyCode::Home => app.scroll_to_edge(false),
                        KeyCode::End => app.scroll_to_edge(true),
                        KeyCode::Left | KeyCode::Char('p') => app.prev_section(now),
                        KeyCode::Right | KeyCode::Char('n') => app.next_section(now),
                        _ => {}
                    },
                    View::Search => match key.code {
                        KeyCode::Esc => app.close_search(),
                        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.close_search();
                        }
                        KeyCode::Enter => app.choose_selected(now),
                        KeyCode::Up => app.move_selection(false),
                        KeyCode::Down => app.move_selection(true),
                        KeyCode::Backspace => app.pop_query(),
                        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.push_query(c);
                        }
                        _ => {}
                    },
                }
            }
        }

        app.tick(Instant::now());
    }
}
