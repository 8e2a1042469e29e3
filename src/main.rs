//! Hostwatch: terminal console for single-host telemetry.
//!
//! An external client tool that polls a host-monitoring agent over
//! unauthenticated HTTP GET — the same access level as a browser pointed
//! at the agent. Refreshes are manual or startup-triggered only; there is
//! no polling timer and no push channel.
//!
//! ## Usage
//!
//! ```bash
//! # Connect to a local agent (default)
//! hostwatch
//!
//! # Connect to a remote agent
//! hostwatch --endpoint http://host.example.com:5000
//!
//! # Exercise the UI without an agent
//! hostwatch --demo
//! ```

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use hostwatch::api::demo::DemoApi;
use hostwatch::api::{ApiClient, HostApi};
use hostwatch::ui;
use hostwatch::{App, Section};

/// Hostwatch terminal console
#[derive(Parser, Debug)]
#[command(name = "hostwatch")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host-agent API base URL
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    endpoint: String,

    /// Run with canned data (no agent connection required)
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr; the terminal UI owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let api: Box<dyn HostApi> = if args.demo {
        Box::new(DemoApi)
    } else {
        Box::new(ApiClient::new(&args.endpoint)?)
    };
    let mut app = App::new(api);

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

/// Main application loop: overview first, one full refresh, then every
/// fetch is user-triggered.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    app.select_section(Section::Overview).await;
    app.refresh_all().await;

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                app.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                app.refresh_all().await;
            }
            KeyCode::Char(c) => {
                if let Some(section) = Section::from_hotkey(c) {
                    app.select_section(section).await;
                }
            }
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
