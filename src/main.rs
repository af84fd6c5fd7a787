use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io, path::PathBuf, sync::atomic::Ordering, time::Duration};

/// Terminal client for the Google Maps scraping service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/mapscout-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Scraping service endpoint (overrides config)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Pre-fill the search query
    #[arg(short, long)]
    query: Option<String>,

    /// Pre-fill the result count
    #[arg(short = 'n', long)]
    count: Option<String>,

    /// Run one search with the pre-filled fields, print the results and exit
    #[arg(long)]
    print: bool,
}

mod app;
mod config;
mod handlers;
mod services;
mod ui;

use config::Config;
use mapscout::api::ScrapeClient;
use mapscout::controller::SearchController;
use mapscout::logic::presenter::present;
use mapscout::model::{Phase, UiModel};
use mapscout::utils::DEBUG_MODE;
pub(crate) use mapscout::utils::log_debug;
use ui::theme::Theme;

pub struct App {
    pub controller: SearchController,
    pub ui: UiModel,
    pub theme: Theme,

    scrape_tx: tokio::sync::mpsc::UnboundedSender<services::ScrapeJob>,
    scrape_rx: tokio::sync::mpsc::UnboundedReceiver<services::ScrapeOutcome>,

    open_command: Option<String>,
    export_dir: PathBuf,
    endpoint: String,
}

impl App {
    fn new(config: Config, controller: SearchController) -> Self {
        let client = ScrapeClient::new(config.endpoint.clone());
        let (scrape_tx, scrape_rx) = services::spawn_scrape_service(client);

        let ui = UiModel::new(controller.state().result_count());

        App {
            controller,
            ui,
            theme: Theme::from_config(&config.theme),
            scrape_tx,
            scrape_rx,
            open_command: config.open_command,
            export_dir: PathBuf::from(config.export_dir),
            endpoint: config.endpoint,
        }
    }
}

/// Determine the config file path with fallback logic
///
/// Returns `None` when no config file exists; built-in defaults apply then.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/mapscout/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("mapscout").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration
    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            Config::from_yaml(&fs::read_to_string(&path)?)?
        }
        None => {
            log_debug("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }

    let mut controller = SearchController::new(config.result_count());
    if let Some(query) = args.query {
        controller.set_query(query);
    }
    if let Some(count) = args.count.as_deref() {
        controller.set_result_count(count);
    }

    if args.print {
        return run_once(&config.endpoint, controller).await;
    }

    let mut app = App::new(config, controller);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

/// Headless mode: one search, plain-text output
async fn run_once(endpoint: &str, mut controller: SearchController) -> Result<()> {
    let client = ScrapeClient::new(endpoint.to_string());

    let Some(state) = controller.run_search(&client).await else {
        anyhow::bail!("Nothing to search: pass a non-empty --query");
    };

    println!("{}", present(state).to_plain_text());

    if state.phase() == Phase::Failure {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.ui.should_dismiss_toast() {
            app.ui.dismiss_toast();
        }

        if app.ui.should_quit {
            break;
        }

        // Apply settled searches (non-blocking)
        while let Ok(outcome) = app.scrape_rx.try_recv() {
            handlers::handle_scrape_outcome(app, outcome);
        }

        // Poll faster while loading so the spinner animates
        let poll_timeout = if app.controller.state().is_loading() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(250)
        };

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key)?;
            }
        }
    }

    Ok(())
}
