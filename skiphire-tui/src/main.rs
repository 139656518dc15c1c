//! Terminal UI for the skip selection step of the skiphire booking flow.

mod app;
mod cli;
mod input;
mod navigation;
mod theme;
mod ui;

use std::{
    io::{self, Write as _},
    path::PathBuf,
    sync::Arc,
    time::Duration as StdDuration,
};

use anyhow::{Context as _, Result, anyhow};
use clap::Parser;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use skiphire_core::{
    model::{CatalogQuery, SkipOffering},
    ports::{CatalogPort, NavigationSignal, PortError},
    pricing::total_price,
    screen::SkipSelectionScreen,
};
use skiphire_provider_fixture as fixture;
use skiphire_provider_http as http;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{App, Outcome};
use crate::cli::{Args, Source};
use crate::input::Action;
use crate::navigation::ChannelNavigator;

type CatalogResult = Result<Vec<SkipOffering>, PortError>;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = initialize_logging()?;
    info!(?args, "starting skiphire");

    // Catalog source setup
    let catalog: Arc<dyn CatalogPort> = match args.source {
        Source::Fixture => fixture::catalog_port(StdDuration::from_millis(args.delay_ms)),
        Source::Http => {
            let base_url = args
                .api_url
                .clone()
                .context("--api-url is required with --source http")?;
            let client = Client::builder().user_agent("skiphire/0.1").build()?;
            http::catalog_port(client, base_url)
        }
    };

    // App state
    let (navigator, nav_rx) = ChannelNavigator::new();
    let screen = SkipSelectionScreen::new(Arc::new(navigator));
    let query = CatalogQuery::new(args.postcode.clone(), args.area.clone());
    let app = App::new(screen, query, args.theme);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app, catalog, nav_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    report(&res?)
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    catalog: Arc<dyn CatalogPort>,
    mut nav_rx: UnboundedReceiver<NavigationSignal>,
) -> Result<Outcome> {
    let (load_tx, mut load_rx) = unbounded_channel();
    spawn_load(&catalog, &app.query, &load_tx);

    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        if let Ok(result) = load_rx.try_recv() {
            app.screen.complete_load(result);
            app.clamp_cursor();
        }

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))? {
            if let CEvent::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match input::handle_key_event(key, &mut app) {
                    Action::Quit => return Ok(Outcome::Quit),
                    Action::None => {}
                    Action::Retry => {
                        app.screen.restart_loading();
                        app.cursor = 0;
                        spawn_load(&catalog, &app.query, &load_tx);
                    }
                }
            }
        } else {
            app.on_tick();
        }

        if let Ok(signal) = nav_rx.try_recv() {
            return match signal {
                NavigationSignal::Advance(id) => app
                    .screen
                    .offerings()
                    .iter()
                    .find(|offering| offering.id == id)
                    .cloned()
                    .map(Outcome::Advanced)
                    .ok_or_else(|| anyhow!("selected skip {id} is not in the catalog")),
                NavigationSignal::Back => Ok(Outcome::Back),
            };
        }
    }
}

/// Fetch the catalog off the event loop and post the result back.
fn spawn_load(
    catalog: &Arc<dyn CatalogPort>,
    query: &CatalogQuery,
    tx: &UnboundedSender<CatalogResult>,
) {
    let catalog = Arc::clone(catalog);
    let query = query.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = catalog.offerings(&query).await;
        if tx.send(result).is_err() {
            warn!("catalog result dropped, event loop is gone");
        }
    });
}

/// Hand the outcome to the next step of the flow.
fn report(outcome: &Outcome) -> Result<()> {
    let mut out = io::stdout().lock();
    match outcome {
        Outcome::Advanced(offering) => {
            info!(id = %offering.id, "advancing to permit check");
            writeln!(
                out,
                "Selected {} (id {}): £{} inc. VAT, {} day hire. Next step: permit check.",
                offering.title(),
                offering.id,
                total_price(offering),
                offering.hire_period_days
            )?;
        }
        Outcome::Back => {
            info!("returning to waste type");
            writeln!(out, "Returned to the previous step: waste type.")?;
        }
        Outcome::Quit => info!("quit without choosing a skip"),
    }
    Ok(())
}

fn initialize_logging() -> Result<WorkerGuard> {
    let directory = dirs::data_local_dir().map_or_else(
        || PathBuf::from("logs"),
        |path| path.join("skiphire").join("logs"),
    );
    std::fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::daily(&directory, "skiphire.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    Ok(guard)
}
