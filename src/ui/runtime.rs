use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetcher::{fetch_channel, run_fetcher};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::time::Duration;
use tracing::info;

/// Run the browser until the user quits.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("catalog-fetch")
        .build()
        .context("failed to start async runtime")?;
    let client = CatalogClient::new(&config.catalog)?;
    info!(base_url = client.base_url(), "starting catalog browser");

    let shutdown = ShutdownHandle::new();
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(tick_rate, shutdown.clone())?;
    let (fetch_tx, fetch_rx) = fetch_channel();
    runtime.spawn(run_fetcher(client, fetch_rx, events.sender(), shutdown.clone()));

    let mut app = App::new(&config.ui, fetch_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Fetched(outcome)) => app.on_fetch(outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    info!("catalog browser stopped");
    Ok(())
}
