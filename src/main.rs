use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{info, warn};

use walletlist::app::{App, AppMessage};
use walletlist::cli::{parse_args, run_cli_command};
use walletlist::error::{ErrorContext, WalletListError};
use walletlist::portfolio::PortfolioSnapshot;
use walletlist::startup::{init_logging, ListConfig};
use walletlist::terminal::{setup_panic_hook, TerminalManager};
use walletlist::ui;

/// Frame tick: momentum, animated scrolls and deferred auto-scrolls advance
/// once per tick.
const TICK_MS: u64 = 16;

fn main() -> Result<()> {
    // Flags are handled before the terminal is touched
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("walletlist: {}\n\n{}", err, walletlist::cli::USAGE);
            std::process::exit(2);
        }
    };
    let Some(options) = run_cli_command(command) else {
        return Ok(());
    };

    color_eyre::install()?;
    setup_panic_hook();
    let log_path = init_logging();

    let config = options.apply(ListConfig::load_default()?.with_env()?);
    info!(?log_path, metrics = %config.metrics, "Starting walletlist");

    let (snapshot, load_error) = match &config.snapshot_path {
        Some(path) => match PortfolioSnapshot::load(path) {
            Ok(snapshot) => (snapshot, None),
            Err(err) => {
                let err = WalletListError::from(err).with_context(
                    ErrorContext::new("load_snapshot").with_component("portfolio"),
                );
                warn!(
                    error_code = err.error_code(),
                    category = %err.category(),
                    context = %err.context_log_string(),
                    "Initial snapshot load failed: {}",
                    err
                );
                (PortfolioSnapshot::default(), Some(err.status_message()))
            }
        },
        None => (PortfolioSnapshot::default(), None),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut app = App::new(config, snapshot);
        if load_error.is_some() {
            app.status = load_error;
        }

        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore();
        info!("walletlist exited");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Owned here so select! can await it alongside the event stream
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(TICK_MS));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        warn!("Terminal event error: {}", err);
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
