use std::io::stdout;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use slidedeck::infrastructure::{
    AppConfig, CliArgs, ConfigStore, DeckLoader, PresentationMode, TokioTimer,
    set_mouse_capture,
};
use slidedeck::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let store = ConfigStore::new()?;
    let mut config = store.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = slidedeck::VERSION, "Starting {}", slidedeck::NAME);

    let deck = DeckLoader::load_or_builtin(config.deck.as_deref())?;
    let (timer, timer_rx) = TokioTimer::channel();
    let fullscreen = PresentationMode::stdout(deck.title());
    let app = App::new(&deck, &config, timer, timer_rx, fullscreen);

    let mut terminal = ratatui::init();
    if config.mouse {
        set_mouse_capture(&mut stdout(), true);
    }

    let result = app.run(&mut terminal).await;

    if config.mouse {
        set_mouse_capture(&mut stdout(), false);
    }
    ratatui::restore();

    result
}
