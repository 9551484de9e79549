//! folio: portfolio server entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Resolve effective log level (CLI `-v` flags > env > config)
//!   4. Init logger once
//!   5. Build provider, persona and assistant
//!   6. Spawn Ctrl-C → shutdown signal watcher
//!   7. Spawn connectivity probe (unless disabled)
//!   8. Run the site server, or the console chat with `chat`

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::info;

use folio::chat::{Assistant, ChatController, Connectivity, Fallbacks};
use folio::content::Catalog;
use folio::error::AppError;
use folio::persona::Persona;
use folio::site::SiteState;
use folio::{config, console, llm, logger, site};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Serve,
    Chat,
}

struct CliArgs {
    mode: Mode,
    log_level: Option<&'static str>,
    config_path: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Optional file.
    let _ = dotenvy::dotenv();

    let args = parse_cli_args();

    let config = config::load(args.config_path.as_deref())?;

    let effective_log_level = args.log_level.unwrap_or(config.log_level.as_str());
    logger::init(effective_log_level, args.log_level.is_some())?;

    info!(
        mode = ?args.mode,
        provider = %config.llm.provider,
        model = %config.llm.gemini.model,
        api_key_set = config.llm_api_key.is_some(),
        effective_log_level = %effective_log_level,
        "config loaded"
    );

    let provider = llm::providers::build(&config.llm, config.llm_api_key.clone())?;
    let catalog = Catalog::site();
    let persona = Persona::load(&config.chat.persona_file, &catalog);
    let assistant = Arc::new(Assistant::new(
        provider.clone(),
        persona,
        config.chat.temperature,
        Fallbacks::site(),
    ));
    let connectivity = Connectivity::online();

    // Ctrl-C cancels the token; every task watches it.
    let shutdown = CancellationToken::new();
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received: initiating shutdown");
            ctrlc_token.cancel();
        }
    });

    let probe = (config.chat.probe_interval_seconds > 0).then(|| {
        connectivity.spawn_probe(
            provider,
            Duration::from_secs(config.chat.probe_interval_seconds),
            shutdown.clone(),
        )
    });

    let result = match args.mode {
        Mode::Serve => {
            let state = SiteState::new(assistant, connectivity, catalog);
            site::serve(&config.server.bind, state, shutdown.clone()).await
        }
        Mode::Chat => {
            let controller = Arc::new(ChatController::new(assistant, connectivity));
            console::run(controller, shutdown.clone()).await
        }
    };

    shutdown.cancel();
    if let Some(handle) = probe {
        let _ = handle.await;
    }
    info!("shutdown complete");
    result
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut mode = Mode::Serve;
    let mut config_path = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: folio [serve|chat] [OPTIONS]");
                println!();
                println!("Commands:");
                println!("  serve                      Serve the site and chat API (default)");
                println!("  chat                       Chat with the agent on the console");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -f, --config <PATH>        Path to configuration file (default: config/default.toml)");
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "serve" => mode = Mode::Serve,
            "chat" => mode = Mode::Chat,
            "-f" | "--config" => {
                if let Some(path) = iter.next() {
                    config_path = Some(path);
                } else {
                    eprintln!("error: -f/--config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--verbose" => verbosity = verbosity.saturating_add(1),
            other => match logger::verbose_flag_count(other) {
                Some(n) => verbosity = verbosity.saturating_add(n),
                None => {
                    eprintln!("error: unknown argument '{other}' (see --help)");
                    std::process::exit(1);
                }
            },
        }
    }

    let log_level = logger::level_for_verbosity(verbosity);

    CliArgs { mode, log_level, config_path }
}
