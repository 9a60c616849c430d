use anyhow::Result;
use std::sync::Arc;

use athar_api::HttpChatBackend;
use athar_chat::ChatController;

use crate::cli::Cli;
use crate::config::ClientConfig;

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::resolve(cli.api_url.as_deref(), cli.environment.as_deref())?;
    config.verbose = cli.verbose;
    config.health_check = !cli.skip_health_check;

    log::info!(
        "using {} backend at {}",
        config.environment.as_str(),
        config.base_url
    );
    Ok(config)
}

/// Install the global logger. `RUST_LOG` wins; otherwise errors only so
/// failures already shown as bot messages are not repeated on stderr.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,athar=debug,athar_api=debug,athar_chat=debug,athar_logging=debug"
    } else {
        "error"
    };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}

/// Build a controller for the configured backend, probing health unless disabled
pub async fn connect(config: &ClientConfig) -> Result<ChatController> {
    let backend = HttpChatBackend::new(&config.base_url)?.verbose(config.verbose);
    let mut controller = ChatController::new(Arc::new(backend));

    if config.health_check {
        let healthy = controller.probe_health().await;
        log::debug!("startup health probe: healthy={}", healthy);
    }
    Ok(controller)
}
