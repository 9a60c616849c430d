use anyhow::Result;
use clap::Parser;

use athar::app::{init_logging, run_message_mode, run_repl_mode, setup_from_cli};
use athar::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so ATHAR_* values there reach clap
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = setup_from_cli(&cli)?;

    if let Some(text) = cli.message.as_deref() {
        return run_message_mode(&config, text).await;
    }

    run_repl_mode(&config).await
}
