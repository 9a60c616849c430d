use anyhow::{bail, Result};
use colored::Colorize;

use athar_chat::{ExchangeOutcome, SubmitOutcome};

use crate::app::repl::print_new_messages;
use crate::app::setup::connect;
use crate::config::ClientConfig;
use crate::render::render_header;

/// Run in message mode - send one message, print the answer and exit
pub async fn run_message_mode(config: &ClientConfig, text: &str) -> Result<()> {
    let mut controller = connect(config).await?;
    println!("{}", render_header(controller.session()));
    println!("{}", format!("Message: {}", text.trim()).bright_yellow());
    println!();

    // Skip the greeting; a failed probe's warning is still worth showing
    let shown = print_new_messages(&controller, 1);

    let outcome = controller.submit(text).await;
    print_new_messages(&controller, shown);

    match outcome {
        SubmitOutcome::Completed(ExchangeOutcome::Replied { .. }) => Ok(()),
        SubmitOutcome::Completed(ExchangeOutcome::Failed(failure)) => {
            bail!("exchange failed: {}", failure)
        }
        SubmitOutcome::Completed(ExchangeOutcome::Stale) => bail!("exchange result was discarded"),
        SubmitOutcome::Ignored(reason) => bail!("message not sent: {:?}", reason),
    }
}
