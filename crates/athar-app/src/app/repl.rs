use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use athar_chat::{ChatController, IgnoreReason, SubmitOutcome};

use crate::app::setup::connect;
use crate::config::ClientConfig;
use crate::render::{connection_badge, render_header, render_message};

/// What a line typed at the prompt means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Empty,
    Exit,
    Help,
    Status,
    History,
    /// Zero-based index into the pending buttons
    Button(usize),
    /// A number with no matching button
    InvalidButton(usize),
    Text(String),
}

/// Interpret a prompt line. Numbers pick buttons only while some are on offer.
pub fn parse_input(line: &str, pending_buttons: usize) -> ReplInput {
    let input = line.trim();
    match input {
        "" => return ReplInput::Empty,
        "exit" | "quit" => return ReplInput::Exit,
        "/help" => return ReplInput::Help,
        "/status" => return ReplInput::Status,
        "/history" => return ReplInput::History,
        _ => {}
    }

    if pending_buttons > 0 {
        if let Ok(n) = input.parse::<usize>() {
            return if (1..=pending_buttons).contains(&n) {
                ReplInput::Button(n - 1)
            } else {
                ReplInput::InvalidButton(n)
            };
        }
    }
    ReplInput::Text(line.to_string())
}

fn print_help() {
    println!("{}", "Commands:".bright_cyan().bold());
    println!("  {}   show this help", "/help".bright_yellow());
    println!("  {} show backend and connection state", "/status".bright_yellow());
    println!("  {} reprint the whole conversation", "/history".bright_yellow());
    println!("  {} leave", "exit, quit".bright_yellow());
    println!("{}", "Type a number to pick one of the offered options.".bright_black());
    println!();
}

fn print_status(controller: &ChatController, config: &ClientConfig) {
    let session = controller.session();
    println!("{}", connection_badge(session.is_connected()));
    println!(
        "{}",
        format!("Backend: {} ({})", config.base_url, config.environment.as_str()).bright_black()
    );
    match session.current_professor() {
        Some(professor) => println!("Professor: {}", professor.display_name()),
        None => println!("{}", "No professor selected".bright_black()),
    }
    println!("{}", format!("Messages: {}", session.messages().len()).bright_black());
    println!();
}

/// Print bot messages appended since `from`; the user already sees what they typed
pub(crate) fn print_new_messages(controller: &ChatController, from: usize) -> usize {
    let messages = controller.session().messages();
    for message in messages.iter().skip(from) {
        if message.is_bot() {
            println!("{}\n", render_message(message));
        }
    }
    messages.len()
}

/// Run interactive REPL mode
pub async fn run_repl_mode(config: &ClientConfig) -> Result<()> {
    let mut controller = connect(config).await?;

    println!("{}", render_header(controller.session()));
    println!("{}", format!("Backend: {}", config.base_url).bright_black());
    println!("{}", "Type '/help' for commands, 'exit' or 'quit' to leave\n".bright_black());

    let mut shown = print_new_messages(&controller, 0);

    let mut rl = DefaultEditor::new()?;

    loop {
        let prompt = format!("{} ", "You:".bright_green().bold());
        let readline = rl.readline(&prompt);

        match readline {
            Ok(line) => {
                let pending = controller.session().pending_buttons().len();
                let outcome = match parse_input(&line, pending) {
                    ReplInput::Empty => continue,
                    ReplInput::Exit => {
                        println!("{}", "Goodbye!".bright_cyan());
                        break;
                    }
                    ReplInput::Help => {
                        print_help();
                        continue;
                    }
                    ReplInput::Status => {
                        print_status(&controller, config);
                        continue;
                    }
                    ReplInput::History => {
                        println!("{}\n", render_header(controller.session()));
                        for message in controller.session().messages() {
                            println!("{}\n", render_message(message));
                        }
                        continue;
                    }
                    ReplInput::InvalidButton(n) => {
                        println!(
                            "{}",
                            format!("No option {}; choose 1-{}", n, pending).yellow()
                        );
                        continue;
                    }
                    ReplInput::Button(index) => {
                        let button = controller.session().pending_buttons()[index].clone();
                        rl.add_history_entry(line.as_str())?;
                        println!("{}", format!("→ {}", button.label).bright_black());
                        println!("{}", "Athar is typing...".bright_black());
                        controller.select_button(&button.value).await
                    }
                    ReplInput::Text(text) => {
                        rl.add_history_entry(text.as_str())?;
                        controller.session_mut().set_draft(text);
                        println!("{}", "Athar is typing...".bright_black());
                        controller.submit_draft().await
                    }
                };

                match outcome {
                    SubmitOutcome::Ignored(IgnoreReason::Busy) => {
                        println!("{}", "Still waiting for the previous answer".yellow());
                    }
                    SubmitOutcome::Ignored(IgnoreReason::EmptyInput) => {}
                    SubmitOutcome::Completed(result) => {
                        log::debug!("exchange finished: {:?}", result);
                        println!();
                        shown = print_new_messages(&controller, shown);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {:?}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    Ok(())
}
