//! Terminal rendering of the conversation

use chrono::{DateTime, Local, Utc};
use colored::Colorize;

use athar_chat::ChatSession;
use athar_types::{Message, Sender};

/// A run of message text, either plain or emphasised with `**...**`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Bold(&'a str),
}

/// Split text on `**` markers. Spans never cross a line break, and an
/// unmatched marker is kept literally.
pub fn split_bold(text: &str) -> Vec<Segment<'_>> {
    text.split_inclusive('\n').flat_map(split_bold_line).collect()
}

fn split_bold_line(text: &str) -> Vec<Segment<'_>> {
    let parts: Vec<&str> = text.split("**").collect();
    let closed = if parts.len() % 2 == 0 {
        parts.len() - 1
    } else {
        parts.len()
    };

    let mut segments = Vec::with_capacity(parts.len());
    for (i, part) in parts[..closed].iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        if i % 2 == 1 {
            segments.push(Segment::Bold(part));
        } else {
            segments.push(Segment::Plain(part));
        }
    }

    if closed < parts.len() {
        // `parts[closed]` follows an opening marker with no partner
        let start = text.len() - parts[closed].len() - 2;
        segments.push(Segment::Plain(&text[start..]));
    }
    segments
}

fn styled_text(text: &str) -> String {
    split_bold(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(s) => s.to_string(),
            Segment::Bold(s) => s.bold().to_string(),
        })
        .collect()
}

/// Local wall-clock `HH:MM`
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}

pub fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "You",
        Sender::Bot => "Athar",
    }
}

pub fn connection_badge(connected: bool) -> String {
    if connected {
        "🟢 Connected".green().to_string()
    } else {
        "🔴 Disconnected".red().to_string()
    }
}

/// Title line with connectivity and the professor under discussion
pub fn render_header(session: &ChatSession) -> String {
    let mut header = format!(
        "{}  {}",
        "🎓 Athar Assistant".bright_cyan().bold(),
        connection_badge(session.is_connected())
    );
    if let Some(professor) = session.current_professor() {
        header.push_str(&format!(
            "  {}",
            format!("Discussing: {}", professor.display_name()).bright_black()
        ));
    }
    header
}

/// One message block: label, time, text and any numbered buttons
pub fn render_message(message: &Message) -> String {
    let label = sender_label(message.sender);
    let label = if message.is_bot() {
        label.bright_blue().bold()
    } else {
        label.bright_green().bold()
    };
    let mut out = format!(
        "{} {}\n{}",
        label,
        format_time(&message.timestamp).bright_black(),
        styled_text(&message.text)
    );

    for (i, button) in message.buttons().iter().enumerate() {
        out.push_str(&format!(
            "\n  {} {}",
            format!("[{}]", i + 1).bright_yellow(),
            button.label
        ));
    }
    out
}
