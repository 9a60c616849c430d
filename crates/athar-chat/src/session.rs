use athar_api::ApiError;
use athar_types::{
    Button, ChatReply, ChatRequest, Message, MessageId, Professor, Sender, BUTTONS_PROMPT,
    HEALTH_WARNING, SEED_GREETING,
};

use crate::errors::ExchangeError;

/// Per-session exchange state; `InFlight` is the loading flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    Idle,
    InFlight,
}

/// Why a submission was not started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The text was empty after trimming
    EmptyInput,
    /// Another exchange is still in flight
    Busy,
}

/// What completing an exchange did to the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// A reply was appended, followed by a buttons message when `buttons > 0`
    Replied { buttons: usize },
    /// An error message was appended
    Failed(ExchangeError),
    /// No exchange was in flight; nothing changed
    Stale,
}

/// State of one chat session
///
/// The message log is append-only: messages are never edited, reordered or
/// removed once pushed.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    draft: String,
    state: ExchangeState,
    connected: bool,
    current_professor: Option<Professor>,
    next_id: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// A fresh session holding only the bot greeting
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            draft: String::new(),
            state: ExchangeState::Idle,
            connected: true,
            current_professor: None,
            next_id: 1,
        };
        session.push(Sender::Bot, SEED_GREETING, Vec::new());
        session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Buttons offered by the most recent message, if it offers any
    pub fn pending_buttons(&self) -> &[Button] {
        self.messages.last().map(Message::buttons).unwrap_or(&[])
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn state(&self) -> ExchangeState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == ExchangeState::InFlight
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn current_professor(&self) -> Option<&Professor> {
        self.current_professor.as_ref()
    }

    /// Would `text` start an exchange right now?
    pub fn check_submit(&self, text: &str) -> Result<(), IgnoreReason> {
        if text.trim().is_empty() {
            return Err(IgnoreReason::EmptyInput);
        }
        if self.is_loading() {
            return Err(IgnoreReason::Busy);
        }
        Ok(())
    }

    /// Start an exchange: log the user message and build the request
    ///
    /// On `Err` the session is untouched.
    pub fn begin_exchange(&mut self, text: &str) -> Result<ChatRequest, IgnoreReason> {
        self.check_submit(text)?;

        self.push(Sender::User, text, Vec::new());
        self.draft.clear();
        self.state = ExchangeState::InFlight;

        Ok(ChatRequest {
            message: text.to_string(),
            current_professor: self.current_professor.clone(),
        })
    }

    /// Finish the in-flight exchange with the backend's result
    pub fn complete_exchange(&mut self, result: Result<ChatReply, ApiError>) -> ExchangeOutcome {
        if self.state != ExchangeState::InFlight {
            log::warn!("ignoring exchange result with no exchange in flight");
            return ExchangeOutcome::Stale;
        }

        let outcome = match result {
            Ok(reply) => self.apply_reply(reply),
            Err(err) => {
                let failure = ExchangeError::classify(&err);
                log::warn!("exchange failed ({}): {}", failure, err);
                self.push(Sender::Bot, failure.user_message(), Vec::new());
                if failure.clears_connectivity() {
                    self.connected = false;
                }
                ExchangeOutcome::Failed(failure)
            }
        };

        self.state = ExchangeState::Idle;
        outcome
    }

    /// Record the startup health probe
    pub fn record_health(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => self.connected = true,
            Err(err) => {
                log::warn!("health check failed: {}", err);
                self.connected = false;
                self.push(Sender::Bot, HEALTH_WARNING, Vec::new());
            }
        }
        self.connected
    }

    fn apply_reply(&mut self, reply: ChatReply) -> ExchangeOutcome {
        log::debug!("reply received ({} chars)", reply.response.len());
        self.push(Sender::Bot, reply.response, Vec::new());

        // An empty professor value leaves the tracked one in place
        if let Some(professor) = reply.professor.filter(Professor::is_present) {
            log::debug!("tracking professor {}", professor.display_name());
            self.current_professor = Some(professor);
        }

        let buttons = reply.buttons.unwrap_or_default();
        let count = buttons.len();
        if count > 0 {
            self.push(Sender::Bot, BUTTONS_PROMPT, buttons);
        }

        ExchangeOutcome::Replied { buttons: count }
    }

    fn push(&mut self, sender: Sender, text: impl Into<String>, buttons: Vec<Button>) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(Message::new(id, sender, text).with_buttons(buttons));
        id
    }
}
