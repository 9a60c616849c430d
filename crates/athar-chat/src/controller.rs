use std::sync::Arc;

use athar_api::ChatBackend;

use crate::session::{ChatSession, ExchangeOutcome, IgnoreReason};

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was appended and no request was sent
    Ignored(IgnoreReason),
    /// One request was sent and its result applied
    Completed(ExchangeOutcome),
}

/// Drives a [`ChatSession`] against a backend
pub struct ChatController {
    backend: Arc<dyn ChatBackend>,
    session: ChatSession,
}

impl ChatController {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self::with_session(backend, ChatSession::new())
    }

    pub fn with_session(backend: Arc<dyn ChatBackend>, session: ChatSession) -> Self {
        Self { backend, session }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ChatSession {
        &mut self.session
    }

    /// Probe `/health` once; a failure appends a warning. Returns connectivity.
    pub async fn probe_health(&mut self) -> bool {
        let result = self.backend.health().await;
        self.session.record_health(result)
    }

    /// Submit `text` as the user's next message
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        let request = match self.session.begin_exchange(text) {
            Ok(request) => request,
            Err(reason) => {
                log::debug!("submission ignored: {:?}", reason);
                return SubmitOutcome::Ignored(reason);
            }
        };

        let result = self.backend.chat(&request).await;
        SubmitOutcome::Completed(self.session.complete_exchange(result))
    }

    /// Submit whatever is in the input draft
    pub async fn submit_draft(&mut self) -> SubmitOutcome {
        let draft = self.session.draft().to_string();
        self.submit(&draft).await
    }

    /// Choosing a button sends its value as if the user had typed it
    pub async fn select_button(&mut self, value: &str) -> SubmitOutcome {
        self.submit(value).await
    }
}
