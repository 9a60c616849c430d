use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use athar_api::{ApiError, ChatBackend};
use athar_types::{ChatReply, ChatRequest, Message, Sender};

/// Backend that replays scripted results and records every request
#[derive(Default)]
pub struct ScriptedBackend {
    health: Mutex<Option<Result<(), ApiError>>>,
    replies: Mutex<VecDeque<Result<ChatReply, ApiError>>>,
    requests: Mutex<Vec<ChatRequest>>,
    health_calls: Mutex<usize>,
}

impl ScriptedBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_health(self: Arc<Self>, result: Result<(), ApiError>) -> Arc<Self> {
        *self.health.lock().unwrap() = Some(result);
        self
    }

    pub fn push_reply(&self, reply: ChatReply) {
        self.replies.lock().unwrap().push_back(Ok(reply));
    }

    pub fn push_error(&self, err: ApiError) {
        self.replies.lock().unwrap().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn health_calls(&self) -> usize {
        *self.health_calls.lock().unwrap()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn health(&self) -> Result<(), ApiError> {
        *self.health_calls.lock().unwrap() += 1;
        self.health.lock().unwrap().clone().unwrap_or(Ok(()))
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_string())))
    }
}

/// (sender, text) pairs of a message log
pub fn transcript(messages: &[Message]) -> Vec<(Sender, String)> {
    messages.iter().map(|m| (m.sender, m.text.clone())).collect()
}
