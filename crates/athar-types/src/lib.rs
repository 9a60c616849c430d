//! Core types for the Athar Assistant client
//!
//! Wire formats of the chat backend and the message log shared by every
//! other athar crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Canned Texts
// ============================================================================

/// Bot greeting every session starts with
pub const SEED_GREETING: &str = "Hello! I'm Athar Assistant, your university chatbot. I can help you find information about professors, courses, and more. How can I assist you today?";

/// Bot message appended when the startup health probe fails
pub const HEALTH_WARNING: &str = "⚠️ Warning: I'm having trouble connecting to the server. Some features may not work properly.";

/// Text of the bot message that carries a reply's buttons
pub const BUTTONS_PROMPT: &str = "Please select one of the following options:";

// ============================================================================
// Message Types
// ============================================================================

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Session-unique message ordinal, strictly increasing in append order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

/// One entry of the chat log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub buttons: Option<Vec<Button>>,
}

impl Message {
    pub fn new(id: MessageId, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
            buttons: None,
        }
    }

    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self::new(id, Sender::User, text)
    }

    pub fn bot(id: MessageId, text: impl Into<String>) -> Self {
        Self::new(id, Sender::Bot, text)
    }

    /// Attach selectable buttons; an empty list leaves the message without any
    pub fn with_buttons(mut self, buttons: Vec<Button>) -> Self {
        self.buttons = if buttons.is_empty() { None } else { Some(buttons) };
        self
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    pub fn buttons(&self) -> &[Button] {
        self.buttons.as_deref().unwrap_or(&[])
    }
}

// ============================================================================
// Buttons
// ============================================================================

/// A selectable option offered by the backend
///
/// The backend may send either `{"label": ..., "value": ...}` objects or bare
/// strings; a bare string is used as both label and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ButtonRepr")]
pub struct Button {
    pub label: String,
    pub value: String,
}

impl Button {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ButtonRepr {
    Labeled {
        label: String,
        #[serde(default)]
        value: Option<String>,
    },
    Bare(String),
}

impl From<ButtonRepr> for Button {
    fn from(repr: ButtonRepr) -> Self {
        match repr {
            ButtonRepr::Labeled { label, value } => {
                let value = value.unwrap_or_else(|| label.clone());
                Button { label, value }
            }
            ButtonRepr::Bare(text) => Button {
                label: text.clone(),
                value: text,
            },
        }
    }
}

// ============================================================================
// Conversation Context
// ============================================================================

/// The professor the conversation is currently about
///
/// Opaque to the client: whatever JSON the backend returns is echoed back
/// unchanged on the next request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Professor(Value);

impl Professor {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// False for values that carry no professor: null, false, 0 or ""
    pub fn is_present(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Human-readable name for status lines
    pub fn display_name(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            Value::Object(map) => map
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| self.0.to_string()),
            other => other.to_string(),
        }
    }
}

impl From<&str> for Professor {
    fn from(s: &str) -> Self {
        Self(Value::String(s.to_string()))
    }
}

impl From<String> for Professor {
    fn from(s: String) -> Self {
        Self(Value::String(s))
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Always serialized; `null` when no professor is tracked
    pub current_professor: Option<Professor>,
}

/// Successful reply of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub professor: Option<Professor>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub buttons: Option<Vec<Button>>,
}

impl ChatReply {
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            professor: None,
            buttons: None,
        }
    }

    pub fn with_professor(mut self, professor: impl Into<Professor>) -> Self {
        self.professor = Some(professor.into());
        self
    }

    pub fn with_buttons(mut self, buttons: Vec<Button>) -> Self {
        self.buttons = Some(buttons);
        self
    }
}

/// Error payload a non-2xx response may carry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
}

impl ErrorBody {
    /// Parse a response body, yielding an empty payload for anything unparseable
    pub fn parse_lenient(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// The error text, if the payload carries a non-empty one
    pub fn message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_chat_request_serializes_null_professor() {
        let request = ChatRequest {
            message: "hello".to_string(),
            current_professor: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"message": "hello", "current_professor": null}));
    }

    #[test]
    fn test_chat_request_echoes_object_professor() {
        let professor = Professor::new(json!({"name": "Dr. Ahmed", "email": "a@htu.edu.jo"}));
        let request = ChatRequest {
            message: "email?".to_string(),
            current_professor: Some(professor),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["current_professor"]["email"], "a@htu.edu.jo");
    }

    #[test]
    fn test_reply_with_labeled_buttons() {
        let reply: ChatReply = serde_json::from_value(json!({
            "response": "Choose an option",
            "buttons": [{"label": "Office hours", "value": "office_hours"}]
        }))
        .unwrap();
        assert_eq!(reply.buttons, Some(vec![Button::new("Office hours", "office_hours")]));
        assert!(reply.professor.is_none());
    }

    #[test]
    fn test_reply_with_bare_string_buttons() {
        let reply: ChatReply = serde_json::from_value(json!({
            "response": "Which one?",
            "buttons": ["Find a Course", "Find a Professor"]
        }))
        .unwrap();
        let buttons = reply.buttons.unwrap();
        assert_eq!(buttons[0], Button::new("Find a Course", "Find a Course"));
        assert_eq!(buttons[1].value, "Find a Professor");
    }

    #[test]
    fn test_button_without_value_uses_label() {
        let button: Button = serde_json::from_value(json!({"label": "Email"})).unwrap();
        assert_eq!(button.value, "Email");
    }

    #[test]
    fn test_reply_null_professor_is_absent() {
        let reply: ChatReply =
            serde_json::from_value(json!({"response": "ok", "professor": null})).unwrap();
        assert!(reply.professor.is_none());
    }

    #[test]
    fn test_professor_display_name() {
        assert_eq!(Professor::from("dr-smith").display_name(), "dr-smith");
        assert_eq!(
            Professor::new(json!({"name": "Dr. Lina", "office": "S-201"})).display_name(),
            "Dr. Lina"
        );
        assert_eq!(Professor::new(json!(42)).display_name(), "42");
    }

    #[test]
    fn test_error_body_message() {
        assert_eq!(
            ErrorBody::parse_lenient(r#"{"error": "quota exceeded"}"#).message(),
            Some("quota exceeded".to_string())
        );
        assert_eq!(ErrorBody::parse_lenient(r#"{"error": ""}"#).message(), None);
        assert_eq!(ErrorBody::parse_lenient("<html>Bad Gateway</html>").message(), None);
        assert_eq!(
            ErrorBody::parse_lenient(r#"{"error": {"code": 7}}"#).message(),
            Some(r#"{"code":7}"#.to_string())
        );
    }

    #[test]
    fn test_professor_presence() {
        assert!(Professor::from("dr-smith").is_present());
        assert!(Professor::new(json!({"name": "Dr. Lina"})).is_present());
        assert!(!Professor::from("").is_present());
        assert!(!Professor::new(json!(0)).is_present());
        assert!(!Professor::new(Value::Null).is_present());
    }

    #[test]
    fn test_message_sender_helpers() {
        assert!(Message::bot(MessageId(1), "hello").is_bot());
        assert!(!Message::user(MessageId(2), "hi").is_bot());
    }

    #[test]
    fn test_message_with_empty_buttons_has_none() {
        let message = Message::bot(MessageId(3), "pick").with_buttons(vec![]);
        assert!(message.buttons.is_none());
        assert!(message.buttons().is_empty());
    }

    #[test]
    fn test_message_serialization_shape() {
        let message = Message::user(MessageId(2), "hi");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["sender"], "user");
        assert!(value.get("buttons").is_none());
    }
}
