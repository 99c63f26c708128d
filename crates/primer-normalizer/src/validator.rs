//! Record validation: raw JSON line → checked conversation

use crate::NormalizeError;
use primer_domain::{Message, Role, TrainingExample};
use serde_json::{Map, Value};
use std::fmt;

/// Reasons a record is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// The line is not valid JSON
    InvalidJson(String),

    /// The record is not a JSON object
    NotAnObject,

    /// No `messages` field
    MissingMessages,

    /// `messages` is not an array
    MessagesNotArray,

    /// `messages` is an empty array
    EmptyMessages,

    /// A message is not an object or lacks string `role` / `content`
    MalformedMessage {
        /// Position in the messages array
        index: usize,
        /// Description of the issue
        issue: String,
    },

    /// A message role outside system/user/assistant
    UnknownRole {
        /// Position in the messages array
        index: usize,
        /// The role as found
        role: String,
    },

    /// A message with blank content
    EmptyContent {
        /// Position in the messages array
        index: usize,
    },

    /// The turns do not form a valid conversation
    Conversation(String),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::InvalidJson(e) => write!(f, "invalid JSON ({})", e),
            RejectionReason::NotAnObject => write!(f, "record is not a JSON object"),
            RejectionReason::MissingMessages => write!(f, "missing 'messages'"),
            RejectionReason::MessagesNotArray => write!(f, "'messages' is not an array"),
            RejectionReason::EmptyMessages => write!(f, "'messages' is empty"),
            RejectionReason::MalformedMessage { index, issue } => {
                write!(f, "message {} is malformed: {}", index, issue)
            }
            RejectionReason::UnknownRole { index, role } => {
                write!(f, "message {} has unknown role '{}'", index, role)
            }
            RejectionReason::EmptyContent { index } => {
                write!(f, "message {} has empty content", index)
            }
            RejectionReason::Conversation(issue) => write!(f, "{}", issue),
        }
    }
}

/// A record that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    /// The checked conversation
    pub example: TrainingExample,

    /// Top-level fields other than `messages`
    pub extra: Map<String, Value>,
}

/// Parse and validate one JSONL line
pub fn parse_record(raw: &str, line: usize) -> Result<ParsedRecord, NormalizeError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| reject(line, RejectionReason::InvalidJson(e.to_string())))?;
    validate_value(value, line)
}

/// Validate an already-parsed record
pub fn validate_value(value: Value, line: usize) -> Result<ParsedRecord, NormalizeError> {
    let mut object = match value {
        Value::Object(object) => object,
        _ => return Err(reject(line, RejectionReason::NotAnObject)),
    };

    let raw_messages = match object.remove("messages") {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(reject(line, RejectionReason::MessagesNotArray)),
        None => return Err(reject(line, RejectionReason::MissingMessages)),
    };
    if raw_messages.is_empty() {
        return Err(reject(line, RejectionReason::EmptyMessages));
    }

    let messages = raw_messages
        .iter()
        .enumerate()
        .map(|(index, item)| validate_message(item, index))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|reason| reject(line, reason))?;

    let example = TrainingExample::new(messages)
        .map_err(|issue| reject(line, RejectionReason::Conversation(issue)))?;

    Ok(ParsedRecord {
        example,
        extra: object,
    })
}

fn validate_message(item: &Value, index: usize) -> Result<Message, RejectionReason> {
    let malformed = |issue: &str| RejectionReason::MalformedMessage {
        index,
        issue: issue.to_string(),
    };

    let object = item.as_object().ok_or_else(|| malformed("not an object"))?;
    let role = match object.get("role") {
        Some(Value::String(role)) => role,
        Some(_) => return Err(malformed("'role' is not a string")),
        None => return Err(malformed("missing 'role'")),
    };
    let content = match object.get("content") {
        Some(Value::String(content)) => content,
        Some(_) => return Err(malformed("'content' is not a string")),
        None => return Err(malformed("missing 'content'")),
    };

    let role = Role::parse(role).ok_or_else(|| RejectionReason::UnknownRole {
        index,
        role: role.clone(),
    })?;
    if content.trim().is_empty() {
        return Err(RejectionReason::EmptyContent { index });
    }
    Message::new(role, content.clone()).map_err(|_| RejectionReason::EmptyContent { index })
}

fn reject(line: usize, reason: RejectionReason) -> NormalizeError {
    NormalizeError::Validation { line, reason }
}
