//! Training example module - the unit persisted to the corpus file

use crate::message::{Message, Role};
use serde::{Deserialize, Serialize};

/// A complete conversation used for instruction tuning
///
/// Invariants (checked by [`TrainingExample::new`]):
/// - system messages only appear before the first user turn
/// - the remaining turns alternate user → assistant → user …, starting with user
/// - at least one user and one assistant message are present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Ordered conversation turns
    pub messages: Vec<Message>,
}

impl TrainingExample {
    /// Create an example, checking the turn-order invariants
    pub fn new(messages: Vec<Message>) -> Result<Self, String> {
        check_turn_order(&messages)?;
        Ok(Self { messages })
    }

    /// Single user question with a single assistant answer
    pub fn pair(user: impl Into<String>, assistant: impl Into<String>) -> Result<Self, String> {
        Self::new(vec![Message::user(user)?, Message::assistant(assistant)?])
    }

    /// A pair preceded by a system prompt
    pub fn with_system(
        system: impl Into<String>,
        user: impl Into<String>,
        assistant: impl Into<String>,
    ) -> Result<Self, String> {
        Self::new(vec![
            Message::system(system)?,
            Message::user(user)?,
            Message::assistant(assistant)?,
        ])
    }

    /// Content of the first user message
    pub fn first_user(&self) -> Option<&str> {
        self.first_of(Role::User)
    }

    /// Content of the first assistant message
    pub fn first_assistant(&self) -> Option<&str> {
        self.first_of(Role::Assistant)
    }

    /// Content of the leading system message, if any
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .first()
            .filter(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
    }

    fn first_of(&self, role: Role) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == role)
            .map(|m| m.content.as_str())
    }
}

/// Check the conversational ordering rules without building an example
pub fn check_turn_order(messages: &[Message]) -> Result<(), String> {
    if messages.is_empty() {
        return Err("conversation has no messages".to_string());
    }

    let mut expected = Role::User;
    let mut seen_user = false;
    let mut seen_assistant = false;

    for (idx, msg) in messages.iter().enumerate() {
        if msg.content.trim().is_empty() {
            return Err(format!("message {} has empty content", idx));
        }
        match msg.role {
            Role::System => {
                if seen_user {
                    return Err(format!(
                        "system message at position {} appears after the conversation started",
                        idx
                    ));
                }
            }
            role if role == expected => {
                if role == Role::User {
                    seen_user = true;
                    expected = Role::Assistant;
                } else {
                    seen_assistant = true;
                    expected = Role::User;
                }
            }
            role => {
                return Err(format!(
                    "expected {} message at position {}, found {}",
                    expected, idx, role
                ));
            }
        }
    }

    if !seen_user {
        return Err("conversation has no user message".to_string());
    }
    if !seen_assistant {
        return Err("conversation has no assistant message".to_string());
    }
    Ok(())
}

/// A training example tagged with the category it was produced for
///
/// The tag lives only during composition; normalization discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedExample {
    /// The conversation itself
    pub example: TrainingExample,

    /// Originating category (question category, curated set name, or source name)
    pub category: String,
}

impl TaggedExample {
    /// Tag an example with a category
    pub fn new(example: TrainingExample, category: impl Into<String>) -> Self {
        Self {
            example,
            category: category.into(),
        }
    }
}
