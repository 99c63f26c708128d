//! Message module - a single conversational turn

use serde::{Deserialize, Serialize};
use std::fmt;

/// Speaker of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the conversation
    System,

    /// The person asking
    User,

    /// The assistant answering
    Assistant,
}

impl Role {
    /// Get the role name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Parse a role from its exact lowercase name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "system" => Some(Role::System),
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid role: {}", s))
    }
}

/// One turn of a conversation
///
/// Content is never empty; use [`Message::new`] to enforce that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who is speaking
    pub role: Role,

    /// What was said
    pub content: String,
}

impl Message {
    /// Create a message, rejecting blank content
    pub fn new(role: Role, content: impl Into<String>) -> Result<Self, String> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(format!("{} message has empty content", role));
        }
        Ok(Self { role, content })
    }

    /// Shorthand for a system message
    pub fn system(content: impl Into<String>) -> Result<Self, String> {
        Self::new(Role::System, content)
    }

    /// Shorthand for a user message
    pub fn user(content: impl Into<String>) -> Result<Self, String> {
        Self::new(Role::User, content)
    }

    /// Shorthand for an assistant message
    pub fn assistant(content: impl Into<String>) -> Result<Self, String> {
        Self::new(Role::Assistant, content)
    }
}
