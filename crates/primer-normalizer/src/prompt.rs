//! System prompt handling

use primer_domain::{Message, Role};
use serde::{Deserialize, Serialize};

/// Identity prompt for the assistant
pub const ASSISTANT_SYSTEM_PROMPT: &str = "You are a WhatsApp Business Assistant built directly into the WhatsApp Business app. You help business owners use WhatsApp Business features to grow their business.

CRITICAL: ALL your responses must be contextual to WhatsApp Business features and capabilities. Even for general business questions, frame your answers around what users can do within WhatsApp Business.

Your role is to:
1. Help business owners understand and use WhatsApp Business features (catalog, labels, quick replies, greeting messages, away messages, business profile, statistics)
2. Assist with creating and managing advertising campaigns (Native Ads, Click-to-WhatsApp Ads/CTWA)
3. Guide users in creating effective broadcast messages to reach multiple customers
4. Provide guidance on best practices for customer communication on WhatsApp
5. Classify customer intents and suggest appropriate WhatsApp Business responses
6. Offer business development advice specifically using WhatsApp Business features
7. Answer questions about WhatsApp Business policies and capabilities

Proactive WhatsApp Business Suggestions:
- When users mention wanting more customers → Suggest Click-to-WhatsApp ads, sharing WA link, catalog features
- When users want to announce sales/promotions → Recommend broadcast lists and status updates
- When users mention being busy → Suggest quick replies, greeting messages, away messages
- When users want to showcase products → Recommend creating a catalog
- When users need to organize → Suggest using labels and business profile

Always be professional, helpful, and concise. Provide step-by-step instructions when explaining features. Keep every answer focused on WhatsApp Business-specific functionality.";

/// Prompt used for examples converted from help-center articles
pub const ARTICLE_SYSTEM_PROMPT: &str = "You are a helpful WhatsApp Business assistant. Provide accurate information based on official help center articles.";

/// How the leading system message is treated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemPromptPolicy {
    /// Leave system messages as they are
    #[default]
    Keep,
    /// Replace the content of an existing leading system message
    Replace(String),
    /// Remove system messages
    Drop,
    /// Insert a system message when the conversation has none
    Ensure(String),
}

impl SystemPromptPolicy {
    /// Check replacement text is usable
    pub fn validate(&self) -> Result<(), String> {
        match self {
            SystemPromptPolicy::Replace(text) | SystemPromptPolicy::Ensure(text)
                if text.trim().is_empty() =>
            {
                Err("system prompt text must not be blank".to_string())
            }
            _ => Ok(()),
        }
    }

    /// Apply the policy; returns whether the messages changed
    pub fn apply(&self, messages: &mut Vec<Message>) -> Result<bool, String> {
        let leading_system = messages.first().map_or(false, |m| m.role == Role::System);
        match self {
            SystemPromptPolicy::Keep => Ok(false),
            SystemPromptPolicy::Replace(text) => {
                if !leading_system || messages[0].content == *text {
                    return Ok(false);
                }
                messages[0] = Message::system(text.clone())?;
                Ok(true)
            }
            SystemPromptPolicy::Drop => {
                let before = messages.len();
                messages.retain(|m| m.role != Role::System);
                Ok(messages.len() != before)
            }
            SystemPromptPolicy::Ensure(text) => {
                if leading_system {
                    return Ok(false);
                }
                messages.insert(0, Message::system(text.clone())?);
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation(with_system: bool) -> Vec<Message> {
        let mut messages = vec![Message::user("Hi").unwrap(), Message::assistant("Hello").unwrap()];
        if with_system {
            messages.insert(0, Message::system("Old prompt").unwrap());
        }
        messages
    }

    #[test]
    fn test_keep_is_noop() {
        let mut messages = conversation(true);
        assert!(!SystemPromptPolicy::Keep.apply(&mut messages).unwrap());
        assert_eq!(messages[0].content, "Old prompt");
    }

    #[test]
    fn test_replace_only_touches_existing() {
        let policy = SystemPromptPolicy::Replace("New prompt".to_string());

        let mut with = conversation(true);
        assert!(policy.apply(&mut with).unwrap());
        assert_eq!(with[0].content, "New prompt");

        let mut without = conversation(false);
        assert!(!policy.apply(&mut without).unwrap());
        assert_eq!(without.len(), 2);
    }

    #[test]
    fn test_drop_removes_system() {
        let mut messages = conversation(true);
        assert!(SystemPromptPolicy::Drop.apply(&mut messages).unwrap());
        assert!(messages.iter().all(|m| m.role != Role::System));
    }

    #[test]
    fn test_ensure_inserts_once() {
        let policy = SystemPromptPolicy::Ensure(ASSISTANT_SYSTEM_PROMPT.to_string());
        let mut messages = conversation(false);
        assert!(policy.apply(&mut messages).unwrap());
        assert!(!policy.apply(&mut messages).unwrap());
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, Role::System);
    }
}
