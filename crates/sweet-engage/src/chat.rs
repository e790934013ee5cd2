//! Scripted chat widget logic.
//!
//! The chat has no intelligence: an ordered keyword table maps
//! visitor messages to canned replies, with a fallback for everything
//! else.

use serde::{Deserialize, Serialize};

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    Visitor,
    Bot,
}

/// A single message in the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Who sent it.
    pub sender: Sender,
    /// Message text.
    pub text: String,
}

/// Append-only in-memory chat log, discarded with the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a visitor message.
    pub fn record_visitor(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            sender: Sender::Visitor,
            text: text.into(),
        });
    }

    /// Append a bot reply.
    pub fn record_bot(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text: text.into(),
        });
    }

    /// Messages in the order they were sent.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// One keyword-to-reply rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct ChatRule {
    /// Lowercase keyword matched as a substring of the message.
    keyword: String,
    /// Canned reply.
    reply: String,
}

/// Keyword-matched canned-reply responder.
///
/// Rules are checked in insertion order and the first keyword found
/// as a substring of the (lowercased) message wins. Messages that
/// match no rule get the fallback reply.
///
/// # Example
///
/// ```
/// use sweet_engage::chat::ChatResponder;
///
/// let responder = ChatResponder::new("Sorry, could you rephrase that?")
///     .with_rule("price", "Prices vary by product; see the menu.")
///     .with_rule("delivery", "We deliver within 3 to 7 business days.");
///
/// assert_eq!(
///     responder.reply_to("What about DELIVERY times?"),
///     Some("We deliver within 3 to 7 business days."),
/// );
/// assert_eq!(responder.reply_to("   "), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponder {
    rules: Vec<ChatRule>,
    fallback: String,
}

impl ChatResponder {
    /// Create a responder with only a fallback reply.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Append a keyword rule. The keyword is stored lowercase;
    /// matching is case-insensitive on the message side.
    pub fn with_rule(mut self, keyword: impl Into<String>, reply: impl Into<String>) -> Self {
        self.rules.push(ChatRule {
            keyword: keyword.into().to_lowercase(),
            reply: reply.into(),
        });
        self
    }

    /// The reply the fallback rule produces.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Reply to a visitor message.
    ///
    /// Returns `None` for blank messages (the widget ignores empty
    /// sends). Otherwise returns the reply of the first rule whose
    /// keyword occurs in the message, or the fallback.
    pub fn reply_to(&self, message: &str) -> Option<&str> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        let lowered = message.to_lowercase();
        let reply = self
            .rules
            .iter()
            .find(|rule| lowered.contains(&rule.keyword))
            .map(|rule| rule.reply.as_str())
            .unwrap_or(&self.fallback);
        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> ChatResponder {
        ChatResponder::new("Desculpe, n\u{e3}o entendi. Pode reformular sua pergunta?")
            .with_rule("oi", "Ol\u{e1}! Como posso ajud\u{e1}-lo?")
            .with_rule("pre\u{e7}o", "Nossos pre\u{e7}os variam conforme o produto.")
            .with_rule("entrega", "Fazemos entregas em 3 a 7 dias \u{fa}teis.")
    }

    #[test]
    fn test_keyword_match() {
        let responder = responder();
        assert_eq!(
            responder.reply_to("qual o pre\u{e7}o do brigadeiro?"),
            Some("Nossos pre\u{e7}os variam conforme o produto.")
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let responder = responder();
        assert_eq!(
            responder.reply_to("ENTREGA para amanh\u{e3}?"),
            Some("Fazemos entregas em 3 a 7 dias \u{fa}teis.")
        );
    }

    #[test]
    fn test_first_rule_wins() {
        // "oi" appears before "entrega" in the table, and the message
        // contains both keywords.
        let responder = responder();
        assert_eq!(
            responder.reply_to("oi, a entrega chegou?"),
            Some("Ol\u{e1}! Como posso ajud\u{e1}-lo?")
        );
    }

    #[test]
    fn test_fallback_reply() {
        let responder = responder();
        assert_eq!(
            responder.reply_to("vendem p\u{e3}o de queijo?"),
            Some(responder.fallback())
        );
    }

    #[test]
    fn test_blank_message_ignored() {
        let responder = responder();
        assert_eq!(responder.reply_to(""), None);
        assert_eq!(responder.reply_to("   "), None);
    }

    #[test]
    fn test_transcript_records_in_order() {
        let responder = responder();
        let mut transcript = ChatTranscript::new();

        transcript.record_visitor("oi");
        let reply = responder.reply_to("oi").unwrap();
        transcript.record_bot(reply);

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].sender, Sender::Visitor);
        assert_eq!(transcript.messages()[1].sender, Sender::Bot);
        assert_eq!(transcript.messages()[1].text, reply);
    }
}
