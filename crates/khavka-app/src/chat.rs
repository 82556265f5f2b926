//! Support chat: the message log and the canned reply service.
//!
//! The log is plain data so it can be unit tested; the widget wires it
//! to signals and schedules [`ReplyService`] answers with a timer.

use std::time::Duration;

const GREETING: &str = "Вітаю! Я ваш віртуальний помічник. Чим можу допомогти?";
const CANNED_REPLY: &str = "Дякуємо за ваше повідомлення! Наш оператор скоро зв'яжеться з вами.";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    Visitor,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    /// Wall-clock label, already formatted ("14:05").
    pub timestamp: String,
}

/// Ordered message history plus the single-reply-in-flight flag.
///
/// While a reply is pending the log refuses further sends; the input is
/// disabled in the UI for the same window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    awaiting_reply: bool,
}

impl ChatLog {
    /// A fresh log opens with the assistant's greeting.
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                text: GREETING.to_string(),
                timestamp: timestamp.into(),
            }],
            awaiting_reply: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Records a visitor message and marks a reply as pending. Rejects
    /// blank input and sends made while a reply is already in flight.
    pub fn send(&mut self, text: &str, timestamp: impl Into<String>) -> bool {
        let text = text.trim();
        if text.is_empty() || self.awaiting_reply {
            return false;
        }
        self.messages.push(ChatMessage {
            role: ChatRole::Visitor,
            text: text.to_string(),
            timestamp: timestamp.into(),
        });
        self.awaiting_reply = true;
        true
    }

    /// Appends the assistant's answer and unblocks the input.
    pub fn receive(&mut self, text: impl Into<String>, timestamp: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            text: text.into(),
            timestamp: timestamp.into(),
        });
        self.awaiting_reply = false;
    }
}

/// Stand-in for a live operator: every message gets the same answer
/// after a fixed delay, and delivery never fails.
pub struct ReplyService;

impl ReplyService {
    pub const LATENCY: Duration = Duration::from_millis(1500);

    pub fn reply_to(_message: &str) -> &'static str {
        CANNED_REPLY
    }
}

/// Current local time as an "HH:MM" label.
pub fn clock_label() -> String {
    let now = js_sys::Date::new_0();
    format!("{:02}:{:02}", now.get_hours(), now.get_minutes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_opens_with_greeting() {
        let log = ChatLog::new("10:00");
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].role, ChatRole::Assistant);
        assert_eq!(log.messages()[0].text, GREETING);
        assert!(!log.is_awaiting_reply());
    }

    #[test]
    fn test_send_appends_and_blocks_further_sends() {
        let mut log = ChatLog::new("10:00");
        assert!(log.send("Де моє замовлення?", "10:01"));
        assert!(log.is_awaiting_reply());
        assert_eq!(log.messages().len(), 2);
        assert_eq!(log.messages()[1].role, ChatRole::Visitor);

        assert!(!log.send("Агов?", "10:01"));
        assert_eq!(log.messages().len(), 2);
    }

    #[test]
    fn test_send_trims_and_rejects_blank_input() {
        let mut log = ChatLog::new("10:00");
        assert!(!log.send("   ", "10:01"));
        assert!(!log.send("", "10:01"));
        assert!(log.send("  привіт  ", "10:01"));
        assert_eq!(log.messages()[1].text, "привіт");
    }

    #[test]
    fn test_receive_unblocks_the_input() {
        let mut log = ChatLog::new("10:00");
        log.send("питання", "10:01");
        log.receive(ReplyService::reply_to("питання"), "10:01");
        assert!(!log.is_awaiting_reply());
        assert_eq!(log.messages().len(), 3);
        assert_eq!(log.messages()[2].text, CANNED_REPLY);

        assert!(log.send("ще одне", "10:02"));
    }

    #[test]
    fn test_reply_service_latency() {
        assert_eq!(ReplyService::LATENCY, Duration::from_millis(1500));
    }

    #[test]
    fn test_deferred_reply_to_disposed_log_is_dropped() {
        use leptos::prelude::*;

        let log = RwSignal::new(ChatLog::new("10:00"));
        log.dispose();
        // The widget's reply timer goes through try_update; a log torn
        // down before the timer fires must absorb the write.
        let result = log.try_update(|l| l.receive(ReplyService::reply_to("x"), "10:01"));
        assert!(result.is_none());
    }
}
