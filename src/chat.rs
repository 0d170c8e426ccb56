use crate::types::Role;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub created_at: OffsetDateTime,
}

impl ChatMessage {
    /// Creation time as `hh:mm AM`, shifted to the local offset when it can be determined.
    pub fn display_time(&self) -> String {
        let mut datetime = self.created_at;
        if let Ok(offset) = UtcOffset::current_local_offset() {
            datetime = datetime.to_offset(offset);
        }
        format_clock(datetime)
    }
}

pub fn format_clock(datetime: OffsetDateTime) -> String {
    datetime.format(MESSAGE_TIME_FORMAT).unwrap_or_default()
}

/// Append-only conversation log, oldest first.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatHistory {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    pub fn append(&mut self, role: Role, content: impl Into<String>) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            role,
            content: content.into(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.next_id += 1;
        tracing::debug!(id = message.id, role = ?message.role, "appended chat message");
        self.messages.push(message.clone());
        message
    }

    pub fn all(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_append_preserves_order_and_assigns_ids() {
        let mut history = ChatHistory::new();
        let first = history.append(Role::User, "I have rice");
        let second = history.append(Role::Assistant, "Try Jollof Rice");

        assert_ne!(first.id, second.id);
        assert_eq!(history.len(), 2);
        assert_eq!(history.all()[0], first);
        assert_eq!(history.all()[1], second);
        assert_eq!(history.last(), Some(&second));
    }

    #[test]
    fn test_timestamps_are_non_decreasing() {
        let mut history = ChatHistory::new();
        for i in 0..5 {
            history.append(Role::User, format!("message {i}"));
        }
        let times: Vec<_> = history.all().iter().map(|m| m.created_at).collect();
        assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(datetime!(2024-05-01 09:05 UTC)), "09:05 AM");
        assert_eq!(format_clock(datetime!(2024-05-01 18:30 UTC)), "06:30 PM");
    }
}
