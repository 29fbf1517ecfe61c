use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEntry {
    Heading(String),
    User(String),
    Assistant(String),
    Body(String),
    Hint(String),
    Pending(String),
    Notice(String),
}

impl ChatEntry {
    pub fn text(&self) -> String {
        match self {
            ChatEntry::User(content) => format!("You: {}", content),
            ChatEntry::Assistant(content) => format!("Assistant: {}", content),
            ChatEntry::Heading(content)
            | ChatEntry::Body(content)
            | ChatEntry::Hint(content)
            | ChatEntry::Pending(content)
            | ChatEntry::Notice(content) => content.clone(),
        }
    }
}

/// What the chat window shows. Routine output replaces it; chat turns append to it.
#[derive(Debug, Clone, Default)]
pub struct ChatPane {
    entries: Vec<ChatEntry>,
}

impl ChatPane {
    pub fn new() -> Self {
        Self {
            entries: vec![ChatEntry::Notice(CHAT_GREETING.to_string())],
        }
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn replace(&mut self, entries: Vec<ChatEntry>) {
        self.entries = entries;
    }

    pub fn push(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    /// Swaps the trailing placeholder for `entry`, or appends when there is none.
    pub fn resolve_pending(&mut self, entry: ChatEntry) {
        if matches!(self.entries.last(), Some(ChatEntry::Pending(_))) {
            self.entries.pop();
        }
        self.entries.push(entry);
    }

    pub fn show_routine(&mut self, routine: &str) {
        self.replace(vec![
            ChatEntry::Heading(ROUTINE_HEADING.to_string()),
            ChatEntry::Body(routine.to_string()),
            ChatEntry::Hint(ROUTINE_FOLLOW_UP_HINT.to_string()),
        ]);
    }
}
