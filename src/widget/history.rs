use chrono::{DateTime, Local};

use crate::openai::{Message, Role};

/// Who an entry in the widget's history came from. `Error` entries are
/// shown to the user but never sent to the proxy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryRole {
    User,
    Assistant,
    Error,
}

#[derive(Clone, Debug)]
pub struct Entry {
    pub role: EntryRole,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl Entry {
    pub fn new(role: EntryRole, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
            timestamp: Local::now(),
        }
    }

    /// Hour and minute the entry was added, e.g. "09:41".
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    /// The `{role, content}` form sent to the proxy.
    pub fn to_wire(&self) -> Option<Message> {
        match self.role {
            EntryRole::User => Some(Message::new(Role::User, &self.content)),
            EntryRole::Assistant => Some(Message::new(Role::Assistant, &self.content)),
            EntryRole::Error => None,
        }
    }
}

/// Append-only, ordered chat history. Entries can't be edited or
/// removed once added.
#[derive(Clone, Debug, Default)]
pub struct History(Vec<Entry>);

impl History {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, entry: Entry) {
        self.0.push(entry)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.0.last()
    }

    /// The conversation as sent to the proxy. Error entries are left out
    /// since the provider rejects any role it doesn't know.
    pub fn wire_messages(&self) -> Vec<Message> {
        self.0.iter().filter_map(Entry::to_wire).collect()
    }
}
