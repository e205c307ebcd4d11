//! Client side state for the chat widget.
//!
//! The widget owns an append-only history and allows a single
//! outstanding request at a time. A submission is split into
//! [`ChatWidget::begin_submit`], which records the user's message and
//! produces the outbound request, and [`ChatWidget::complete`], which
//! turns whatever came back into exactly one new history entry.
//! [`ChatWidget::submit`] runs both around a [`ChatTransport`].

mod history;
mod transport;

pub use history::{Entry, EntryRole, History};
pub use transport::{ChatTransport, HttpTransport, ProxyReply, TransportError};

use crate::api::public::chat::ChatRequest;

pub const GREETING: &str = "Hi! I'm your NFT assistant. Ask me anything about NFTs, blockchain, digital art, or cryptocurrency!";

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What is an NFT?",
    "How do I create my first NFT?",
    "What are gas fees?",
    "How do I set up a crypto wallet?",
    "What makes an NFT valuable?",
    "How do NFT royalties work?",
];

// Only this many suggestions are offered at once
const SUGGESTION_LIMIT: usize = 3;

pub const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

pub const FALLBACK_ERROR: &str =
    "Sorry, I'm having trouble responding right now. Please try again in a moment.";

pub const CONFIG_WARNING: &str = "API Configuration Issue: the server's OpenAI API key is missing or invalid. Set a valid OPENAI_API_KEY in the server environment and restart it.";

pub struct ChatWidget<T> {
    transport: T,
    history: History,
    input: String,
    loading: bool,
    config_warning: bool,
}

impl<T: ChatTransport> ChatWidget<T> {
    /// A widget whose history starts with the canned greeting.
    pub fn new(transport: T) -> Self {
        let mut history = History::new();
        history.push(Entry::new(EntryRole::Assistant, GREETING));
        Self {
            transport,
            history,
            input: String::new(),
            loading: false,
            config_warning: false,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The configuration banner. Once raised by an authentication
    /// failure it stays up for the rest of the widget's life.
    pub fn config_warning(&self) -> Option<&'static str> {
        self.config_warning.then_some(CONFIG_WARNING)
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Suggestions are only offered before the first exchange.
    pub fn suggested_questions(&self) -> &'static [&'static str] {
        if self.history.len() == 1 {
            &SUGGESTED_QUESTIONS[..SUGGESTION_LIMIT]
        } else {
            &[]
        }
    }

    /// Put the suggestion at `idx` into the input. Returns false when
    /// there is no such suggestion on offer.
    pub fn choose_suggestion(&mut self, idx: usize) -> bool {
        match self.suggested_questions().get(idx) {
            Some(question) => {
                self.set_input(question);
                true
            }
            None => false,
        }
    }

    /// Record the current input as a user message and enter the
    /// loading state. Returns the request to send, or `None` when the
    /// input is blank or a request is already outstanding, in which
    /// case nothing changes.
    pub fn begin_submit(&mut self) -> Option<ChatRequest> {
        if !self.can_submit() {
            return None;
        }

        let content = self.input.trim().to_string();
        self.history.push(Entry::new(EntryRole::User, &content));
        self.input.clear();
        self.loading = true;

        Some(ChatRequest {
            messages: self.history.wire_messages(),
        })
    }

    /// Append the single entry that answers the outstanding request and
    /// leave the loading state. Results arriving when nothing is
    /// outstanding are dropped.
    pub fn complete(&mut self, result: Result<ProxyReply, TransportError>) {
        if !self.loading {
            tracing::debug!("Dropping chat result with no outstanding request");
            return;
        }

        let entry = match result {
            Ok(ProxyReply { body, .. }) if body.success => match body.message {
                Some(message) => Entry::new(EntryRole::Assistant, &message.content),
                None => Entry::new(EntryRole::Error, FALLBACK_ERROR),
            },
            Ok(ProxyReply { status, body }) => {
                if status == 401 {
                    self.config_warning = true;
                }
                let error = body
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR.to_string());
                Entry::new(EntryRole::Error, &error)
            }
            Err(e) => {
                tracing::warn!("Chat error: {}", e);
                Entry::new(EntryRole::Error, NETWORK_ERROR)
            }
        };

        self.history.push(entry);
        self.loading = false;
    }

    /// Submit the current input and wait for the answer. Returns false
    /// if the submission was rejected.
    pub async fn submit(&mut self) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let result = self.transport.send(&request.messages).await;
        self.complete(result);
        true
    }
}
