//! Chat page - View Model

use contracts::OllamaModel;
use leptos::prelude::*;
use uuid::Uuid;

/// Backend connection state shown by the status indicator.
#[derive(Clone, Copy, PartialEq)]
pub enum ServerStatus {
    Checking,
    Connected,
    Disconnected,
}

impl ServerStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            ServerStatus::Checking => "status-indicator",
            ServerStatus::Connected => "status-indicator connected",
            ServerStatus::Disconnected => "status-indicator error",
        }
    }
}

/// Who a conversation entry comes from. Drives the header label and styling.
#[derive(Clone, Copy, PartialEq)]
pub enum EntryKind {
    User,
    Assistant,
    System,
    Error,
}

impl EntryKind {
    pub fn header_label(self) -> &'static str {
        match self {
            EntryKind::User => "Vous",
            EntryKind::Assistant => "Assistant",
            EntryKind::System => "Système",
            EntryKind::Error => "Erreur",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            EntryKind::User => "user",
            EntryKind::Assistant => "assistant",
            EntryKind::System => "system",
            EntryKind::Error => "error",
        }
    }
}

/// A single turn in the conversation log.
#[derive(Clone)]
pub struct ChatEntry {
    pub id: Uuid,
    pub kind: EntryKind,
    pub text: String,
}

impl ChatEntry {
    pub fn new(kind: EntryKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ChatPageVm {
    pub status: RwSignal<ServerStatus>,
    pub status_text: RwSignal<String>,
    pub models: RwSignal<Vec<OllamaModel>>,
    pub model_placeholder: RwSignal<String>,
    pub selected_model: RwSignal<String>,
    pub entries: RwSignal<Vec<ChatEntry>>,
    pub input: RwSignal<String>,
    pub is_sending: RwSignal<bool>,
}

impl ChatPageVm {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(ServerStatus::Checking),
            status_text: RwSignal::new("Vérification...".to_string()),
            models: RwSignal::new(Vec::new()),
            model_placeholder: RwSignal::new("Sélectionnez un modèle".to_string()),
            selected_model: RwSignal::new(String::new()),
            entries: RwSignal::new(Vec::new()),
            input: RwSignal::new(String::new()),
            is_sending: RwSignal::new(false),
        }
    }

    /// Appends a turn to the conversation log.
    pub fn push_entry(&self, kind: EntryKind, text: impl Into<String>) {
        let mut entries = self.entries.get();
        entries.push(ChatEntry::new(kind, text));
        self.entries.set(entries);
    }

    /// Check if the send button should be disabled
    pub fn is_send_disabled(&self) -> Signal<bool> {
        let selected_model = self.selected_model;
        let is_sending = self.is_sending;
        Signal::derive(move || selected_model.get().is_empty() || is_sending.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_header_labels() {
        assert_eq!(EntryKind::User.header_label(), "Vous");
        assert_eq!(EntryKind::Assistant.header_label(), "Assistant");
        assert_eq!(EntryKind::System.header_label(), "Système");
        assert_eq!(EntryKind::Error.header_label(), "Erreur");
    }

    #[test]
    fn test_status_indicator_classes() {
        assert_eq!(ServerStatus::Checking.css_class(), "status-indicator");
        assert_eq!(
            ServerStatus::Connected.css_class(),
            "status-indicator connected"
        );
        assert_eq!(
            ServerStatus::Disconnected.css_class(),
            "status-indicator error"
        );
    }
}
