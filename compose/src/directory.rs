//! Recipient lookup capabilities used by the placeholder builder.

use std::collections::HashMap;

use chat_compose_protocol::RecipientRef;
use chat_compose_protocol::UserId;

use crate::error::ComposeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub user_id: UserId,
    pub email: String,
    pub full_name: String,
}

/// Resolves direct-message recipients to people.
pub trait Directory {
    fn resolve_recipient(&self, recipient: &RecipientRef) -> Result<Person, ComposeError>;
}

/// Supplies a user's current status text ("on vacation", ...), if they have set one.
pub trait StatusProvider {
    fn status_text(&self, user_id: UserId) -> Option<String>;
}

/// In-memory people directory keyed by (case-insensitive) email, with per-user status text.
#[derive(Debug, Clone, Default)]
pub struct PeopleDirectory {
    by_email: HashMap<String, Person>,
    status_text: HashMap<UserId, String>,
}

impl PeopleDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_person(&mut self, person: Person) {
        self.by_email.insert(person.email.to_lowercase(), person);
    }

    /// Set or clear a user's status text. Empty text clears it.
    pub fn set_status_text(&mut self, user_id: UserId, text: Option<String>) {
        match text.filter(|text| !text.is_empty()) {
            Some(text) => {
                self.status_text.insert(user_id, text);
            }
            None => {
                self.status_text.remove(&user_id);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }
}

impl Directory for PeopleDirectory {
    fn resolve_recipient(&self, recipient: &RecipientRef) -> Result<Person, ComposeError> {
        self.by_email
            .get(&recipient.as_str().to_lowercase())
            .cloned()
            .ok_or_else(|| ComposeError::UnknownRecipient {
                recipient: recipient.clone(),
            })
    }
}

impl StatusProvider for PeopleDirectory {
    fn status_text(&self, user_id: UserId) -> Option<String> {
        self.status_text.get(&user_id).cloned()
    }
}
