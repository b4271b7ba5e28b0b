use serde::Deserialize;
use serde::Serialize;

use crate::recipient::RecipientRef;

/// The conversation a message is currently being composed for.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CompositionTarget {
    /// A stream message. Either field may still be empty while the user fills in the header.
    Stream {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stream: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    },
    /// A direct (private) message to one or more recipients, in header order.
    Private {
        #[serde(default)]
        recipients: Vec<RecipientRef>,
    },
    /// No target chosen yet.
    #[default]
    Unset,
}

impl CompositionTarget {
    pub fn stream(stream: impl Into<String>, topic: Option<String>) -> Self {
        Self::Stream {
            stream: Some(stream.into()),
            topic,
        }
    }

    /// Build a direct-message target from the comma-separated recipient field of the compose
    /// header. Entries are trimmed and empty entries are dropped.
    pub fn private_from_emails(emails: &str) -> Self {
        let recipients = emails
            .split(',')
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(RecipientRef::from)
            .collect();
        Self::Private { recipients }
    }

    /// Stream name, treating an empty string as unset.
    pub fn stream_name(&self) -> Option<&str> {
        match self {
            Self::Stream { stream, .. } => non_empty(stream.as_deref()),
            _ => None,
        }
    }

    /// Topic name, treating an empty string as unset.
    pub fn topic_name(&self) -> Option<&str> {
        match self {
            Self::Stream { topic, .. } => non_empty(topic.as_deref()),
            _ => None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn private_from_emails_trims_and_skips_empty_entries() {
        let target = CompositionTarget::private_from_emails("alice@example.com, ,bob@example.com,");
        assert_eq!(
            target,
            CompositionTarget::Private {
                recipients: vec![
                    RecipientRef::from("alice@example.com"),
                    RecipientRef::from("bob@example.com"),
                ],
            }
        );
        assert_eq!(
            CompositionTarget::private_from_emails(""),
            CompositionTarget::Private { recipients: vec![] }
        );
    }

    #[test]
    fn empty_stream_fields_read_as_unset() {
        let target = CompositionTarget::Stream {
            stream: Some(String::new()),
            topic: Some("bots".to_string()),
        };
        assert_eq!(target.stream_name(), None);
        assert_eq!(target.topic_name(), Some("bots"));
        assert_eq!(CompositionTarget::Unset.stream_name(), None);
    }

    #[test]
    fn deserializes_tagged_targets() {
        let target: CompositionTarget =
            serde_json::from_str(r#"{"type":"stream","stream":"general"}"#)
                .expect("parse stream target");
        assert_eq!(target, CompositionTarget::stream("general", None));

        let target: CompositionTarget =
            serde_json::from_str(r#"{"type":"private","recipients":["alice@example.com"]}"#)
                .expect("parse private target");
        assert_eq!(
            target,
            CompositionTarget::Private {
                recipients: vec![RecipientRef::from("alice@example.com")],
            }
        );

        let target: CompositionTarget =
            serde_json::from_str(r#"{"type":"unset"}"#).expect("parse unset target");
        assert_eq!(target, CompositionTarget::Unset);
    }
}
