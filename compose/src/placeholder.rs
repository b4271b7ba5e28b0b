//! Placeholder text for the compose box, describing who the message is going to.
//!
//! Stream, topic and user names are returned unescaped; callers render the text as a placeholder
//! and are responsible for escaping it.

use chat_compose_protocol::CompositionTarget;

use crate::directory::Directory;
use crate::directory::StatusProvider;
use crate::error::ComposeError;

/// Shown when no conversation has been picked yet.
pub const DEFAULT_PLACEHOLDER: &str = "Compose your message here";

/// Compute the compose-box placeholder for `target`.
///
/// A single direct-message recipient with status text gets it appended in parentheses. Unknown
/// recipients are reported as [`ComposeError::UnknownRecipient`] and left for the caller to handle.
pub fn compute_placeholder_text<D, S>(
    target: &CompositionTarget,
    directory: &D,
    status: &S,
) -> Result<String, ComposeError>
where
    D: Directory + ?Sized,
    S: StatusProvider + ?Sized,
{
    match target {
        CompositionTarget::Stream { .. } => {
            let text = match (target.stream_name(), target.topic_name()) {
                (Some(stream), Some(topic)) => format!("Message #{stream} > {topic}"),
                (Some(stream), None) => format!("Message #{stream}"),
                (None, _) => DEFAULT_PLACEHOLDER.to_string(),
            };
            Ok(text)
        }
        CompositionTarget::Private { recipients } if !recipients.is_empty() => {
            let people = recipients
                .iter()
                .map(|recipient| directory.resolve_recipient(recipient))
                .collect::<Result<Vec<_>, _>>()?;

            if let [person] = people.as_slice()
                && let Some(status) = status
                    .status_text(person.user_id)
                    .filter(|status| !status.is_empty())
            {
                return Ok(format!("Message {} ({status})", person.full_name));
            }

            let names = people
                .iter()
                .map(|person| person.full_name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Ok(format!("Message {names}"))
        }
        CompositionTarget::Private { .. } | CompositionTarget::Unset => {
            Ok(DEFAULT_PLACEHOLDER.to_string())
        }
    }
}
