use chat_compose_protocol::RecipientRef;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComposeError {
    /// A direct-message recipient could not be resolved by the directory.
    #[error("unknown recipient `{recipient}`")]
    UnknownRecipient { recipient: RecipientRef },
    /// The buffer supports neither undo-preserving replacement nor caret-based insertion.
    #[error("compose buffer does not support text insertion")]
    UnsupportedInsertion,
}
