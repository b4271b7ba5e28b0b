//! Data model shared between the compose-box core and its callers.

pub mod composition_target;
pub mod recipient;
pub mod selection;

pub use composition_target::CompositionTarget;
pub use recipient::RecipientRef;
pub use recipient::UserId;
pub use selection::Selection;
