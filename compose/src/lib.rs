//! Compose-box assistance for a chat client's message-entry box.
//!
//! Everything here operates on a [`TextBuffer`] handed in at call time; the UI layer owns the
//! buffer and the [`ComposeBoxState`], and calls into this crate from its (serialized) input
//! event handlers.
// Forbid accidental stdout/stderr writes in the library.
#![deny(clippy::print_stdout, clippy::print_stderr)]

mod directory;
mod error;
mod fullscreen;
mod placeholder;
mod smart_insert;
mod syntax_replace;
mod text_buffer;

pub use directory::Directory;
pub use directory::PeopleDirectory;
pub use directory::Person;
pub use directory::StatusProvider;
pub use error::ComposeError;
pub use fullscreen::ComposeBoxMode;
pub use fullscreen::ComposeBoxState;
pub use fullscreen::autosize_textarea;
pub use placeholder::DEFAULT_PLACEHOLDER;
pub use placeholder::compute_placeholder_text;
pub use smart_insert::insert_syntax_and_focus;
pub use smart_insert::pad_syntax;
pub use smart_insert::smart_insert;
pub use smart_insert::wrap_selection_with_markdown;
pub use syntax_replace::ReplaceMode;
pub use syntax_replace::SyntaxPattern;
pub use syntax_replace::replace_syntax;
pub use syntax_replace::replace_syntax_in_buffer;
pub use text_buffer::InMemoryTextBuffer;
pub use text_buffer::InsertCapabilities;
pub use text_buffer::TextBuffer;

pub use chat_compose_protocol::CompositionTarget;
pub use chat_compose_protocol::RecipientRef;
pub use chat_compose_protocol::Selection;
pub use chat_compose_protocol::UserId;
