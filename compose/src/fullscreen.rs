//! Fullscreen ("full size") state of the compose box.
//!
//! In fullscreen mode the buffer's auto-resize is torn down so it cannot shrink the expanded box;
//! leaving fullscreen brings it back and recomputes the height right away.

use derive_more::IsVariant;

use crate::text_buffer::TextBuffer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, IsVariant, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ComposeBoxMode {
    #[default]
    Normal,
    Fullscreen,
}

/// The single compose-box mode flag, owned by the UI layer and passed to the helpers that need it.
#[derive(Debug, Clone, Default)]
pub struct ComposeBoxState {
    mode: ComposeBoxMode,
}

impl ComposeBoxState {
    pub fn new(mode: ComposeBoxMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ComposeBoxMode {
        self.mode
    }

    pub fn is_full_size(&self) -> bool {
        self.mode.is_fullscreen()
    }

    /// Expand the compose box. Calling this while already fullscreen re-asserts the state.
    pub fn enter_fullscreen<B: TextBuffer + ?Sized>(&mut self, buffer: &mut B) {
        tracing::debug!(from = %self.mode, "entering fullscreen compose");
        self.mode = ComposeBoxMode::Fullscreen;
        buffer.set_autosize_enabled(false);
        buffer.focus();
    }

    /// Restore the compose box to its normal size. Calling this while already normal re-asserts
    /// the state.
    pub fn exit_fullscreen<B: TextBuffer + ?Sized>(&mut self, buffer: &mut B) {
        tracing::debug!(from = %self.mode, "leaving fullscreen compose");
        self.mode = ComposeBoxMode::Normal;
        buffer.set_autosize_enabled(true);
        buffer.update_autosize();
        buffer.focus();
    }
}

/// Recompute the buffer's auto-resize unless the compose box is fullscreen.
pub fn autosize_textarea<B: TextBuffer + ?Sized>(buffer: &mut B, state: &ComposeBoxState) {
    if !state.is_full_size() {
        buffer.update_autosize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_buffer::InMemoryTextBuffer;
    use pretty_assertions::assert_eq;

    #[test]
    fn enter_disables_autosize_and_exit_recomputes_it() {
        let mut buffer = InMemoryTextBuffer::default();
        let mut state = ComposeBoxState::default();
        assert!(!state.is_full_size());

        state.enter_fullscreen(&mut buffer);
        assert!(state.is_full_size());
        assert!(!buffer.is_autosize_enabled());
        assert!(buffer.is_focused());

        state.exit_fullscreen(&mut buffer);
        assert_eq!(state.mode(), ComposeBoxMode::Normal);
        assert!(buffer.is_autosize_enabled());
        assert_eq!(buffer.autosize_update_count(), 1);
    }

    #[test]
    fn repeated_transitions_are_idempotent() {
        let mut buffer = InMemoryTextBuffer::default();
        let mut state = ComposeBoxState::default();

        state.exit_fullscreen(&mut buffer);
        state.exit_fullscreen(&mut buffer);
        assert_eq!(state.mode(), ComposeBoxMode::Normal);

        state.enter_fullscreen(&mut buffer);
        state.enter_fullscreen(&mut buffer);
        assert_eq!(state.mode(), ComposeBoxMode::Fullscreen);
    }

    #[test]
    fn autosize_is_skipped_while_fullscreen() {
        let mut buffer = InMemoryTextBuffer::default();
        autosize_textarea(&mut buffer, &ComposeBoxState::new(ComposeBoxMode::Fullscreen));
        assert_eq!(buffer.autosize_update_count(), 0);

        autosize_textarea(&mut buffer, &ComposeBoxState::default());
        assert_eq!(buffer.autosize_update_count(), 1);
    }

    #[test]
    fn mode_displays_in_snake_case() {
        assert_eq!(ComposeBoxMode::Fullscreen.to_string(), "fullscreen");
        assert_eq!(ComposeBoxMode::Normal.to_string(), "normal");
    }
}
