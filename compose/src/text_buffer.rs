//! The text-buffer capability the compose helpers operate on.
//!
//! Real UIs implement [`TextBuffer`] over their input widget. [`InMemoryTextBuffer`] is a plain
//! string plus selection with an undo stack, used by tests and by the command-line front end.

use chat_compose_protocol::Selection;

/// Undo snapshots kept by [`InMemoryTextBuffer`]; the oldest are dropped beyond this.
const MAX_UNDO_ENTRIES: usize = 100;

/// A mutable compose buffer with a selection.
///
/// All offsets are byte offsets into [`TextBuffer::text`].
pub trait TextBuffer {
    fn text(&self) -> &str;

    fn selection(&self) -> Selection;

    /// Caret position: the start of the current selection.
    fn caret(&self) -> usize {
        self.selection().start
    }

    fn set_selection_range(&mut self, selection: Selection);

    /// Replace the current selection with `text` as a single undoable edit, leaving the caret
    /// after the inserted text.
    ///
    /// Returns `false` without touching the buffer when the host cannot do this.
    fn replace_selection_preserving_undo(&mut self, text: &str) -> bool;

    /// Replace the current selection with `text` through plain caret manipulation. Undo grouping
    /// is not guaranteed.
    ///
    /// Returns `false` without touching the buffer when the host cannot do this.
    fn insert_at_caret(&mut self, text: &str) -> bool;

    /// Overwrite the whole buffer.
    fn set_text(&mut self, text: String);

    fn focus(&mut self);

    fn set_autosize_enabled(&mut self, enabled: bool);

    /// Recompute the buffer's auto-resized height. No-op while auto-resize is disabled.
    fn update_autosize(&mut self);
}

/// Which insertion paths an [`InMemoryTextBuffer`] reports as available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertCapabilities {
    pub undo_preserving: bool,
    pub caret_insert: bool,
}

impl Default for InsertCapabilities {
    fn default() -> Self {
        Self {
            undo_preserving: true,
            caret_insert: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryTextBuffer {
    text: String,
    selection: Selection,
    undo_stack: Vec<(String, Selection)>,
    capabilities: InsertCapabilities,
    focused: bool,
    autosize_enabled: bool,
    autosize_updates: usize,
}

impl Default for InMemoryTextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl InMemoryTextBuffer {
    /// Create a buffer holding `text` with the caret at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let selection = Selection::caret(text.len());
        Self {
            text,
            selection,
            undo_stack: Vec::new(),
            capabilities: InsertCapabilities::default(),
            focused: false,
            autosize_enabled: true,
            autosize_updates: 0,
        }
    }

    pub fn with_caret(mut self, caret: usize) -> Self {
        self.set_selection_range(Selection::caret(caret));
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.set_selection_range(selection);
        self
    }

    pub fn with_capabilities(mut self, capabilities: InsertCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Revert the most recent undoable edit. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some((text, selection)) = self.undo_stack.pop() else {
            return false;
        };
        self.text = text;
        self.selection = selection;
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_autosize_enabled(&self) -> bool {
        self.autosize_enabled
    }

    /// Number of auto-resize recomputations performed so far.
    pub fn autosize_update_count(&self) -> usize {
        self.autosize_updates
    }

    fn splice_selection(&mut self, text: &str) {
        let selection = self.selection.clamp_to(&self.text);
        self.text.replace_range(selection.start..selection.end, text);
        self.selection = Selection::caret(selection.start + text.len());
    }
}

impl TextBuffer for InMemoryTextBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection_range(&mut self, selection: Selection) {
        self.selection = selection.clamp_to(&self.text);
    }

    fn replace_selection_preserving_undo(&mut self, text: &str) -> bool {
        if !self.capabilities.undo_preserving {
            return false;
        }
        self.undo_stack.push((self.text.clone(), self.selection));
        if self.undo_stack.len() > MAX_UNDO_ENTRIES {
            let drop_count = self.undo_stack.len() - MAX_UNDO_ENTRIES;
            self.undo_stack.drain(0..drop_count);
        }
        self.splice_selection(text);
        true
    }

    fn insert_at_caret(&mut self, text: &str) -> bool {
        if !self.capabilities.caret_insert {
            return false;
        }
        self.splice_selection(text);
        true
    }

    /// Programmatic overwrites drop the undo history, like a native text input does.
    fn set_text(&mut self, text: String) {
        self.text = text;
        self.undo_stack.clear();
        self.selection = self.selection.clamp_to(&self.text);
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn set_autosize_enabled(&mut self, enabled: bool) {
        self.autosize_enabled = enabled;
    }

    fn update_autosize(&mut self) {
        if self.autosize_enabled {
            self.autosize_updates += 1;
        }
    }
}
