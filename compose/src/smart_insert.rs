//! Whitespace-aware insertion of formatting syntax at the caret.
//!
//! Inserted syntax is padded with a single space on either side when it would otherwise run into
//! the neighbouring text, so that e.g. inserting `**bold**` right after `hello` yields
//! `hello **bold** ` rather than `hello**bold**`.

use chat_compose_protocol::Selection;
use chat_compose_protocol::selection::clamp_pos_to_char_boundary;

use crate::error::ComposeError;
use crate::fullscreen::ComposeBoxState;
use crate::fullscreen::autosize_textarea;
use crate::text_buffer::TextBuffer;

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Return `syntax` padded so it does not merge with `before` (the text up to the caret) or
/// `after` (the text from the caret on).
///
/// - A leading space is added when `before` ends in a non-space and `syntax` does not start with
///   a space (an empty `syntax` counts as not starting with one).
/// - A trailing space is added unless `after` starts with a space or the (possibly already
///   padded) syntax ends with one. An empty `after` always gets the trailing pad.
pub fn pad_syntax(before: &str, after: &str, syntax: &str) -> String {
    let mut padded = String::with_capacity(syntax.len() + 2);

    let before_ends_in_word = before.chars().next_back().is_some_and(|c| !is_space(c));
    let syntax_starts_with_space = syntax.chars().next().is_some_and(is_space);
    if before_ends_in_word && !syntax_starts_with_space {
        padded.push(' ');
    }
    padded.push_str(syntax);

    let after_starts_with_space = after.chars().next().is_some_and(is_space);
    let padded_ends_with_space = padded.chars().next_back().is_some_and(is_space);
    if !(after_starts_with_space || padded_ends_with_space) {
        padded.push(' ');
    }

    tracing::trace!(syntax, padded = %padded, "padded compose syntax");
    padded
}

/// Insert `syntax` at the caret of `buffer`, padding it with whitespace as described in
/// [`pad_syntax`], and return the new caret position (just past the inserted text).
///
/// The insertion goes through the buffer's undo-preserving replace when available and falls back
/// to a caret-based insert otherwise. Auto-resize is recomputed unless the compose box is
/// fullscreen.
pub fn smart_insert<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    syntax: &str,
    state: &ComposeBoxState,
) -> Result<usize, ComposeError> {
    let caret = clamp_pos_to_char_boundary(buffer.text(), buffer.caret());
    let text = buffer.text();
    let padded = pad_syntax(&text[..caret], &text[caret..], syntax);

    buffer.focus();
    buffer.set_selection_range(Selection::caret(caret));
    replace_selection(buffer, &padded)?;

    autosize_textarea(buffer, state);
    Ok(caret + padded.len())
}

/// Insert `syntax` into the compose box where the caret was and focus it.
pub fn insert_syntax_and_focus<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    syntax: &str,
    state: &ComposeBoxState,
) -> Result<usize, ComposeError> {
    smart_insert(buffer, syntax, state)
}

/// Surround the current selection with `prefix` and `suffix` (e.g. `**` and `**`) and return the
/// caret position after the suffix. With an empty selection both markers land at the caret.
pub fn wrap_selection_with_markdown<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    prefix: &str,
    suffix: &str,
) -> Result<usize, ComposeError> {
    let selection = buffer.selection().clamp_to(buffer.text());
    let selected = &buffer.text()[selection.start..selection.end];
    let wrapped = format!("{prefix}{selected}{suffix}");

    buffer.set_selection_range(selection);
    replace_selection(buffer, &wrapped)?;
    Ok(selection.start + wrapped.len())
}

fn replace_selection<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    text: &str,
) -> Result<(), ComposeError> {
    if buffer.replace_selection_preserving_undo(text) {
        return Ok(());
    }

    tracing::debug!("undo-preserving insert unavailable; falling back to caret insert");
    if buffer.insert_at_caret(text) {
        return Ok(());
    }

    Err(ComposeError::UnsupportedInsertion)
}
