use regex_lite::NoExpand;
use regex_lite::Regex;

use crate::text_buffer::TextBuffer;

/// What to look for when replacing syntax in the compose buffer.
#[derive(Debug, Clone)]
pub enum SyntaxPattern {
    Literal(String),
    Regex(Regex),
}

impl SyntaxPattern {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn regex(pattern: &str) -> Result<Self, regex_lite::Error> {
        Regex::new(pattern).map(Self::Regex)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplaceMode {
    /// Replace only the first match.
    #[default]
    First,
    /// Replace every non-overlapping match.
    All,
}

/// Replace `old` with `new_syntax` in `text`.
///
/// `new_syntax` is always substituted verbatim: `$&`, `$1`, `$name` and `$$` are not expanded,
/// even for regex patterns.
pub fn replace_syntax(
    text: &str,
    old: &SyntaxPattern,
    new_syntax: &str,
    mode: ReplaceMode,
) -> String {
    match (old, mode) {
        (SyntaxPattern::Literal(literal), ReplaceMode::First) => {
            text.replacen(literal.as_str(), new_syntax, 1)
        }
        (SyntaxPattern::Literal(literal), ReplaceMode::All) => {
            text.replace(literal.as_str(), new_syntax)
        }
        (SyntaxPattern::Regex(re), ReplaceMode::First) => {
            re.replace(text, NoExpand(new_syntax)).into_owned()
        }
        (SyntaxPattern::Regex(re), ReplaceMode::All) => {
            re.replace_all(text, NoExpand(new_syntax)).into_owned()
        }
    }
}

/// Apply [`replace_syntax`] to the whole content of `buffer`.
pub fn replace_syntax_in_buffer<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    old: &SyntaxPattern,
    new_syntax: &str,
    mode: ReplaceMode,
) {
    let replaced = replace_syntax(buffer.text(), old, new_syntax, mode);
    if replaced != buffer.text() {
        buffer.set_text(replaced);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_buffer::InMemoryTextBuffer;
    use pretty_assertions::assert_eq;

    #[test]
    fn literal_replaces_first_occurrence_only() {
        let old = SyntaxPattern::literal("[uploading]");
        assert_eq!(
            replace_syntax("[uploading] [uploading]", &old, "[a.png](/a.png)", ReplaceMode::First),
            "[a.png](/a.png) [uploading]"
        );
    }

    #[test]
    fn literal_replace_all() {
        let old = SyntaxPattern::literal("x");
        assert_eq!(replace_syntax("x-x-x", &old, "y", ReplaceMode::All), "y-y-y");
    }

    #[test]
    fn dollar_sequences_are_not_expanded() {
        let old = SyntaxPattern::literal("$&");
        assert_eq!(replace_syntax("a$&b", &old, "X", ReplaceMode::First), "aXb");

        let old = SyntaxPattern::literal("X");
        assert_eq!(replace_syntax("aXb", &old, "$&$1$$", ReplaceMode::First), "a$&$1$$b");

        let old = SyntaxPattern::regex(r"(\d+)").expect("valid regex");
        assert_eq!(replace_syntax("n=42", &old, "$1", ReplaceMode::All), "n=$1");
    }

    #[test]
    fn regex_first_and_all() {
        let old = SyntaxPattern::regex(r"\[Uploading [^\]]*\]\(\)").expect("valid regex");
        let text = "[Uploading a.png…]() and [Uploading b.png…]()";
        assert_eq!(
            replace_syntax(text, &old, "done", ReplaceMode::First),
            "done and [Uploading b.png…]()"
        );
        assert_eq!(replace_syntax(text, &old, "done", ReplaceMode::All), "done and done");
    }

    #[test]
    fn no_match_leaves_text_unchanged() {
        let old = SyntaxPattern::literal("missing");
        assert_eq!(replace_syntax("hello", &old, "x", ReplaceMode::All), "hello");
    }

    #[test]
    fn whitespace_is_not_normalized() {
        let old = SyntaxPattern::literal("b");
        assert_eq!(replace_syntax("a b c", &old, "  ", ReplaceMode::First), "a    c");
    }

    #[test]
    fn buffer_replace_keeps_caret_inside_text() {
        let mut buffer = InMemoryTextBuffer::new("hello world");
        let old = SyntaxPattern::literal(" world");
        replace_syntax_in_buffer(&mut buffer, &old, "", ReplaceMode::First);
        assert_eq!(buffer.text(), "hello");
        assert_eq!(buffer.caret(), 5);
    }
}
