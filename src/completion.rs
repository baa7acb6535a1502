//! Symbol-name completion
//!
//! Offers the names from the most recently loaded symbol tree as
//! completion proposals, filtered by the word fragment before the cursor.
//! Matching is a plain case-sensitive prefix test; activation is
//! user-requested, never automatic on keystrokes.

/// Cursor position for a completion request: the current line's text and
/// the byte offset of the cursor within it.
#[derive(Debug, Clone, Copy)]
pub struct CursorContext<'a> {
    pub line: &'a str,
    pub offset: usize,
}

impl<'a> CursorContext<'a> {
    pub fn new(line: &'a str, offset: usize) -> Self {
        Self { line, offset }
    }

    fn char_before(&self) -> Option<char> {
        self.line[..self.offset].chars().next_back()
    }

    fn char_after(&self) -> Option<char> {
        self.line[self.offset..].chars().next()
    }

    /// The word fragment ending at the cursor, possibly empty
    fn fragment(&self) -> &'a str {
        let before = &self.line[..self.offset];
        let start = before
            .char_indices()
            .rev()
            .take_while(|(_, c)| is_word_char(*c))
            .last()
            .map(|(i, _)| i)
            .unwrap_or(self.offset);
        &before[start..]
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// One completion proposal. Accepting it inserts `text` at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub text: String,
}

/// Completion provider backed by the panel's last-loaded symbol names
#[derive(Debug, Default)]
pub struct CompletionProvider {
    names: Vec<String>,
}

impl CompletionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the known-symbol snapshot (called after every tree load)
    pub fn set_symbols(&mut self, names: Vec<String>) {
        self.names = names;
    }

    /// Whether the provider is willing to offer proposals here: the cursor
    /// must end a word. At a line start, a word start, or mid-word there is
    /// nothing to complete against.
    pub fn matches(&self, ctx: &CursorContext) -> bool {
        if ctx.offset == 0 {
            return false;
        }
        let ends_word = ctx.char_before().is_some_and(is_word_char)
            && !ctx.char_after().is_some_and(is_word_char);
        ends_word
    }

    /// Proposals for the fragment before the cursor.
    ///
    /// An empty fragment (cursor after a non-word character) matches every
    /// known symbol; a true line start matches none.
    pub fn proposals(&self, ctx: &CursorContext) -> Vec<Proposal> {
        if ctx.offset == 0 {
            return Vec::new();
        }
        let fragment = ctx.fragment();

        self.names
            .iter()
            .filter(|name| fragment.is_empty() || name.starts_with(fragment))
            .map(|name| Proposal { text: name.clone() })
            .collect()
    }
}
