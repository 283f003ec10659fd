/// A position within the argument vector.
///
/// `pending` holds the remainder of the entry at `index` after an `=` delimiter (ex: `true` in `-t=true`).
/// When set, it stands in for that entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor<'t> {
    tokens: &'t [&'t str],
    index: usize,
    pending: Option<&'t str>,
}

impl<'t> Cursor<'t> {
    pub(crate) fn new(tokens: &'t [&'t str], index: usize) -> Self {
        Self {
            tokens,
            index,
            pending: None,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn current(&self) -> Option<&'t str> {
        match self.pending {
            Some(pending) => Some(pending),
            None => self.tokens.get(self.index).copied(),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.current().is_none()
    }

    /// Move past the current token.
    pub(crate) fn advance(&mut self) {
        self.pending = None;
        self.index += 1;
    }

    /// Replace the current entry with its remainder after the `=` delimiter.
    pub(crate) fn defer(&mut self, remainder: &'t str) {
        self.pending.replace(remainder);
    }

    /// The current token, when it continues a run of vector values.
    /// A run ends before an empty token, a token beginning with `-`, or the end of the arguments.
    pub(crate) fn run_token(&self) -> Option<&'t str> {
        self.current()
            .filter(|token| !token.is_empty() && !token.starts_with('-'))
    }

    pub(crate) fn snapshot(&self) -> Self {
        *self
    }

    pub(crate) fn restore(&mut self, snapshot: Self) {
        *self = snapshot;
    }
}

/// One option identifier from a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Identifier<'t> {
    Long(&'t str),
    Short(char),
}

impl<'t> std::fmt::Display for Identifier<'t> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::Long(name) => write!(f, "{name}"),
            Identifier::Short(alias) => write!(f, "{alias}"),
        }
    }
}

/// The identifiers extracted from a single `-`/`--` token, which govern one shared value read.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Bundle<'t> {
    pub token: &'t str,
    pub identifiers: Vec<Identifier<'t>>,
}
