use thiserror::Error;

use crate::matcher::TokenizeError;

/// An inconsistent [`OptionDescriptors`](crate::OptionDescriptors) table.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// A failed parse of the argument vector.
#[derive(Debug, Error)]
#[error("Parse error: {0}")]
pub struct ParseError(pub(crate) String);

impl ParseError {
    pub(crate) fn message(&self) -> &str {
        &self.0
    }
}

impl From<TokenizeError> for ParseError {
    fn from(error: TokenizeError) -> Self {
        ParseError(error.to_string())
    }
}
