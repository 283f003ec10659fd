//! Engine module for `optbundle`.
//! See the `optbundle` crate root for full details.
#![deny(missing_docs)]
mod api;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{ConfigError, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
