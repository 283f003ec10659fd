use thiserror::Error;

use crate::api::{OptionDescriptor, OptionDescriptors};
use crate::matcher::model::*;
use crate::model::ValueKind;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum TokenizeError {
    #[error("Zero length option: '{0}'.")]
    ZeroLength(String),

    #[error("Same option multiple times: '{0}'.")]
    RepeatedShortOption(char),

    #[error("Option expected: '{0}'.")]
    OptionExpected(String),

    #[error("Undefined option: '{0}'.")]
    UndefinedOption(String),
}

/// Extract the bundle of option identifiers at the cursor.
///
/// On success the cursor is left at the first token available to the bundle's value read:
/// either the remainder after an `=` delimiter, or the next entry of the argument vector.
pub(crate) fn tokenize<'t>(cursor: &mut Cursor<'t>) -> Result<Bundle<'t>, TokenizeError> {
    let token = cursor.current().unwrap_or_default();
    // 1. Find a 'long' option, such as:
    //  --initial
    //  --initial ..
    //  --initial=..
    // 2. Find 'short' option(s), such as (both -i and -v are example short options):
    //  -i
    //  -i ..
    //  -i=..
    //  -iv
    //  -iv ..
    //  -iv=..
    let (identifiers, remainder) = if let Some(long) = token.strip_prefix("--") {
        let (name, remainder) = split_equals_delimiter(long);

        if name.is_empty() {
            return Err(TokenizeError::ZeroLength(token.to_string()));
        }

        (vec![Identifier::Long(name)], remainder)
    } else if let Some(short) = token.strip_prefix('-') {
        let (aliases, remainder) = split_equals_delimiter(short);

        if aliases.is_empty() {
            return Err(TokenizeError::ZeroLength(token.to_string()));
        }

        let mut identifiers = Vec::default();

        for alias in aliases.chars() {
            let identifier = Identifier::Short(alias);

            if identifiers.contains(&identifier) {
                return Err(TokenizeError::RepeatedShortOption(alias));
            }

            identifiers.push(identifier);
        }

        (identifiers, remainder)
    } else {
        return Err(TokenizeError::OptionExpected(token.to_string()));
    };

    match remainder {
        Some(remainder) => cursor.defer(remainder),
        None => cursor.advance(),
    };

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Token '{token}' holds the bundle {identifiers:?}.");
    }

    Ok(Bundle { token, identifiers })
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}

/// The descriptors of a bundle, along with the single kind that governs its value read.
#[derive(Debug)]
pub(crate) struct Resolution<'d> {
    pub descriptors: Vec<&'d OptionDescriptor>,
    pub kind: ValueKind,
}

pub(crate) fn resolve<'d>(
    bundle: &Bundle<'_>,
    descriptors: &'d OptionDescriptors,
) -> Result<Resolution<'d>, TokenizeError> {
    let mut resolved = Vec::default();

    for identifier in &bundle.identifiers {
        let descriptor = match identifier {
            Identifier::Long(name) => descriptors.lookup(name),
            Identifier::Short(alias) => descriptors.lookup_alias(*alias),
        };

        match descriptor {
            Some(descriptor) => resolved.push(descriptor),
            None => return Err(TokenizeError::UndefinedOption(identifier.to_string())),
        };
    }

    let kinds: Vec<ValueKind> = resolved.iter().map(|d| d.kind()).collect();
    let kind = governing_kind(&kinds);

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Bundle '{}' declares {kinds:?}, governed by {kind}.", bundle.token);
    }

    Ok(Resolution {
        descriptors: resolved,
        kind,
    })
}

/// Settle the declared kinds of a bundle onto the one kind its shared value is read as.
///
/// The largest single kind and the largest vector kind are compared by their bit encoding,
/// so `String` < `Flag` < `Integer` < `Real`, and `StringVector` < `BoolVector` < `IntegerVector` < `RealVector`.
pub(crate) fn governing_kind(kinds: &[ValueKind]) -> ValueKind {
    if kinds.iter().all(|kind| kind == &ValueKind::Flag) {
        return ValueKind::Flag;
    }

    let single = kinds
        .iter()
        .copied()
        .filter(ValueKind::is_single)
        .max_by_key(ValueKind::bits);
    let multi = kinds
        .iter()
        .copied()
        .filter(ValueKind::is_vector)
        .max_by_key(ValueKind::bits);
    promote(single, multi)
}

fn promote(single: Option<ValueKind>, multi: Option<ValueKind>) -> ValueKind {
    match (multi, single) {
        (None, single) => single.unwrap_or(ValueKind::Flag),
        (Some(ValueKind::RealVector), _) => ValueKind::RealVector,
        (Some(_), Some(ValueKind::Real)) => ValueKind::RealVector,
        (Some(ValueKind::IntegerVector), _) => ValueKind::IntegerVector,
        (Some(_), Some(ValueKind::Integer)) => ValueKind::IntegerVector,
        (Some(multi), _) => multi,
    }
}
