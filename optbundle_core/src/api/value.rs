use thiserror::Error;

use crate::matcher::Cursor;
use crate::model::ValueKind;

/// The value parsed for an option.
///
/// Every value answers every projection (`as_string`, `as_bool`, .., `as_real_vector`).
/// Projections that have no natural meaning for a value answer a fixed default rather than fail:
/// * `Unexisted` projects to `""`, `false`, `0`, `0.0` and empty vectors.
/// * Single values project to their vector forms as one element vectors.
/// * Vector values project to their single forms via their first element.
/// * `String` values project to `true`, and to the number they spell (or `0`).
///
/// Callers should not infer the declared kind of an option from a projection; use [`OptionValue::kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// No value, for options that were not parsed.
    Unexisted,
    /// A flag value.
    Flag(bool),
    /// An integer value.
    Integer(i64),
    /// A real value.
    Real(f64),
    /// A non-empty string value.
    String(String),
    /// A non-empty run of booleans.
    BoolVector(Vec<bool>),
    /// A non-empty run of integers.
    IntegerVector(Vec<i64>),
    /// A non-empty run of reals.
    RealVector(Vec<f64>),
    /// A non-empty run of non-empty strings.
    StringVector(Vec<String>),
}

pub(crate) static UNEXISTED: OptionValue = OptionValue::Unexisted;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ReadError {
    #[error("expected {target}, but the arguments ended.")]
    Exhausted { target: &'static str },

    #[error("cannot convert '{token}' to {target}.")]
    InvalidConversion { token: String, target: &'static str },

    #[error("expected at least one {target}.")]
    Empty { target: &'static str },
}

impl OptionValue {
    /// Read a value of `kind` from the tokens at the cursor.
    ///
    /// On failure nothing is consumed: the cursor is restored to where it started.
    pub(crate) fn read(kind: ValueKind, cursor: &mut Cursor<'_>) -> Result<Self, ReadError> {
        let snapshot = cursor.snapshot();
        let result = match kind {
            ValueKind::Unexisted => Ok(OptionValue::Unexisted),
            ValueKind::Flag => Ok(OptionValue::Flag(read_flag(cursor))),
            ValueKind::Integer => {
                read_single(cursor, "integer", parse_integer).map(OptionValue::Integer)
            }
            ValueKind::Real => read_single(cursor, "real", parse_real).map(OptionValue::Real),
            ValueKind::String => {
                read_single(cursor, "string", parse_string).map(OptionValue::String)
            }
            ValueKind::BoolVector => read_run(cursor, "bool", parse_bool).map(OptionValue::BoolVector),
            ValueKind::IntegerVector => {
                read_run(cursor, "integer", parse_integer).map(OptionValue::IntegerVector)
            }
            ValueKind::RealVector => {
                read_run(cursor, "real", parse_real).map(OptionValue::RealVector)
            }
            ValueKind::StringVector => {
                read_run(cursor, "string", parse_string).map(OptionValue::StringVector)
            }
        };

        if result.is_err() {
            cursor.restore(snapshot);
        }

        result
    }

    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            OptionValue::Unexisted => ValueKind::Unexisted,
            OptionValue::Flag(_) => ValueKind::Flag,
            OptionValue::Integer(_) => ValueKind::Integer,
            OptionValue::Real(_) => ValueKind::Real,
            OptionValue::String(_) => ValueKind::String,
            OptionValue::BoolVector(_) => ValueKind::BoolVector,
            OptionValue::IntegerVector(_) => ValueKind::IntegerVector,
            OptionValue::RealVector(_) => ValueKind::RealVector,
            OptionValue::StringVector(_) => ValueKind::StringVector,
        }
    }

    /// Whether this is a parsed value (anything but `Unexisted`).
    pub fn is_present(&self) -> bool {
        self != &OptionValue::Unexisted
    }

    /// Project to a string.
    /// Flags answer `"true"`/`"false"`; reals answer the shortest text that parses back to the same real.
    pub fn as_string(&self) -> String {
        match self {
            OptionValue::Unexisted => String::default(),
            OptionValue::Flag(value) => value.to_string(),
            OptionValue::Integer(value) => value.to_string(),
            OptionValue::Real(value) => value.to_string(),
            OptionValue::String(value) => value.clone(),
            vector => vector.first().map(|v| v.as_string()).unwrap_or_default(),
        }
    }

    /// Project to a boolean: numbers answer whether they are non-zero, strings answer `true`.
    pub fn as_bool(&self) -> bool {
        match self {
            OptionValue::Unexisted => false,
            OptionValue::Flag(value) => *value,
            OptionValue::Integer(value) => *value != 0,
            OptionValue::Real(value) => *value != 0.0,
            OptionValue::String(_) => true,
            vector => vector.first().map(|v| v.as_bool()).unwrap_or_default(),
        }
    }

    /// Project to an integer: reals truncate toward zero, flags answer `1`/`0`.
    pub fn as_integer(&self) -> i64 {
        match self {
            OptionValue::Unexisted => 0,
            OptionValue::Flag(value) => i64::from(*value),
            OptionValue::Integer(value) => *value,
            OptionValue::Real(value) => *value as i64,
            OptionValue::String(value) => parse_integer(value).unwrap_or_default(),
            vector => vector.first().map(|v| v.as_integer()).unwrap_or_default(),
        }
    }

    /// Project to a real: flags answer `1.0`/`0.0`.
    pub fn as_real(&self) -> f64 {
        match self {
            OptionValue::Unexisted => 0.0,
            OptionValue::Flag(value) => f64::from(u8::from(*value)),
            OptionValue::Integer(value) => *value as f64,
            OptionValue::Real(value) => *value,
            OptionValue::String(value) => parse_real(value).unwrap_or_default(),
            vector => vector.first().map(|v| v.as_real()).unwrap_or_default(),
        }
    }

    /// Project to a vector of strings, element-wise.
    pub fn as_string_vector(&self) -> Vec<String> {
        match self {
            OptionValue::StringVector(values) => values.clone(),
            other => other.elements().iter().map(OptionValue::as_string).collect(),
        }
    }

    /// Project to a vector of booleans, element-wise.
    pub fn as_bool_vector(&self) -> Vec<bool> {
        match self {
            OptionValue::BoolVector(values) => values.clone(),
            other => other.elements().iter().map(OptionValue::as_bool).collect(),
        }
    }

    /// Project to a vector of integers, element-wise.
    pub fn as_integer_vector(&self) -> Vec<i64> {
        match self {
            OptionValue::IntegerVector(values) => values.clone(),
            other => other.elements().iter().map(OptionValue::as_integer).collect(),
        }
    }

    /// Project to a vector of reals, element-wise.
    pub fn as_real_vector(&self) -> Vec<f64> {
        match self {
            OptionValue::RealVector(values) => values.clone(),
            other => other.elements().iter().map(OptionValue::as_real).collect(),
        }
    }

    // The first element of a vector value, as a single value.
    fn first(&self) -> Option<OptionValue> {
        match self {
            OptionValue::BoolVector(values) => values.first().copied().map(OptionValue::Flag),
            OptionValue::IntegerVector(values) => {
                values.first().copied().map(OptionValue::Integer)
            }
            OptionValue::RealVector(values) => values.first().copied().map(OptionValue::Real),
            OptionValue::StringVector(values) => values.first().cloned().map(OptionValue::String),
            _ => None,
        }
    }

    // The elements of this value, each as a single value.
    fn elements(&self) -> Vec<OptionValue> {
        match self {
            OptionValue::Unexisted => Vec::default(),
            OptionValue::Flag(_)
            | OptionValue::Integer(_)
            | OptionValue::Real(_)
            | OptionValue::String(_) => vec![self.clone()],
            OptionValue::BoolVector(values) => {
                values.iter().copied().map(OptionValue::Flag).collect()
            }
            OptionValue::IntegerVector(values) => {
                values.iter().copied().map(OptionValue::Integer).collect()
            }
            OptionValue::RealVector(values) => {
                values.iter().copied().map(OptionValue::Real).collect()
            }
            OptionValue::StringVector(values) => {
                values.iter().cloned().map(OptionValue::String).collect()
            }
        }
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind().is_vector() {
            write!(f, "{}", self.as_string_vector().join(" "))
        } else {
            write!(f, "{}", self.as_string())
        }
    }
}

// A flag may be followed by an explicit literal; any other token is left for the next bundle.
fn read_flag(cursor: &mut Cursor<'_>) -> bool {
    match cursor.current() {
        Some("true") => {
            cursor.advance();
            true
        }
        Some("false") => {
            cursor.advance();
            false
        }
        _ => true,
    }
}

fn read_single<T>(
    cursor: &mut Cursor<'_>,
    target: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, ReadError> {
    let token = cursor.current().ok_or(ReadError::Exhausted { target })?;
    let value = parse(token).ok_or_else(|| ReadError::InvalidConversion {
        token: token.to_string(),
        target,
    })?;
    cursor.advance();
    Ok(value)
}

fn read_run<T>(
    cursor: &mut Cursor<'_>,
    target: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<Vec<T>, ReadError> {
    let mut values = Vec::default();

    while let Some(token) = cursor.run_token() {
        let value = parse(token).ok_or_else(|| ReadError::InvalidConversion {
            token: token.to_string(),
            target,
        })?;
        values.push(value);
        cursor.advance();
    }

    if values.is_empty() {
        Err(ReadError::Empty { target })
    } else {
        Ok(values)
    }
}

/// Parse a base-10 integer, with an optional leading sign.
pub(crate) fn parse_integer(token: &str) -> Option<i64> {
    match token.chars().next() {
        Some(c) if c.is_ascii_digit() || c == '+' || c == '-' => token.parse().ok(),
        _ => None,
    }
}

/// Parse a finite floating point literal.
/// The accepted grammar is Rust's `f64::from_str`: no surrounding whitespace, and no hexadecimal forms (ex: `0x1p3`).
pub(crate) fn parse_real(token: &str) -> Option<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value: &f64| value.is_finite())
}

fn parse_string(token: &str) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

fn parse_bool(token: &str) -> Option<bool> {
    match token {
        "true" | "True" => Some(true),
        "false" | "False" => Some(false),
        _ => None,
    }
}
