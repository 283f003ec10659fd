/// The shape of value an option declares, or that a parsed option holds.
///
/// Kinds carry a bit-flag encoding (see [`ValueKind::bits`]), which also orders them when a bundle's kinds are promoted.
/// The four *single* kinds read at most one token, while the four *vector* kinds read a run of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// No value: the kind of an option that was not parsed.
    Unexisted,
    /// A single non-empty string.
    String,
    /// A zero-argument boolean, optionally followed by a literal `true`/`false`.
    Flag,
    /// A single base-10 integer.
    Integer,
    /// A single finite floating point number, in the grammar of `f64::from_str`.
    Real,
    /// A run of non-empty strings.
    StringVector,
    /// A run of `true`/`false` literals.
    BoolVector,
    /// A run of base-10 integers.
    IntegerVector,
    /// A run of floating point numbers.
    RealVector,
}

impl ValueKind {
    /// The bit-flag encoding of this kind.
    ///
    /// ### Example
    /// ```
    /// # use optbundle_core::ValueKind;
    /// assert_eq!(ValueKind::Unexisted.bits(), 0);
    /// assert_eq!(ValueKind::Integer.bits() | ValueKind::Real.bits(), 0b1100);
    /// ```
    pub fn bits(&self) -> u8 {
        match self {
            ValueKind::Unexisted => 0,
            ValueKind::String => 1 << 0,
            ValueKind::Flag => 1 << 1,
            ValueKind::Integer => 1 << 2,
            ValueKind::Real => 1 << 3,
            ValueKind::StringVector => 1 << 4,
            ValueKind::BoolVector => 1 << 5,
            ValueKind::IntegerVector => 1 << 6,
            ValueKind::RealVector => 1 << 7,
        }
    }

    /// Whether this kind reads at most one token.
    pub fn is_single(&self) -> bool {
        matches!(
            self,
            ValueKind::String | ValueKind::Flag | ValueKind::Integer | ValueKind::Real
        )
    }

    /// Whether this kind reads a run of tokens.
    pub fn is_vector(&self) -> bool {
        matches!(
            self,
            ValueKind::StringVector
                | ValueKind::BoolVector
                | ValueKind::IntegerVector
                | ValueKind::RealVector
        )
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Unexisted => "unexisted",
            ValueKind::String => "string",
            ValueKind::Flag => "flag",
            ValueKind::Integer => "integer",
            ValueKind::Real => "real",
            ValueKind::StringVector => "string vector",
            ValueKind::BoolVector => "bool vector",
            ValueKind::IntegerVector => "integer vector",
            ValueKind::RealVector => "real vector",
        };
        write!(f, "{name}")
    }
}
