use thiserror::Error;

use crate::model::ValueKind;
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The declared grammar of one option: a short alias, a long name, and the kind of value it reads.
///
/// Either of the alias or the name may be left out (but not both).
/// Names must be empty, or at least 2 characters long.
///
/// ### Example
/// ```
/// # use optbundle_core::{OptionDescriptor, ValueKind};
/// let verbose = OptionDescriptor::new('v', "verbose", ValueKind::Flag);
/// assert_eq!(verbose.alias(), Some('v'));
/// assert_eq!(verbose.name(), "verbose");
///
/// let count = OptionDescriptor::long("count", ValueKind::Integer);
/// assert_eq!(count.alias(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    alias: Option<char>,
    name: String,
    kind: ValueKind,
}

impl OptionDescriptor {
    /// Create a descriptor with both a short alias and a long name.
    /// An empty `name` declares an alias-only option.
    pub fn new(alias: char, name: impl Into<String>, kind: ValueKind) -> Self {
        Self::from_parts(Some(alias), name, kind)
    }

    /// Create a descriptor reachable only via its short alias (ex: `-v`).
    pub fn short(alias: char, kind: ValueKind) -> Self {
        Self::from_parts(Some(alias), String::default(), kind)
    }

    /// Create a descriptor reachable only via its long name (ex: `--verbose`).
    pub fn long(name: impl Into<String>, kind: ValueKind) -> Self {
        Self::from_parts(None, name, kind)
    }

    /// Create a descriptor from an optional alias and a (possibly empty) name.
    pub fn from_parts(alias: Option<char>, name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            alias,
            name: name.into(),
            kind,
        }
    }

    /// The short alias, if any.
    pub fn alias(&self) -> Option<char> {
        self.alias
    }

    /// The long name, or the empty string.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared value kind.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

impl std::fmt::Display for OptionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.alias, self.name.is_empty()) {
            (Some(alias), false) => write!(f, "-{alias}, --{}", self.name),
            (Some(alias), true) => write!(f, "-{alias}"),
            (None, false) => write!(f, "--{}", self.name),
            (None, true) => write!(f, "<anonymous>"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum DescriptorError {
    #[error("Long option length cannot be 1: '{0}'.")]
    InvalidName(String),

    #[error("Multiple option descriptors with the same short option: '{0}'.")]
    DuplicateAlias(char),

    #[error("Multiple option descriptors with the same long option: '{0}'.")]
    DuplicateName(String),

    #[error("Option descriptor #{0} has neither a short nor a long option.")]
    Anonymous(usize),

    #[error("Option descriptor #{0} cannot declare the unexisted value kind.")]
    Unexisted(usize),
}

/// The table of option descriptors a parse runs against.
///
/// The table validates itself upon every `insert`.
/// All violations are reported (see [`OptionDescriptors::error`]), one line each:
/// * duplicate short aliases,
/// * duplicate long names,
/// * long names of length 1,
/// * descriptors with neither an alias nor a name,
/// * descriptors declaring [`ValueKind::Unexisted`].
///
/// ### Example
/// ```
/// # use optbundle_core::{OptionDescriptor, OptionDescriptors, ValueKind};
/// let descriptors = OptionDescriptors::new()
///     .insert(OptionDescriptor::new('t', "test", ValueKind::Flag))
///     .insert(OptionDescriptor::new('t', "tag", ValueKind::String));
///
/// assert!(!descriptors.valid());
/// assert_eq!(
///     descriptors.error(),
///     "Multiple option descriptors with the same short option: 't'.\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionDescriptors {
    descriptors: Vec<OptionDescriptor>,
    errors: Vec<String>,
}

impl OptionDescriptors {
    /// Create an empty (and valid) table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor, and re-validate the table.
    pub fn insert(mut self, descriptor: OptionDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self.validate();
        self
    }

    /// Recompute the validity of the table.
    pub fn validate(&mut self) {
        self.errors = violations(&self.descriptors)
            .into_iter()
            .map(|error| error.to_string())
            .collect();

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Validated {} descriptors: {} violations.",
                self.descriptors.len(),
                self.errors.len()
            );
        }
    }

    pub(crate) fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether the table is internally consistent.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The violations found in the table, one newline terminated line each.
    /// Empty when the table is valid.
    pub fn error(&self) -> String {
        self.errors
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }

    /// Convert the validity of the table into a `Result`.
    ///
    /// ### Example
    /// ```
    /// # use optbundle_core::{OptionDescriptor, OptionDescriptors, ValueKind};
    /// let descriptors = OptionDescriptors::new()
    ///     .insert(OptionDescriptor::long("x", ValueKind::Flag));
    ///
    /// let error = descriptors.check().unwrap_err();
    /// assert_eq!(error.to_string(), "Config error: Long option length cannot be 1: 'x'.");
    /// ```
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.valid() {
            Ok(())
        } else {
            Err(ConfigError(self.errors.join("\n")))
        }
    }

    /// Find the descriptor for a query.
    /// Single character queries match the short alias, while longer queries match the long name.
    /// Only exact matches are found.
    pub fn lookup(&self, query: &str) -> Option<&OptionDescriptor> {
        let mut chars = query.chars();

        match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(alias), None) => self.lookup_alias(alias),
            (Some(_), Some(_)) => self.lookup_name(query),
        }
    }

    /// Find the descriptor by its short alias.
    pub fn lookup_alias(&self, alias: char) -> Option<&OptionDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.alias == Some(alias))
    }

    /// Find the descriptor by its long name.
    pub fn lookup_name(&self, name: &str) -> Option<&OptionDescriptor> {
        if name.is_empty() {
            return None;
        }

        self.descriptors
            .iter()
            .find(|descriptor| descriptor.name == name)
    }

    /// Iterate the descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.descriptors.iter()
    }

    /// The number of descriptors in the table.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the table holds no descriptors.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl FromIterator<OptionDescriptor> for OptionDescriptors {
    fn from_iter<I: IntoIterator<Item = OptionDescriptor>>(iter: I) -> Self {
        let mut descriptors = Self {
            descriptors: iter.into_iter().collect(),
            errors: Vec::default(),
        };
        descriptors.validate();
        descriptors
    }
}

fn violations(descriptors: &[OptionDescriptor]) -> Vec<DescriptorError> {
    let mut errors = Vec::default();

    for (index, descriptor) in descriptors.iter().enumerate() {
        let earlier = &descriptors[..index];

        if descriptor.name.chars().count() == 1 {
            errors.push(DescriptorError::InvalidName(descriptor.name.clone()));
        }

        if descriptor.alias.is_none() && descriptor.name.is_empty() {
            errors.push(DescriptorError::Anonymous(index));
        }

        if descriptor.kind == ValueKind::Unexisted {
            errors.push(DescriptorError::Unexisted(index));
        }

        if let Some(alias) = descriptor.alias {
            if earlier.iter().any(|other| other.alias == Some(alias)) {
                errors.push(DescriptorError::DuplicateAlias(alias));
            }
        }

        if !descriptor.name.is_empty() && earlier.iter().any(|other| other.name == descriptor.name)
        {
            errors.push(DescriptorError::DuplicateName(descriptor.name.clone()));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[test]
    fn empty_valid() {
        let descriptors = OptionDescriptors::new();
        assert!(descriptors.valid());
        assert!(descriptors.is_empty());
        assert_eq!(descriptors.error(), "");
        descriptors.check().unwrap();
    }

    #[test]
    fn insert_valid() {
        let descriptors = OptionDescriptors::new()
            .insert(OptionDescriptor::new('t', "test", ValueKind::Integer))
            .insert(OptionDescriptor::short('e', ValueKind::Flag))
            .insert(OptionDescriptor::long("est", ValueKind::RealVector));

        assert!(descriptors.valid());
        assert_eq!(descriptors.len(), 3);
        let kinds: Vec<ValueKind> = descriptors.iter().map(|d| d.kind()).collect();
        assert_eq!(
            kinds,
            vec![ValueKind::Integer, ValueKind::Flag, ValueKind::RealVector]
        );
    }

    #[test]
    fn duplicate_alias() {
        let descriptors = OptionDescriptors::new()
            .insert(OptionDescriptor::new('t', "test", ValueKind::Flag))
            .insert(OptionDescriptor::new('t', "est", ValueKind::Flag));

        assert!(!descriptors.valid());
        assert_contains!(descriptors.error(), "'t'");
        assert_eq!(
            descriptors.error(),
            "Multiple option descriptors with the same short option: 't'.\n"
        );
    }

    #[test]
    fn duplicate_name() {
        let descriptors = OptionDescriptors::new()
            .insert(OptionDescriptor::new('t', "test", ValueKind::Flag))
            .insert(OptionDescriptor::new('e', "test", ValueKind::Flag));

        assert!(!descriptors.valid());
        assert_eq!(
            descriptors.error(),
            "Multiple option descriptors with the same long option: 'test'.\n"
        );
    }

    #[test]
    fn empty_names_not_duplicate() {
        let descriptors = OptionDescriptors::new()
            .insert(OptionDescriptor::new('t', "", ValueKind::Flag))
            .insert(OptionDescriptor::new('e', "", ValueKind::Flag));

        assert!(descriptors.valid());
    }

    #[test]
    fn all_violations_reported() {
        let descriptors = OptionDescriptors::new()
            .insert(OptionDescriptor::new('a', "x", ValueKind::Flag))
            .insert(OptionDescriptor::new('a', "apple", ValueKind::Flag))
            .insert(OptionDescriptor::new('b', "apple", ValueKind::Flag))
            .insert(OptionDescriptor::from_parts(None, "", ValueKind::Flag))
            .insert(OptionDescriptor::short('c', ValueKind::Unexisted));

        assert!(!descriptors.valid());
        assert_eq!(
            descriptors.error(),
            "Long option length cannot be 1: 'x'.\n\
             Multiple option descriptors with the same short option: 'a'.\n\
             Multiple option descriptors with the same long option: 'apple'.\n\
             Option descriptor #3 has neither a short nor a long option.\n\
             Option descriptor #4 cannot declare the unexisted value kind.\n"
        );
    }

    #[test]
    fn check_invalid() {
        let descriptors = OptionDescriptors::new()
            .insert(OptionDescriptor::new('a', "apple", ValueKind::Flag))
            .insert(OptionDescriptor::new('a', "apple", ValueKind::Flag));

        assert_matches!(descriptors.check(), Err(ConfigError(message)) => {
            assert_eq!(
                message,
                "Multiple option descriptors with the same short option: 'a'.\n\
                 Multiple option descriptors with the same long option: 'apple'."
            );
        });
    }

    #[test]
    fn collect() {
        let descriptors: OptionDescriptors = vec![
            OptionDescriptor::short('a', ValueKind::Flag),
            OptionDescriptor::short('a', ValueKind::Flag),
        ]
        .into_iter()
        .collect();

        assert!(!descriptors.valid());
        assert_eq!(descriptors.len(), 2);
    }

    #[rstest]
    #[case("t", Some("test"))]
    #[case("test", Some("test"))]
    #[case("e", Some(""))]
    #[case("est", Some("est"))]
    #[case("", None)]
    #[case("te", None)]
    #[case("tes", None)]
    #[case("x", None)]
    #[case("testing", None)]
    fn lookup(#[case] query: &str, #[case] expected: Option<&str>) {
        let descriptors = OptionDescriptors::new()
            .insert(OptionDescriptor::new('t', "test", ValueKind::Flag))
            .insert(OptionDescriptor::short('e', ValueKind::Flag))
            .insert(OptionDescriptor::long("est", ValueKind::Flag));

        assert_eq!(descriptors.lookup(query).map(|d| d.name()), expected);
    }

    #[test]
    fn lookup_alias_skips_long_only() {
        let descriptors =
            OptionDescriptors::new().insert(OptionDescriptor::long("est", ValueKind::Flag));

        assert_eq!(descriptors.lookup_alias('e'), None);
        assert_eq!(descriptors.lookup_name(""), None);
    }

    #[rstest]
    #[case(OptionDescriptor::new('v', "verbose", ValueKind::Flag), "-v, --verbose")]
    #[case(OptionDescriptor::short('v', ValueKind::Flag), "-v")]
    #[case(OptionDescriptor::long("verbose", ValueKind::Flag), "--verbose")]
    fn display(#[case] descriptor: OptionDescriptor, #[case] expected: &str) {
        assert_eq!(descriptor.to_string(), expected);
    }
}
