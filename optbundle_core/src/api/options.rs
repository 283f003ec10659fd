use crate::api::value::UNEXISTED;
use crate::api::{OptionDescriptor, OptionDescriptors, OptionValue};
use crate::model::ValueKind;
use crate::parser::{parse_tokens, ParseError};

/// A query for a parsed option: either its short alias, or its long name.
///
/// Names of a single character are looked up as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKey<'k> {
    /// The short alias (ex: `'v'` for `-v`).
    Alias(char),
    /// The long name (ex: `"verbose"` for `--verbose`).
    Name(&'k str),
}

impl<'k> From<char> for OptionKey<'k> {
    fn from(alias: char) -> Self {
        OptionKey::Alias(alias)
    }
}

impl<'k> From<&'k str> for OptionKey<'k> {
    fn from(name: &'k str) -> Self {
        let mut chars = name.chars();

        match (chars.next(), chars.next()) {
            (Some(alias), None) => OptionKey::Alias(alias),
            _ => OptionKey::Name(name),
        }
    }
}

impl<'k> From<&'k String> for OptionKey<'k> {
    fn from(name: &'k String) -> Self {
        OptionKey::from(name.as_str())
    }
}

/// A parsed option: the alias & name it was declared with, and the value it was bound to.
///
/// Options parsed from the same bundle (ex: `-abc`) share one value.
/// Looking up an option that was not parsed gives the *absent* option, whose kind is [`ValueKind::Unexisted`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedOption<'a> {
    alias: Option<char>,
    name: &'a str,
    value: &'a OptionValue,
}

impl ParsedOption<'static> {
    /// The absent option.
    pub fn absent() -> Self {
        Self {
            alias: None,
            name: "",
            value: &UNEXISTED,
        }
    }
}

impl<'a> ParsedOption<'a> {
    /// The short alias, if declared.
    pub fn alias(&self) -> Option<char> {
        self.alias
    }

    /// The long name, or the empty string.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The shared value.
    pub fn value(&self) -> &'a OptionValue {
        self.value
    }

    /// The kind of the shared value.
    /// This is the kind the bundle was read as, which may differ from the declared kind.
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Whether the option was parsed.
    pub fn is_present(&self) -> bool {
        self.value.is_present()
    }

    /// See [`OptionValue::as_string`].
    pub fn as_string(&self) -> String {
        self.value.as_string()
    }

    /// See [`OptionValue::as_bool`].
    pub fn as_bool(&self) -> bool {
        self.value.as_bool()
    }

    /// See [`OptionValue::as_integer`].
    pub fn as_integer(&self) -> i64 {
        self.value.as_integer()
    }

    /// See [`OptionValue::as_real`].
    pub fn as_real(&self) -> f64 {
        self.value.as_real()
    }

    /// See [`OptionValue::as_string_vector`].
    pub fn as_string_vector(&self) -> Vec<String> {
        self.value.as_string_vector()
    }

    /// See [`OptionValue::as_bool_vector`].
    pub fn as_bool_vector(&self) -> Vec<bool> {
        self.value.as_bool_vector()
    }

    /// See [`OptionValue::as_integer_vector`].
    pub fn as_integer_vector(&self) -> Vec<i64> {
        self.value.as_integer_vector()
    }

    /// See [`OptionValue::as_real_vector`].
    pub fn as_real_vector(&self) -> Vec<f64> {
        self.value.as_real_vector()
    }
}

#[derive(Debug, Clone)]
struct Binding {
    alias: Option<char>,
    name: String,
    value: usize,
}

/// The result of parsing an argument vector against an [`OptionDescriptors`] table.
///
/// Parsing stops at the first error (see [`Options::error`]).
/// Options bound before the error remain available for lookup.
///
/// ### Example
/// ```
/// # use optbundle_core::{OptionDescriptor, OptionDescriptors, Options, ValueKind};
/// let descriptors = OptionDescriptors::new()
///     .insert(OptionDescriptor::new('n', "count", ValueKind::Integer))
///     .insert(OptionDescriptor::new('v', "verbose", ValueKind::Flag));
///
/// let options = Options::parse(&descriptors, &["program", "--count=3", "-v"]);
///
/// assert!(options.valid());
/// assert_eq!(options.short('n').as_integer(), 3);
/// assert!(options.option("verbose").as_bool());
/// assert!(!options.option("missing").is_present());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    bindings: Vec<Binding>,
    values: Vec<OptionValue>,
    errors: Vec<String>,
}

impl Options {
    /// Parse the argument vector `args` against `descriptors`.
    ///
    /// The first entry of `args` is the program name, and is never parsed.
    /// When `descriptors` is invalid nothing is parsed, and the result carries the table's errors.
    pub fn parse<S: AsRef<str>>(descriptors: &OptionDescriptors, args: &[S]) -> Self {
        let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        parse_tokens(descriptors, &tokens)
    }

    /// Parse the Cli [`std::env::args`] against `descriptors`.
    pub fn parse_env(descriptors: &OptionDescriptors) -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self::parse(descriptors, &args)
    }

    pub(crate) fn bind(&mut self, descriptors: &[&OptionDescriptor], value: OptionValue) {
        let index = self.values.len();
        self.values.push(value);

        for descriptor in descriptors {
            self.bindings.push(Binding {
                alias: descriptor.alias(),
                name: descriptor.name().to_string(),
                value: index,
            });
        }
    }

    pub(crate) fn fail(&mut self, line: impl Into<String>) {
        self.errors.push(line.into());
    }

    /// Whether the parse completed without error.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors of the parse, one newline terminated line each.
    /// Empty when the parse is valid.
    pub fn error(&self) -> String {
        self.errors
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }

    /// Convert the validity of the parse into a `Result`.
    pub fn check(&self) -> Result<(), ParseError> {
        if self.valid() {
            Ok(())
        } else {
            Err(ParseError(self.errors.join("\n")))
        }
    }

    /// Look up a parsed option by alias or name.
    /// When the option was not parsed, the [absent](ParsedOption::absent) option is returned.
    ///
    /// If an option was parsed more than once, its first binding is returned.
    pub fn get<'k>(&self, key: impl Into<OptionKey<'k>>) -> ParsedOption<'_> {
        let binding = match key.into() {
            OptionKey::Alias(alias) => self
                .bindings
                .iter()
                .find(|binding| binding.alias == Some(alias)),
            OptionKey::Name(name) if name.is_empty() => None,
            OptionKey::Name(name) => self.bindings.iter().find(|binding| binding.name == name),
        };

        match binding {
            Some(binding) => self.view(binding),
            None => ParsedOption::absent(),
        }
    }

    /// Look up a parsed option by its long name (or, for single character queries, its alias).
    pub fn option(&self, name: &str) -> ParsedOption<'_> {
        self.get(name)
    }

    /// Look up a parsed option by its short alias.
    pub fn short(&self, alias: char) -> ParsedOption<'_> {
        self.get(alias)
    }

    /// Whether an option was parsed.
    pub fn contains<'k>(&self, key: impl Into<OptionKey<'k>>) -> bool {
        self.get(key).is_present()
    }

    /// Iterate the parsed options, in the order they were bound.
    pub fn iter(&self) -> impl Iterator<Item = ParsedOption<'_>> {
        self.bindings.iter().map(|binding| self.view(binding))
    }

    /// The number of bindings (one per option identifier parsed).
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no options were parsed.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn view<'a>(&'a self, binding: &'a Binding) -> ParsedOption<'a> {
        ParsedOption {
            alias: binding.alias,
            name: &binding.name,
            value: &self.values[binding.value],
        }
    }
}
