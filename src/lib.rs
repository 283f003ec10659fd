//! `optbundle` is a descriptor table driven command line option parser for Rust.
//!
//! The program declares its options up front, as a table of [`OptionDescriptor`]s.
//! Each descriptor names an option by a short alias (`-v`), a long name (`--verbose`), or both, and declares the [`ValueKind`] it reads.
//! Parsing the argument vector against the table produces [`Options`]: a store of typed [`OptionValue`]s, looked up by alias or by name.
//!
//! `optbundle` prioritizes the following concerns:
//! * *Total lookup*:
//! Looking up an option is never an error.
//! An option absent from the Cli answers as the absent [`ParsedOption`], whose projections are `false`, `0`, `""` and so on.
//! * *Short option bundles*:
//! Several short options may share one token (ex: `-abc`) and, with it, one value.
//! The bundle's value is read by a single *governing* kind, promoted from the kinds its options declare.
//! * *Errors as values*:
//! Neither an inconsistent table nor a malformed Cli panics or exits.
//! Both surface as a validity flag plus an error message (or, via `check`, as a [`ConfigError`] / [`ParseError`]).
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/demo_summer.rs")]
//! ```
//!
//! ```console
//! $ summer --items 1 2 3
//! Sum: 6
//!
//! $ summer -vi=4 5
//! Items: [4, 5]
//! Sum: 9
//!
//! $ summer -i 1 -v -i 2
//! Items: [1]
//! Sum: 1
//!
//! $ summer -i -v
//! Parse error: Failed to read argument for '-i': expected at least one integer.
//!
//! $ summer -x
//! Parse error: Undefined option: 'x'.
//! ```
//!
//! Notice the third case: when an option is repeated, lookup answers its first binding.
//!
//! # Descriptor Table
//! Build the table via [`OptionDescriptors::insert`]; the table re-validates itself on every insert.
//! A table is invalid when any of the following hold (every violation is reported, one line each):
//! * two descriptors share a short alias,
//! * two descriptors share a long name,
//! * a long name is exactly 1 character,
//! * a descriptor has neither a short alias nor a long name,
//! * a descriptor declares [`ValueKind::Unexisted`].
//!
//! ```
//! # use optbundle::{OptionDescriptor, OptionDescriptors, ValueKind};
//! let descriptors = OptionDescriptors::new()
//!     .insert(OptionDescriptor::new('t', "test", ValueKind::Flag))
//!     .insert(OptionDescriptor::new('t', "x", ValueKind::Integer));
//!
//! assert!(!descriptors.valid());
//! assert_eq!(
//!     descriptors.error(),
//!     "Long option length cannot be 1: 'x'.\n\
//!      Multiple option descriptors with the same short option: 't'.\n"
//! );
//! ```
//!
//! Parsing against an invalid table parses nothing; the resulting [`Options`] carries the table's errors.
//!
//! # Cli Semantics
//! `optbundle` parses the Cli tokens (skipping the program name) according to the following rules.
//!
//! * Every bundle begins with an option token.
//! A token that does not start with `-` where an option is expected is an error.
//! There are no positional arguments, and no `--` end of options marker.
//! * `--NAME` names one option by its long name.
//! A `NAME` of exactly 1 character is looked up as a short alias instead.
//! * `-abc` names the options `a`, `b` and `c` by their short aliases.
//! The same alias may not repeat within one bundle.
//! * Either form may end with `=VALUE`.
//! Only the first `=` separates (ex: `--key=a=b` reads `a=b`).
//! The text after `=` is the first (and, for single values, only) token available to the bundle's value.
//! * A value is read right after its option token.
//! Single kinds read precisely 1 token, whatever it looks like (ex: `--offset -3`).
//! Vector kinds read greedily, stopping before the next token that starts with `-` (or is empty), and require at least 1 token.
//! * A [`ValueKind::Flag`] reads nothing, unless the next token is precisely `true` or `false`.
//! * Parsing stops at the first error.
//! Options bound before the error remain available.
//!
//! ### Kind Promotion
//! All options of a bundle share the one value read for the bundle.
//! The governing kind of the read is settled from the declared kinds, ranked by their bit encoding ([`ValueKind::bits`]):
//! ```console
//! Declared kinds                              | Governing kind
//! ------------------------------------------------------------------------------
//! only flags                                  | flag
//! single kinds only                           | highest of string < flag < integer < real
//! any vector kind & real                      | real vector
//! any vector kind & integer (no real)         | highest of the vectors, at least integer vector
//! vector kinds otherwise                      | highest of string < bool < integer < real vector
//! ```
//!
//! ```
//! # use optbundle::{OptionDescriptor, OptionDescriptors, Options, ValueKind};
//! let descriptors = OptionDescriptors::new()
//!     .insert(OptionDescriptor::new('d', "download", ValueKind::StringVector))
//!     .insert(OptionDescriptor::new('e', "execute", ValueKind::String))
//!     .insert(OptionDescriptor::new('f', "friendly", ValueKind::Flag));
//!
//! let options = Options::parse(&descriptors, &["program", "-def", "demotest"]);
//!
//! assert!(options.valid());
//! assert_eq!(options.short('f').kind(), ValueKind::StringVector);
//! assert_eq!(options.option("execute").as_string(), "demotest");
//! ```
//!
//! Notice a flag outranks a string: without a vector member, `-ef` above reads no value.
//!
//! ### Projections
//! Every [`OptionValue`] answers every projection, so callers read a bundled option by the type they expect.
//! Vectors answer single projections by their first element; single values answer vector projections as one element vectors.
//! Use [`OptionValue::kind`] to learn how a value was actually read.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while validating tables and parsing.
pub use optbundle_core::*;
