use crate::api::{OptionDescriptors, OptionValue, Options};
use crate::matcher::{resolve, tokenize, Cursor};
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Drive the bundles of `tokens` (skipping the program name at index 0) against the descriptor table.
///
/// Each bundle is tokenized, resolved to its governing kind, and then reads one shared value.
/// The first grammar or value error stops the parse; bindings committed before it are kept.
pub(crate) fn parse_tokens(descriptors: &OptionDescriptors, tokens: &[&str]) -> Options {
    let mut options = Options::default();

    if !descriptors.valid() {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Refusing to parse against an invalid descriptor table.");
        }

        for line in descriptors.errors() {
            options.fail(line.clone());
        }

        return options;
    }

    let mut cursor = Cursor::new(tokens, 1);

    while !cursor.is_exhausted() {
        if let Err(error) = parse_bundle(descriptors, &mut cursor, &mut options) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Parse stopped at index {}: {error}.", cursor.index());
            }

            options.fail(error.message());
            break;
        }
    }

    options
}

fn parse_bundle(
    descriptors: &OptionDescriptors,
    cursor: &mut Cursor<'_>,
    options: &mut Options,
) -> Result<(), ParseError> {
    let bundle = tokenize(cursor)?;
    let resolution = resolve(&bundle, descriptors)?;
    let value = OptionValue::read(resolution.kind, cursor).map_err(|error| {
        ParseError(format!(
            "Failed to read argument for '{}': {error}",
            bundle.token
        ))
    })?;

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Bound '{}' to {} value '{value}'.",
            bundle.token,
            value.kind()
        );
    }

    options.bind(&resolution.descriptors, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OptionDescriptor;
    use crate::model::ValueKind;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn descriptors() -> OptionDescriptors {
        OptionDescriptors::new()
            .insert(OptionDescriptor::new('t', "test", ValueKind::IntegerVector))
            .insert(OptionDescriptor::new('e', "est", ValueKind::Flag))
            .insert(OptionDescriptor::new('d', "day", ValueKind::String))
            .insert(OptionDescriptor::new('f', "fraction", ValueKind::Real))
    }

    #[test]
    fn empty() {
        // Setup
        let tokens = vec!["program"];

        // Execute
        let options = parse_tokens(&descriptors(), &tokens);

        // Verify
        assert!(options.valid());
        assert!(options.is_empty());
    }

    #[test]
    fn vector_stops_at_option() {
        // Setup
        let tokens = vec!["program", "--test", "12", "13", "-e"];

        // Execute
        let options = parse_tokens(&descriptors(), &tokens);

        // Verify
        assert!(options.valid(), "{}", options.error());
        assert_eq!(options.option("test").as_integer_vector(), vec![12, 13]);
        assert!(options.short('e').as_bool());
    }

    #[test]
    fn bundle_shares_value() {
        // Setup
        let descriptors = OptionDescriptors::new()
            .insert(OptionDescriptor::new('d', "download", ValueKind::StringVector))
            .insert(OptionDescriptor::new('e', "execute", ValueKind::String))
            .insert(OptionDescriptor::new('f', "friendly", ValueKind::Flag))
            .insert(OptionDescriptor::new('i', "interactive", ValueKind::Flag));
        let tokens = vec!["program", "-defi", "demotest"];

        // Execute
        let options = parse_tokens(&descriptors, &tokens);

        // Verify
        assert!(options.valid(), "{}", options.error());
        assert_eq!(options.len(), 4);
        for alias in ['d', 'e', 'f', 'i'] {
            let option = options.short(alias);
            assert_eq!(option.kind(), ValueKind::StringVector);
            assert_eq!(option.as_string(), "demotest");
        }
        assert!(std::ptr::eq(
            options.option("download").value(),
            options.option("interactive").value()
        ));
    }

    #[test]
    fn bundle_promotes() {
        // Setup
        let tokens = vec!["program", "-ef", "2.5"];

        // Execute
        let options = parse_tokens(&descriptors(), &tokens);

        // Verify
        assert!(options.valid(), "{}", options.error());
        assert_eq!(options.short('e').kind(), ValueKind::Real);
        assert_eq!(options.short('e').as_real(), 2.5);
        assert!(options.option("est").as_bool());
    }

    #[test]
    fn bundle_string_flag_reads_flag() {
        // Setup
        let descriptors = OptionDescriptors::new()
            .insert(OptionDescriptor::new('e', "execute", ValueKind::String))
            .insert(OptionDescriptor::new('f', "friendly", ValueKind::Flag));
        let tokens = vec!["program", "-ef", "value"];

        // Execute
        let options = parse_tokens(&descriptors, &tokens);

        // Verify
        assert!(!options.valid());
        assert_eq!(options.error(), "Option expected: 'value'.\n");
        assert_eq!(options.short('e').kind(), ValueKind::Flag);
        assert!(options.option("execute").as_bool());
        assert!(std::ptr::eq(
            options.short('e').value(),
            options.short('f').value()
        ));
    }

    #[test]
    fn bundle_string_flag_literal() {
        // Setup
        let descriptors = OptionDescriptors::new()
            .insert(OptionDescriptor::new('e', "execute", ValueKind::String))
            .insert(OptionDescriptor::new('f', "friendly", ValueKind::Flag));
        let tokens = vec!["program", "-ef=false"];

        // Execute
        let options = parse_tokens(&descriptors, &tokens);

        // Verify
        assert!(options.valid(), "{}", options.error());
        assert_eq!(options.short('f').kind(), ValueKind::Flag);
        assert!(!options.short('e').as_bool());
    }

    #[rstest]
    #[case(vec!["program", "-e"], true)]
    #[case(vec!["program", "-e", "true"], true)]
    #[case(vec!["program", "-e", "false"], false)]
    #[case(vec!["program", "-e=true"], true)]
    #[case(vec!["program", "--est=false"], false)]
    fn flags(#[case] tokens: Vec<&str>, #[case] expected: bool) {
        // Execute
        let options = parse_tokens(&descriptors(), &tokens);

        // Verify
        assert!(options.valid(), "{}", options.error());
        assert_eq!(options.short('e').as_bool(), expected);
    }

    #[rstest]
    #[case(vec!["program", "-e=yes"], "Option expected: 'yes'.")]
    #[case(vec!["program", "-e", "yes"], "Option expected: 'yes'.")]
    #[case(vec!["program", "stray"], "Option expected: 'stray'.")]
    #[case(vec!["program", "--"], "Zero length option: '--'.")]
    #[case(vec!["program", "-ee"], "Same option multiple times: 'e'.")]
    #[case(vec!["program", "-x"], "Undefined option: 'x'.")]
    #[case(vec!["program", "--tes"], "Undefined option: 'tes'.")]
    #[case(
        vec!["program", "--fraction", "abc"],
        "Failed to read argument for '--fraction': cannot convert 'abc' to real."
    )]
    #[case(
        vec!["program", "--day"],
        "Failed to read argument for '--day': expected string, but the arguments ended."
    )]
    #[case(
        vec!["program", "-t", "-e"],
        "Failed to read argument for '-t': expected at least one integer."
    )]
    fn fail_fast(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Execute
        let options = parse_tokens(&descriptors(), &tokens);

        // Verify
        assert!(!options.valid());
        assert_eq!(options.error(), format!("{expected}\n"));
    }

    #[test]
    fn keeps_committed_bindings() {
        // Setup
        let tokens = vec!["program", "-d", "monday", "-x", "-e"];

        // Execute
        let options = parse_tokens(&descriptors(), &tokens);

        // Verify
        assert!(!options.valid());
        assert_eq!(options.short('d').as_string(), "monday");
        assert!(!options.contains('e'));
    }

    #[test]
    fn invalid_table() {
        // Setup
        let descriptors = descriptors()
            .insert(OptionDescriptor::long("x", ValueKind::Flag))
            .insert(OptionDescriptor::short('t', ValueKind::Flag));
        let tokens = vec!["program", "-e"];

        // Execute
        let options = parse_tokens(&descriptors, &tokens);

        // Verify
        assert!(!options.valid());
        assert!(options.is_empty());
        assert_eq!(options.error(), descriptors.error());
        assert_contains!(options.error(), "Long option length cannot be 1: 'x'.");
        assert_contains!(
            options.error(),
            "Multiple option descriptors with the same short option: 't'."
        );
    }
}
