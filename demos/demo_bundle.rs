use optbundle::{OptionDescriptor, OptionDescriptors, Options, ValueKind};

fn main() {
    let descriptors = OptionDescriptors::new()
        .insert(OptionDescriptor::new('d', "download", ValueKind::StringVector))
        .insert(OptionDescriptor::new('e', "execute", ValueKind::String))
        .insert(OptionDescriptor::new('f', "friendly", ValueKind::Flag))
        .insert(OptionDescriptor::new('r', "retries", ValueKind::Integer));

    if let Err(error) = descriptors.check() {
        eprintln!("{error}");
        std::process::exit(1);
    }

    let options = Options::parse_env(&descriptors);

    if let Err(error) = options.check() {
        eprintln!("{error}");
        std::process::exit(1);
    }

    for option in options.iter() {
        println!(
            "{}: {} '{}'",
            option.name(),
            option.kind(),
            option.value()
        );
    }
}
