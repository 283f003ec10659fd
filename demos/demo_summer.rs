use optbundle::{OptionDescriptor, OptionDescriptors, Options, ValueKind};

fn main() {
    let descriptors = OptionDescriptors::new()
        .insert(OptionDescriptor::new('i', "items", ValueKind::IntegerVector))
        .insert(OptionDescriptor::new('v', "verbose", ValueKind::Flag));

    let options = Options::parse_env(&descriptors);

    if let Err(error) = options.check() {
        eprintln!("{error}");
        std::process::exit(1);
    }

    let items = options.option("items").as_integer_vector();
    let sum: i64 = items.iter().sum();

    if options.short('v').as_bool() {
        println!("Items: {items:?}");
    }

    println!("Sum: {sum}");
}
