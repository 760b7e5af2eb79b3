use aidocs_core::templates::Flavor;

use crate::output;

/// Print the bundled documents of one flavor, or of all of them.
pub fn run(flavor: Option<Flavor>) {
    let flavors = match flavor {
        Some(f) => vec![f],
        None => Flavor::ALL.to_vec(),
    };

    for flavor in flavors {
        output::print_header(&format!("aidocs templates: {flavor}"));
        for entry in flavor.entries() {
            println!(
                "  {:<42} {:<13} {}",
                entry.relative_path,
                entry.kind.as_str(),
                entry.description
            );
        }
    }
    println!();
}
