use std::path::Path;

use anyhow::Context;
use hoiforge::mods::ModDescriptor;

pub fn execute(descriptor_file: &Path) -> anyhow::Result<()> {
    let descriptor = ModDescriptor::from_file(descriptor_file)
        .with_context(|| format!("Failed to read mod descriptor {}", descriptor_file.display()))?;

    if let Some(name) = &descriptor.name {
        println!("Mod: {name}");
    }
    println!("{}", descriptor.resolve_root(descriptor_file).display());

    Ok(())
}
