//! CLI commands for country scaffolding

use std::path::{Path, PathBuf};

use anyhow::Context;
use hoiforge::mods::{
    generate_country_with_progress, CountryDefinition, GraphicalCulture, ModDescriptor, Rgb,
};

/// Resolve the target mod directory from a descriptor or an explicit path
fn resolve_mod_root(descriptor: Option<&Path>, mod_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    match (descriptor, mod_path) {
        (Some(file), _) => {
            let parsed = ModDescriptor::from_file(file)
                .with_context(|| format!("Failed to read mod descriptor {}", file.display()))?;
            Ok(parsed.resolve_root(file))
        }
        (None, Some(path)) => Ok(path.to_path_buf()),
        (None, None) => Err(hoiforge::Error::ModPathNotSet.into()),
    }
}

pub fn execute(
    tag: &str,
    name: &str,
    color: Rgb,
    culture: GraphicalCulture,
    descriptor: Option<&Path>,
    mod_path: Option<&Path>,
) -> anyhow::Result<()> {
    let definition = CountryDefinition::new(tag, name, color, culture)?;
    let mod_root = resolve_mod_root(descriptor, mod_path)?;

    let out = generate_country_with_progress(&mod_root, &definition, &|progress| {
        tracing::debug!(
            "[{}/{}] {}",
            progress.current,
            progress.total,
            progress.step.as_str()
        );
    })?;

    println!(
        "✓ Created country {} ({}) with color {} and {} culture",
        definition.name,
        definition.tag,
        definition.color.to_hex(),
        definition.culture
    );
    for file in [&out.country_file, &out.history_file, &out.colors_file, &out.tags_file] {
        println!("  {}", file.display());
    }

    Ok(())
}

pub fn list_cultures() {
    println!("Graphical cultures:");
    for culture in GraphicalCulture::ALL {
        println!(
            "  {:<18} {:<24} {} / {}",
            culture.key(),
            culture.label(),
            culture.gfx_3d(),
            culture.gfx_2d()
        );
    }
}
