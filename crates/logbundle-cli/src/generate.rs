//! Generate command implementation

use crate::manifest::Manifest;
use anyhow::{Context, Result};
use logbundle_core::{DirectoryFiler, GeneratorConfig};
use std::path::Path;
use tracing::debug;

/// Command-line overrides applied on top of the manifest's generator section
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub impl_suffix: Option<String>,
    pub lenient: bool,
}

impl Overrides {
    /// Apply the overrides to a configuration
    pub fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(suffix) = &self.impl_suffix {
            config.impl_suffix = suffix.clone();
        }
        if self.lenient {
            config.strict_annotations = false;
        }
        config
    }
}

/// Run the generate command
pub fn run(manifest_path: Option<String>, output: &str, overrides: &Overrides) -> Result<()> {
    let path = manifest_path.unwrap_or_else(|| "logbundle.toml".to_string());

    println!("Generating from manifest: {}", path);

    let mut manifest = Manifest::from_file(&path)?;
    manifest.generator = overrides.apply(manifest.generator);
    manifest.validate()?;
    debug!(
        interfaces = manifest.interfaces.len(),
        bundles = manifest.bundle_count(),
        "loaded manifest"
    );

    let processor = manifest.processor()?;
    let mut filer = DirectoryFiler::new(output);
    let report = processor
        .process(&manifest.interfaces, &mut filer)
        .with_context(|| format!("Generation failed for {path}"))?;

    for unit in &report.units {
        println!(
            "✓ {} ({} methods) -> {}",
            unit.qualified_name,
            unit.method_count,
            filer.path_for(&unit.qualified_name).display()
        );
    }
    println!(
        "\nGenerated {} classes, {} methods, {} message ids into {}",
        report.units.len(),
        report.total_methods(),
        report.message_ids,
        Path::new(output).display()
    );

    Ok(())
}
