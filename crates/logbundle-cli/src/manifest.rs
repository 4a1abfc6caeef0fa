//! Declaration manifest parsing and validation

use anyhow::{Context, Result};
use logbundle_core::{GeneratorConfig, InterfaceElement, LogProcessor};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Manifest of resolved interface declarations, in TOML or JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default, rename = "interface", alias = "interfaces")]
    pub interfaces: Vec<InterfaceElement>,
}

impl Manifest {
    /// Load a manifest, choosing the format from the file extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {path:?}"))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let manifest = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        manifest.with_context(|| format!("Invalid manifest: {path:?}"))
    }

    /// Parse manifest from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML manifest")
    }

    /// Parse manifest from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse JSON manifest")
    }

    /// Number of interfaces carrying the bundle marker
    pub fn bundle_count(&self) -> usize {
        self.interfaces
            .iter()
            .filter(|i| i.log_bundle.is_some())
            .count()
    }

    /// Validate the manifest structure
    ///
    /// Semantic rules (annotation conflicts, duplicate ids, levels) are left
    /// to the generator.
    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;

        for interface in &self.interfaces {
            if interface.name.trim().is_empty() {
                anyhow::bail!("Interface name cannot be empty");
            }

            if let Some(bundle) = &interface.log_bundle {
                if bundle.project_code.is_empty() {
                    anyhow::bail!("Project code cannot be empty for bundle '{}'", interface.name);
                }
            }

            for method in &interface.methods {
                if method.name.trim().is_empty() {
                    anyhow::bail!("Method name cannot be empty in '{}'", interface.name);
                }

                if let Some(param) = method.parameters.iter().find(|p| p.name.trim().is_empty()) {
                    anyhow::bail!(
                        "Parameter of type '{}' on '{}.{}' has no name",
                        param.ty,
                        interface.name,
                        method.name
                    );
                }
            }
        }

        Ok(())
    }

    /// Build a processor from the manifest's generator section
    pub fn processor(&self) -> Result<LogProcessor> {
        LogProcessor::new(self.generator.clone()).context("Invalid generator configuration")
    }
}

/// Check command implementation
pub fn check(manifest_path: Option<String>) -> Result<()> {
    let path = manifest_path.unwrap_or_else(|| "logbundle.toml".to_string());

    println!("Checking manifest: {}", path);

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;

    let sources = manifest.processor()?.render(&manifest.interfaces)?;
    let methods: usize = sources.iter().map(|s| s.method_count).sum();

    println!("✓ Interfaces: {}", manifest.interfaces.len());
    println!("✓ Bundles: {}", sources.len());
    println!("✓ Methods: {}", methods);
    println!("\nManifest is valid!");

    Ok(())
}
