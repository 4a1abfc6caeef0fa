//! Generation round driver
//!
//! A round collects every bundle, validates and renders all of them in
//! memory, and only then hands the rendered units to the [`Filer`]. A
//! validation failure anywhere therefore leaves the filer untouched.

use crate::codegen::{GeneratedSource, JavaEmitter};
use crate::collector::collect_bundles;
use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, GeneratorResult};
use crate::filer::Filer;
use crate::model::InterfaceElement;
use crate::registry::MessageIdRegistry;
use crate::validator::Validator;
use std::collections::HashSet;
use tracing::{debug, error, info};

/// Summary of one generated unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub qualified_name: String,
    pub method_count: usize,
}

/// Outcome of a successful round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundReport {
    /// Generated units in discovery order
    pub units: Vec<GeneratedUnit>,

    /// Message ids registered during the round
    pub message_ids: usize,
}

impl RoundReport {
    pub fn total_methods(&self) -> usize {
        self.units.iter().map(|u| u.method_count).sum()
    }
}

/// Runs generation rounds with a fixed configuration
#[derive(Debug, Clone)]
pub struct LogProcessor {
    config: GeneratorConfig,
}

impl LogProcessor {
    /// Create a processor, rejecting an invalid configuration
    pub fn new(config: GeneratorConfig) -> GeneratorResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run one round: render every bundle, then write them all through `filer`.
    pub fn process(
        &self,
        interfaces: &[InterfaceElement],
        filer: &mut dyn Filer,
    ) -> GeneratorResult<RoundReport> {
        let result = self
            .render_round(interfaces)
            .and_then(|(sources, message_ids)| {
                let mut units = Vec::with_capacity(sources.len());
                for source in sources {
                    filer.create_source(&source.qualified_name, &source.contents)?;
                    units.push(GeneratedUnit {
                        qualified_name: source.qualified_name,
                        method_count: source.method_count,
                    });
                }
                Ok(RoundReport { units, message_ids })
            });

        match &result {
            Ok(report) => info!(
                units = report.units.len(),
                methods = report.total_methods(),
                "generation round complete"
            ),
            Err(err) => error!("generation round failed: {err}"),
        }

        result
    }

    /// Validate and render every bundle without writing anything.
    pub fn render(&self, interfaces: &[InterfaceElement]) -> GeneratorResult<Vec<GeneratedSource>> {
        self.render_round(interfaces).map(|(sources, _)| sources)
    }

    fn render_round(
        &self,
        interfaces: &[InterfaceElement],
    ) -> GeneratorResult<(Vec<GeneratedSource>, usize)> {
        let bundles = collect_bundles(interfaces);
        let emitter = JavaEmitter::new(&self.config);
        let mut registry = MessageIdRegistry::new();
        let mut validator = Validator::new(&mut registry).strict(self.config.strict_annotations);
        let mut targets = HashSet::with_capacity(bundles.len());
        let mut sources = Vec::with_capacity(bundles.len());

        for bundle in &bundles {
            debug!(bundle = %bundle.qualified_name, "processing bundle");

            let target = emitter.output_name(bundle);
            if !targets.insert(target.clone()) {
                return Err(GeneratorError::DuplicateOutput { target });
            }

            let validated = validator.validate_bundle(bundle)?;
            sources.push(emitter.emit(&validated));
        }

        Ok((sources, registry.len()))
    }
}

#[cfg(test)]
#[path = "processor/processor_tests.rs"]
mod processor_tests;
