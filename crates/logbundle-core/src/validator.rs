//! Method validation and kind resolution
//!
//! The validator is the only stage that rejects declarations. It resolves each
//! annotated method to exactly one [`MethodKind`], registering message ids in
//! the run's [`MessageIdRegistry`] as it goes. A method whose signature or
//! template could not be emitted as compilable source is rejected here.

use crate::codegen::jvm_types::is_void;
use crate::escape::dangling_escape;
use crate::error::{GeneratorError, GeneratorResult};
use crate::model::{BundleDeclaration, Level, MethodDeclaration};
use crate::registry::MessageIdRegistry;
use tracing::warn;

/// The single kind a method resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind<'a> {
    Message { id: i32, template: &'a str },
    LogMessage { id: i32, template: &'a str, level: Level },
    GetLogger,
}

/// A method that passed validation
#[derive(Debug, Clone, Copy)]
pub struct ResolvedMethod<'a> {
    pub declaration: &'a MethodDeclaration,
    pub kind: MethodKind<'a>,
}

/// A bundle whose methods all passed validation
#[derive(Debug, Clone)]
pub struct ValidatedBundle<'a> {
    pub declaration: &'a BundleDeclaration,
    pub methods: Vec<ResolvedMethod<'a>>,
}

/// Validates methods against one run's registry
pub struct Validator<'r> {
    registry: &'r mut MessageIdRegistry,
    strict: bool,
}

impl<'r> Validator<'r> {
    /// Create a strict validator
    pub fn new(registry: &'r mut MessageIdRegistry) -> Self {
        Self {
            registry,
            strict: true,
        }
    }

    /// Set whether two-way annotation overlaps are rejected
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validate every method of a bundle, stopping at the first failure
    pub fn validate_bundle<'a>(
        &mut self,
        bundle: &'a BundleDeclaration,
    ) -> GeneratorResult<ValidatedBundle<'a>> {
        let mut methods = Vec::with_capacity(bundle.methods.len());
        for method in &bundle.methods {
            if let Some(resolved) = self.validate_method(method)? {
                methods.push(resolved);
            }
        }

        Ok(ValidatedBundle {
            declaration: bundle,
            methods,
        })
    }

    /// Resolve a method to its kind.
    ///
    /// Returns `Ok(None)` for a method without any recognized annotation.
    pub fn validate_method<'a>(
        &mut self,
        method: &'a MethodDeclaration,
    ) -> GeneratorResult<Option<ResolvedMethod<'a>>> {
        let kinds = method.annotations.kinds();
        let conflicting = if self.strict {
            kinds.len() > 1
        } else {
            kinds.len() == 3
        };

        if conflicting {
            let kinds = kinds
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(GeneratorError::ConflictingAnnotations {
                method: method.name.clone(),
                kinds,
            });
        }

        if kinds.len() > 1 {
            warn!(
                method = %method.name,
                resolved = %kinds[0],
                "method carries several annotations, resolving by precedence"
            );
        }

        let annotations = &method.annotations;
        let kind = if let Some(message) = &annotations.message {
            if is_void(&method.return_type) {
                return Err(invalid_signature(method, "@Message methods must return a value"));
            }
            check_template(message.id, &message.value)?;
            self.registry.register(message.id, &message.value)?;
            MethodKind::Message {
                id: message.id,
                template: &message.value,
            }
        } else if let Some(log) = &annotations.log_message {
            let level = Level::parse(&log.level).ok_or_else(|| GeneratorError::UnknownLevel {
                method: method.name.clone(),
                level: log.level.clone(),
            })?;
            if !is_void(&method.return_type) {
                return Err(invalid_signature(
                    method,
                    format!("@LogMessage methods must return void, not {}", method.return_type),
                ));
            }
            check_template(log.id, &log.value)?;
            self.registry.register(log.id, &log.value)?;
            MethodKind::LogMessage {
                id: log.id,
                template: &log.value,
                level,
            }
        } else if annotations.get_logger.is_some() {
            if method.has_parameters() {
                return Err(invalid_signature(method, "@GetLogger methods take no parameters"));
            }
            MethodKind::GetLogger
        } else {
            return Ok(None);
        };

        Ok(Some(ResolvedMethod {
            declaration: method,
            kind,
        }))
    }
}

fn invalid_signature(method: &MethodDeclaration, reason: impl Into<String>) -> GeneratorError {
    GeneratorError::InvalidSignature {
        method: method.name.clone(),
        reason: reason.into(),
    }
}

fn check_template(id: i32, template: &str) -> GeneratorResult<()> {
    match dangling_escape(template) {
        Some(offset) => Err(GeneratorError::DanglingEscape {
            id,
            template: template.to_string(),
            offset,
        }),
        None => Ok(()),
    }
}
