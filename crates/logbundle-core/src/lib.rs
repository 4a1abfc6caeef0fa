//! logbundle-core - Log message bundle compiler
//!
//! This crate turns interface declarations annotated with message metadata
//! into Java classes implementing them:
//! - [`collect_bundles`] discovers bundle interfaces and their annotated methods
//! - [`Validator`] enforces one annotation kind per method and run-wide unique ids
//! - [`JavaEmitter`] renders the implementation class
//! - [`LogProcessor`] drives a whole round and hands results to a [`Filer`]

pub mod codegen;
mod collector;
mod config;
mod error;
mod escape;
mod filer;
mod model;
mod processor;
mod registry;
mod validator;

pub use codegen::{GeneratedSource, JavaEmitter};
pub use collector::{collect_bundle, collect_bundles};
pub use config::GeneratorConfig;
pub use error::{GeneratorError, GeneratorResult};
pub use escape::{dangling_escape, escape_template};
pub use filer::{DirectoryFiler, Filer, MemoryFiler};
pub use model::{
    AnnotationKind, AnnotationSet, BundleDeclaration, GetLoggerAnnotation, InterfaceElement,
    Level, LogBundleAnnotation, LogMessageAnnotation, MessageAnnotation, MethodDeclaration,
    MethodElement, ParameterDeclaration,
};
pub use processor::{GeneratedUnit, LogProcessor, RoundReport};
pub use registry::MessageIdRegistry;
pub use validator::{MethodKind, ResolvedMethod, ValidatedBundle, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DirectoryFiler, Filer, GeneratorConfig, GeneratorError, GeneratorResult, InterfaceElement,
        LogProcessor, MemoryFiler, MethodElement, RoundReport,
    };
}
