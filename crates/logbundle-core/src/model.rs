//! Declaration metadata model.
//!
//! Two layers live here:
//!
//! - **Elements** ([`InterfaceElement`], [`MethodElement`]) are what the host's
//!   declaration discovery hands over: interfaces and methods with whatever
//!   annotations they carry, deserializable from a manifest.
//! - **Declarations** ([`BundleDeclaration`], [`MethodDeclaration`]) are built
//!   once by the collector and are read-only afterwards. The emitter only ever
//!   sees declarations, never raw elements.
//!
//! Levels stay textual in both layers; they become a [`Level`] only when the
//! validator resolves a method.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interface-level bundle marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogBundleAnnotation {
    /// Prefix embedded in every generated message literal
    pub project_code: String,
}

/// Marks a method that returns a formatted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAnnotation {
    pub id: i32,
    pub value: String,
}

/// Marks a method that logs a formatted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessageAnnotation {
    pub id: i32,
    pub value: String,
    pub level: String,
}

/// Marks a method that exposes the logging handle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLoggerAnnotation {}

/// A method parameter; order is significant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

impl ParameterDeclaration {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A method as resolved by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodElement {
    pub name: String,

    #[serde(default = "default_return_type")]
    pub returns: String,

    #[serde(default)]
    pub parameters: Vec<ParameterDeclaration>,

    #[serde(default)]
    pub message: Option<MessageAnnotation>,

    #[serde(default)]
    pub log_message: Option<LogMessageAnnotation>,

    #[serde(default)]
    pub get_logger: Option<GetLoggerAnnotation>,
}

fn default_return_type() -> String {
    "void".to_string()
}

impl MethodElement {
    /// Create an unannotated method returning `void`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            returns: default_return_type(),
            parameters: Vec::new(),
            message: None,
            log_message: None,
            get_logger: None,
        }
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = ty.into();
        self
    }

    pub fn parameter(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.parameters.push(ParameterDeclaration::new(ty, name));
        self
    }

    pub fn message(mut self, id: i32, value: impl Into<String>) -> Self {
        self.message = Some(MessageAnnotation {
            id,
            value: value.into(),
        });
        self
    }

    pub fn log_message(mut self, id: i32, value: impl Into<String>, level: impl Into<String>) -> Self {
        self.log_message = Some(LogMessageAnnotation {
            id,
            value: value.into(),
            level: level.into(),
        });
        self
    }

    pub fn get_logger(mut self) -> Self {
        self.get_logger = Some(GetLoggerAnnotation {});
        self
    }
}

/// An interface as resolved by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceElement {
    /// Qualified interface name
    pub name: String,

    /// Enclosing namespace; derived from `name` when absent
    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub log_bundle: Option<LogBundleAnnotation>,

    #[serde(default, rename = "method", alias = "methods")]
    pub methods: Vec<MethodElement>,
}

impl InterfaceElement {
    /// Create an interface without the bundle marker
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            log_bundle: None,
            methods: Vec::new(),
        }
    }

    /// Create an interface carrying the bundle marker
    pub fn bundle(name: impl Into<String>, project_code: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.log_bundle = Some(LogBundleAnnotation {
            project_code: project_code.into(),
        });
        element
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn method(mut self, method: MethodElement) -> Self {
        self.methods.push(method);
        self
    }
}

/// The recognized per-method annotation kinds, in resolution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnnotationKind {
    Message,
    LogMessage,
    GetLogger,
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationKind::Message => write!(f, "@Message"),
            AnnotationKind::LogMessage => write!(f, "@LogMessage"),
            AnnotationKind::GetLogger => write!(f, "@GetLogger"),
        }
    }
}

/// Severity of a log message, selecting the logger method to call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Warn,
    Info,
    Error,
}

impl Level {
    /// Parse a level name, ignoring ASCII case
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "WARN" => Some(Level::Warn),
            "INFO" => Some(Level::Info),
            "ERROR" => Some(Level::Error),
            _ => None,
        }
    }

    /// Name of the logging handle method for this level
    pub fn method_name(self) -> &'static str {
        match self {
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Warn => write!(f, "WARN"),
            Level::Info => write!(f, "INFO"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

/// The annotations attached to one method
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    pub message: Option<MessageAnnotation>,
    pub log_message: Option<LogMessageAnnotation>,
    pub get_logger: Option<GetLoggerAnnotation>,
}

impl AnnotationSet {
    /// Kinds present, in resolution order
    pub fn kinds(&self) -> Vec<AnnotationKind> {
        let mut kinds = Vec::with_capacity(3);
        if self.message.is_some() {
            kinds.push(AnnotationKind::Message);
        }
        if self.log_message.is_some() {
            kinds.push(AnnotationKind::LogMessage);
        }
        if self.get_logger.is_some() {
            kinds.push(AnnotationKind::GetLogger);
        }
        kinds
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.log_message.is_none() && self.get_logger.is_none()
    }
}

/// A collected bundle method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<ParameterDeclaration>,
    pub annotations: AnnotationSet,
}

impl MethodDeclaration {
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

/// A collected bundle interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleDeclaration {
    pub qualified_name: String,
    pub namespace: String,
    pub project_code: String,
    pub methods: Vec<MethodDeclaration>,
}

#[cfg(test)]
#[path = "model/model_tests.rs"]
mod model_tests;
