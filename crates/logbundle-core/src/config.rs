//! Generator configuration types

use crate::codegen::naming::simple_name;
use crate::error::{GeneratorError, GeneratorResult};
use serde::{Deserialize, Serialize};

/// Configuration for a generation round
///
/// Every field has a default, so an empty table (or empty JSON bytes) yields
/// a configuration that targets SLF4J with the `_impl` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Suffix appended to the interface's simple name to form the class name
    #[serde(default = "default_impl_suffix")]
    pub impl_suffix: String,

    /// Name recorded in the header comment of every generated unit
    #[serde(default = "default_generator_name")]
    pub generator_name: String,

    /// Qualified type of the logging handle held by generated classes
    #[serde(default = "default_logger_type")]
    pub logger_type: String,

    /// Qualified type exposing `getLogger(Class)`
    #[serde(default = "default_logger_factory")]
    pub logger_factory: String,

    /// Qualified type exposing `format` / `arrayFormat`
    #[serde(default = "default_formatter")]
    pub formatter: String,

    /// Qualified type returned by the formatter, exposing `getMessage()`
    #[serde(default = "default_formatting_tuple")]
    pub formatting_tuple: String,

    /// Reject any method carrying two or more annotation kinds
    ///
    /// When disabled only the full triple is rejected and two-way overlaps
    /// resolve Message, then LogMessage, then GetLogger.
    #[serde(default = "default_strict_annotations")]
    pub strict_annotations: bool,
}

fn default_impl_suffix() -> String {
    "_impl".to_string()
}

fn default_generator_name() -> String {
    "logbundle".to_string()
}

fn default_logger_type() -> String {
    "org.slf4j.Logger".to_string()
}

fn default_logger_factory() -> String {
    "org.slf4j.LoggerFactory".to_string()
}

fn default_formatter() -> String {
    "org.slf4j.helpers.MessageFormatter".to_string()
}

fn default_formatting_tuple() -> String {
    "org.slf4j.helpers.FormattingTuple".to_string()
}

fn default_strict_annotations() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            impl_suffix: default_impl_suffix(),
            generator_name: default_generator_name(),
            logger_type: default_logger_type(),
            logger_factory: default_logger_factory(),
            formatter: default_formatter(),
            formatting_tuple: default_formatting_tuple(),
            strict_annotations: default_strict_annotations(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Override the implementation suffix
    pub fn with_impl_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.impl_suffix = suffix.into();
        self
    }

    /// Toggle strict annotation checking
    pub fn with_strict_annotations(mut self, strict: bool) -> Self {
        self.strict_annotations = strict;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> GeneratorResult<()> {
        if self.impl_suffix.is_empty() {
            return Err(GeneratorError::Config(
                "impl_suffix cannot be empty, the class would shadow its interface".into(),
            ));
        }

        let types = [
            ("logger_type", &self.logger_type),
            ("logger_factory", &self.logger_factory),
            ("formatter", &self.formatter),
            ("formatting_tuple", &self.formatting_tuple),
        ];
        for (key, value) in types {
            if value.trim().is_empty() {
                return Err(GeneratorError::Config(format!("{key} cannot be empty")));
            }
        }

        Ok(())
    }

    /// Simple name of the logging handle type, as used in generated code
    pub fn logger_simple_name(&self) -> &str {
        simple_name(&self.logger_type)
    }

    /// Qualified names imported by every generated unit, in emission order
    pub fn imports(&self) -> [&str; 4] {
        [
            &self.logger_type,
            &self.logger_factory,
            &self.formatting_tuple,
            &self.formatter,
        ]
    }
}
