//! Error types for bundle generation

use thiserror::Error;

/// Result type alias for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Error type for a generation round
///
/// Every variant is fatal to the round that raised it.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A method carries more than one message annotation kind
    #[error("cannot use combined annotations {kinds} on method {method}")]
    ConflictingAnnotations { method: String, kinds: String },

    /// A message id was registered twice in one run
    #[error("message {id} with definition = {template} was previously defined as {previous}")]
    DuplicateMessageId {
        id: i32,
        template: String,
        previous: String,
    },

    /// A log message declares a level outside WARN, INFO, ERROR
    #[error("illegal method level {level} on method {method}")]
    UnknownLevel { method: String, level: String },

    /// A method's signature cannot be implemented for its annotation kind
    #[error("method {method} cannot be generated: {reason}")]
    InvalidSignature { method: String, reason: String },

    /// A template's own backslash would swallow a quote of the generated literal
    #[error("message {id} with definition = {template} has a dangling escape at byte {offset}")]
    DanglingEscape {
        id: i32,
        template: String,
        offset: usize,
    },

    /// Two bundles derive the same generated class name
    #[error("output {target} is generated by more than one bundle")]
    DuplicateOutput { target: String },

    /// The output target could not be created or written
    #[error("failed to write {target}: {source}")]
    OutputWrite {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Generator configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl GeneratorError {
    /// Returns a stable code for the error kind, used as a process exit status
    pub fn error_code(&self) -> u8 {
        match self {
            GeneratorError::ConflictingAnnotations { .. } => 2,
            GeneratorError::DuplicateMessageId { .. } => 3,
            GeneratorError::UnknownLevel { .. } => 4,
            GeneratorError::DuplicateOutput { .. } => 5,
            GeneratorError::OutputWrite { .. } => 6,
            GeneratorError::Config(_) => 7,
            GeneratorError::InvalidSignature { .. } => 8,
            GeneratorError::DanglingEscape { .. } => 9,
        }
    }
}
