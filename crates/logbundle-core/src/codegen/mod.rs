//! Source generation from validated bundles.
//!
//! # Architecture
//!
//! ```text
//! InterfaceElement (host)
//!     ↓
//!  [collector]
//!     ↓
//! BundleDeclaration
//!     ↓
//!  [validator] ←→ MessageIdRegistry
//!     ↓
//! ValidatedBundle
//!     ↓
//!  [JavaEmitter] → GeneratedSource → Filer
//! ```
//!
//! The emitter never inspects raw elements; every decision it makes (method
//! kind, level, return shape) comes from the validated model.
//!
//! # Generated shape
//!
//! For `org.example.QueueBundle` with project code `AMQ1`:
//!
//! ```text
//! public class QueueBundle_impl implements QueueBundle
//! {
//!    private final Logger logger;
//!    public QueueBundle_impl(Logger logger) { ... }
//!    public QueueBundle_impl() { this(LoggerFactory.getLogger(...)); }
//!    public static final QueueBundle_impl INSTANCE = new QueueBundle_impl();
//!    // one method per annotated interface method
//! }
//! ```
//!
//! - [`java`] renders the class
//! - [`jvm_types`] decides how message methods return
//! - [`naming`] derives class names and output paths
//! - [`writer`] is the indentation-aware text builder

pub mod java;
pub mod jvm_types;
pub mod naming;
pub mod writer;

pub use java::JavaEmitter;

/// One rendered source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Qualified name of the generated class; unique within a round.
    pub qualified_name: String,

    /// Full source text.
    pub contents: String,

    /// Number of interface methods implemented.
    pub method_count: usize,
}
