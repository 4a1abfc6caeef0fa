//! Naming utilities for qualified JVM names.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `org.example.Bundle` | [`simple_name`] | `Bundle` |
//! | `org.example.Bundle` | [`package_of`] | `org.example` |
//! | `Bundle`, `_impl` | [`impl_class_name`] | `Bundle_impl` |
//! | `org.example`, `Bundle_impl` | [`qualify`] | `org.example.Bundle_impl` |
//! | `org.example.Bundle_impl` | [`source_path`] | `org/example/Bundle_impl.java` |

use std::path::PathBuf;

/// Last dot-separated segment of a qualified name.
///
/// # Examples
///
/// ```
/// use logbundle_core::codegen::naming::simple_name;
///
/// assert_eq!(simple_name("org.example.QueueBundle"), "QueueBundle");
/// assert_eq!(simple_name("QueueBundle"), "QueueBundle");
/// ```
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map_or(qualified, |(_, simple)| simple)
}

/// Everything before the last dot, or `""` for the default package.
///
/// # Examples
///
/// ```
/// use logbundle_core::codegen::naming::package_of;
///
/// assert_eq!(package_of("org.example.QueueBundle"), "org.example");
/// assert_eq!(package_of("QueueBundle"), "");
/// ```
pub fn package_of(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map_or("", |(package, _)| package)
}

/// Name of the class implementing an interface.
pub fn impl_class_name(interface_simple_name: &str, suffix: &str) -> String {
    format!("{interface_simple_name}{suffix}")
}

/// Join a namespace and a simple name.
pub fn qualify(namespace: &str, simple: &str) -> String {
    if namespace.is_empty() {
        simple.to_string()
    } else {
        format!("{namespace}.{simple}")
    }
}

/// Relative path of the `.java` source for a qualified class name.
pub fn source_path(qualified: &str) -> PathBuf {
    let mut path: PathBuf = package_of(qualified).split('.').filter(|s| !s.is_empty()).collect();
    path.push(format!("{}.java", simple_name(qualified)));
    path
}
