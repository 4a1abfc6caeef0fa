//! JVM type descriptors as seen by the emitter.
//!
//! The generated body of a message method ends differently depending on the
//! declared return type:
//!
//! | Declared return type | Shape | Generated tail |
//! |----------------------|-------|----------------|
//! | `String` / `java.lang.String` | [`ReturnShape::Text`] | `return returnString;` |
//! | anything else | [`ReturnShape::Constructed`] | `return new T(returnString);` |
//!
//! The choice is made once, when the method body is built.

/// Type names treated as the text type.
const TEXT_TYPES: &[&str] = &["java.lang.String", "String"];

/// How a message method hands back its formatted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnShape<'a> {
    /// Return the formatted string directly.
    Text,
    /// Construct the declared type from the formatted string.
    Constructed(&'a str),
}

impl<'a> ReturnShape<'a> {
    /// Resolve the shape for a declared return type.
    pub fn of(return_type: &'a str) -> Self {
        let ty = return_type.trim();
        if is_text_type(ty) {
            ReturnShape::Text
        } else {
            ReturnShape::Constructed(ty)
        }
    }
}

/// Whether a type descriptor names the text type.
pub fn is_text_type(ty: &str) -> bool {
    TEXT_TYPES.contains(&ty.trim())
}

/// Whether a type descriptor is `void`.
pub fn is_void(ty: &str) -> bool {
    ty.trim() == "void"
}
