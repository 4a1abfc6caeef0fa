//! Message id registry shared by every bundle of one run

use crate::error::{GeneratorError, GeneratorResult};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Maps each registered message id to the template it was first declared with.
///
/// One registry lives for one generation run and is passed explicitly to the
/// validator, so independent runs never share ids.
#[derive(Debug, Default)]
pub struct MessageIdRegistry {
    messages: HashMap<i32, String>,
}

impl MessageIdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` for `template`.
    ///
    /// Fails if `id` is already registered, even with identical text.
    pub fn register(&mut self, id: i32, template: &str) -> GeneratorResult<()> {
        match self.messages.entry(id) {
            Entry::Occupied(previous) => Err(GeneratorError::DuplicateMessageId {
                id,
                template: template.to_string(),
                previous: previous.get().clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(template.to_string());
                Ok(())
            }
        }
    }

    /// Template registered for `id`, if any
    pub fn get(&self, id: i32) -> Option<&str> {
        self.messages.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: i32) -> bool {
        self.messages.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
