//! Per-dispatch argument bindings.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("missing argument '{0}'")]
    Missing(String),
}

/// Values bound by argument nodes during one dispatch, keyed by binding key.
///
/// Slots keep the order in which they were first bound. Binding a key twice
/// overwrites the slot in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentRecord {
    slots: Vec<(String, String)>,
}

impl ArgumentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, key: &str, value: &str) {
        match self.slots.iter_mut().find(|(slot, _)| slot == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.slots.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(slot, _)| slot == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn require(&self, key: &str) -> Result<&str, ArgumentError> {
        self.get(key)
            .ok_or_else(|| ArgumentError::Missing(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
