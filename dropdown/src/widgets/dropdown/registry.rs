//! Option registry: the live, ordered set of attached options.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use hostdom::Element;
use hostdom::element;
use serde::{Deserialize, Serialize};

/// Stable identity of a mounted option.
///
/// Generated once per [`DropdownOption`](super::DropdownOption) and kept
/// across content changes, so it can back `aria-activedescendant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionId(usize);

impl OptionId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__option_{}", self.0)
    }
}

/// An option value: text or a whole number.
///
/// Comparison is strict: `Text("1")` and `Number(1)` are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{n}"),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Number(value.into())
    }
}

/// A registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredOption {
    pub id: OptionId,
    pub value: OptionValue,
    pub display_text: String,
    /// Rich content to render instead of the display text, if any.
    #[serde(skip)]
    pub content: Vec<Element>,
}

/// Ordered collection of attached options. Insertion order is attach order.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    options: Vec<RegisteredOption>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option, or replace the entry with the same id in place.
    /// Returns true if a new entry was appended.
    pub fn upsert(&mut self, option: RegisteredOption) -> bool {
        if let Some(existing) = self.options.iter_mut().find(|o| o.id == option.id) {
            *existing = option;
            return false;
        }
        if self.options.iter().any(|o| o.value == option.value) {
            log::warn!(
                "[registry] duplicate option value '{}' ({}); only the first can be selected",
                option.value,
                option.id
            );
        }
        self.options.push(option);
        true
    }

    /// Remove the entry with the given id.
    pub fn remove(&mut self, id: OptionId) -> Option<RegisteredOption> {
        let idx = self.position(id)?;
        Some(self.options.remove(idx))
    }

    pub fn get(&self, id: OptionId) -> Option<&RegisteredOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn position(&self, id: OptionId) -> Option<usize> {
        self.options.iter().position(|o| o.id == id)
    }

    /// Find the option rendered as `element_id`, or whose rich content
    /// contains it.
    pub fn find_by_element_id(&self, element_id: &str) -> Option<&RegisteredOption> {
        self.options.iter().find(|o| {
            o.id.to_string() == element_id
                || o.content.iter().any(|el| element::contains(el, element_id))
        })
    }

    /// The first option carrying `value`. This is the only option that
    /// counts as selected when values repeat.
    pub fn first_with_value(&self, value: &OptionValue) -> Option<&RegisteredOption> {
        self.options.iter().find(|o| &o.value == value)
    }

    pub fn first(&self) -> Option<&RegisteredOption> {
        self.options.first()
    }

    pub fn last(&self) -> Option<&RegisteredOption> {
        self.options.last()
    }

    pub fn at(&self, index: usize) -> Option<&RegisteredOption> {
        self.options.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredOption> {
        self.options.iter()
    }

    pub fn as_slice(&self) -> &[RegisteredOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(value: &str) -> RegisteredOption {
        RegisteredOption {
            id: OptionId::new(),
            value: value.into(),
            display_text: value.to_uppercase(),
            content: Vec::new(),
        }
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut registry = OptionRegistry::new();
        let a = entry("a");
        let b = entry("b");
        registry.upsert(a.clone());
        registry.upsert(b.clone());

        let renamed = RegisteredOption {
            display_text: "Alpha".to_string(),
            ..a.clone()
        };
        assert!(!registry.upsert(renamed));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.at(0).map(|o| o.display_text.as_str()), Some("Alpha"));
        assert_eq!(registry.at(1).map(|o| o.id), Some(b.id));
    }

    #[test]
    fn test_first_with_value_prefers_earliest_duplicate() {
        let mut registry = OptionRegistry::new();
        let first = entry("x");
        let second = entry("x");
        registry.upsert(first.clone());
        registry.upsert(second);

        assert_eq!(
            registry.first_with_value(&"x".into()).map(|o| o.id),
            Some(first.id)
        );
    }

    #[test]
    fn test_find_by_element_id_searches_rich_content() {
        let mut registry = OptionRegistry::new();
        let plain = entry("a");
        let rich = RegisteredOption {
            content: vec![Element::div().child(Element::span("hint").id("hint"))],
            ..entry("b")
        };
        registry.upsert(plain.clone());
        registry.upsert(rich.clone());

        let found = |id: &str| registry.find_by_element_id(id).map(|o| o.id);
        assert_eq!(found(&plain.id.to_string()), Some(plain.id));
        assert_eq!(found("hint"), Some(rich.id));
        assert_eq!(found("elsewhere"), None);
    }

    #[test]
    fn test_option_value_display_and_serde() {
        assert_eq!(OptionValue::from(42).to_string(), "42");
        assert_eq!(OptionValue::from("Talk").to_string(), "Talk");

        let parsed: OptionValue = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, OptionValue::Number(7));
        let parsed: OptionValue = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(parsed, OptionValue::Text("7".to_string()));
    }
}
