//! Option children of a dropdown.

use hostdom::Element;

use crate::context::{DropdownContext, Scope};
use crate::error::DropdownError;
use crate::lifecycle::Lifecycle;

use super::registry::{OptionId, OptionValue, RegisteredOption};

/// Content of an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionChild {
    /// Plain text. Text children make up the fallback display text.
    Text(String),
    /// Rich content, rendered but not used for the display text.
    Element(Element),
}

/// A selectable entry of a [`Dropdown`](super::Dropdown).
///
/// Registers itself with the nearest dropdown when attached and removes its
/// entry when detached. The value falls back to the display text, which in
/// turn falls back to the concatenated text children.
#[derive(Debug)]
pub struct DropdownOption {
    id: OptionId,
    value: Option<OptionValue>,
    display_text: Option<String>,
    children: Vec<OptionChild>,
    context: Option<DropdownContext>,
}

impl DropdownOption {
    pub fn new() -> Self {
        Self {
            id: OptionId::new(),
            value: None,
            display_text: None,
            children: Vec::new(),
            context: None,
        }
    }

    pub fn value(mut self, value: impl Into<OptionValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn display_text(mut self, text: impl Into<String>) -> Self {
        self.display_text = Some(text.into());
        self
    }

    /// Append a text child.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(OptionChild::Text(text.into()));
        self
    }

    /// Append a rich child.
    pub fn child(mut self, element: Element) -> Self {
        self.children.push(OptionChild::Element(element));
        self
    }

    /// Stable identity of this option.
    pub fn id(&self) -> OptionId {
        self.id
    }

    pub fn is_attached(&self) -> bool {
        self.context.is_some()
    }

    /// Concatenation of the text-only children.
    pub fn text_children(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                OptionChild::Text(text) => Some(text.as_str()),
                OptionChild::Element(_) => None,
            })
            .collect()
    }

    /// Display text: explicit, else the text children.
    pub fn resolved_display_text(&self) -> String {
        self.display_text
            .clone()
            .unwrap_or_else(|| self.text_children())
    }

    /// Value: explicit, else the display text, else the text children.
    pub fn resolved_value(&self) -> OptionValue {
        self.value
            .clone()
            .unwrap_or_else(|| OptionValue::Text(self.resolved_display_text()))
    }

    /// The registry entry for this option.
    pub fn entry(&self) -> RegisteredOption {
        let has_rich_content = self
            .children
            .iter()
            .any(|child| matches!(child, OptionChild::Element(_)));
        let content = if has_rich_content {
            self.children
                .iter()
                .map(|child| match child {
                    OptionChild::Text(text) => Element::span(text.clone()),
                    OptionChild::Element(element) => element.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        RegisteredOption {
            id: self.id(),
            value: self.resolved_value(),
            display_text: self.resolved_display_text(),
            content,
        }
    }

    // -------------------------------------------------------------------------
    // Content changes (re-register in place while attached)
    // -------------------------------------------------------------------------

    pub fn set_value(&mut self, value: Option<OptionValue>) {
        self.value = value;
        self.sync();
    }

    pub fn set_display_text(&mut self, text: Option<String>) {
        self.display_text = text;
        self.sync();
    }

    pub fn set_children(&mut self, children: Vec<OptionChild>) {
        self.children = children;
        self.sync();
    }

    fn sync(&self) {
        if let Some(context) = &self.context {
            context.register(self.entry());
        }
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Select this option and close the dropdown.
    pub fn activate(&self) -> Result<(), DropdownError> {
        let context = self
            .context
            .as_ref()
            .ok_or(DropdownError::NotAttached(self.id()))?;
        context.select(self.resolved_value())
    }

    /// Whether this option is the one counted as selected.
    pub fn is_selected(&self) -> bool {
        self.context
            .as_ref()
            .is_some_and(|context| context.is_selected(self.id()))
    }
}

impl Default for DropdownOption {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle for DropdownOption {
    fn on_attach(&mut self, scope: &Scope) -> Result<(), DropdownError> {
        let context = scope.dropdown("DropdownOption")?;
        context.register(self.entry());
        self.context = Some(context);
        Ok(())
    }

    fn on_detach(&mut self) {
        if let Some(context) = self.context.take() {
            context.deregister(self.id());
        }
    }
}
