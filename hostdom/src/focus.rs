use crate::element::{self, Element};
use crate::event::Event;

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Move focus to `id` and return the events a browser would fire:
    /// a blur on the previous element (with `id` as its related target)
    /// followed by a focus on the new one.
    pub fn transfer(&mut self, id: &str) -> Vec<Event> {
        if self.focused.as_deref() == Some(id) {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(previous) = self.focused.take() {
            events.push(Event::Blur {
                target: previous,
                related: Some(id.to_string()),
            });
        }
        self.focused = Some(id.to_string());
        events.push(Event::Focus {
            target: id.to_string(),
        });

        log::trace!("[focus] transfer -> {id}");
        events
    }

    /// Move focus one step through the tab order of `root`, as a Tab
    /// (or Shift+Tab) keypress would, and return the blur/focus events.
    ///
    /// Elements with `tabindex="-1"` can hold focus but are skipped. When one
    /// of them is focused, tabbing continues from its place in the document.
    /// The order wraps at both ends.
    pub fn tab(&mut self, root: &Element, backwards: bool) -> Vec<Event> {
        let mut order = Vec::new();
        element::walk(root, &mut |el| order.push(el));

        let tabbable: Vec<usize> = order
            .iter()
            .enumerate()
            .filter(|(_, el)| is_tabbable(el))
            .map(|(idx, _)| idx)
            .collect();
        let current = self
            .focused
            .as_deref()
            .and_then(|id| order.iter().position(|el| el.id == id));

        let next = match (current, backwards) {
            (None, false) => tabbable.first(),
            (None, true) => tabbable.last(),
            (Some(at), false) => tabbable.iter().find(|&&idx| idx > at).or(tabbable.first()),
            (Some(at), true) => tabbable
                .iter()
                .rev()
                .find(|&&idx| idx < at)
                .or(tabbable.last()),
        };

        match next {
            Some(&idx) => {
                let id = order[idx].id.clone();
                self.transfer(&id)
            }
            None => Vec::new(),
        }
    }
}

/// Whether Tab navigation stops on this element.
fn is_tabbable(el: &Element) -> bool {
    el.focusable && !el.disabled && el.get_attr("tabindex") != Some("-1")
}
