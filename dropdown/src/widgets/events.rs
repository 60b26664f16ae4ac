//! Widget event handling types and traits.
//!
//! Hosts feed [`hostdom::Event`]s to a widget through
//! [`WidgetEvents::dispatch`]. The widget updates its own state, moves focus
//! through the [`EventContext`], and queues [`WidgetEvent`]s the host drains
//! afterwards (e.g. to react to a value change).

use hostdom::{Event, FocusState, Key, Modifiers};

// =============================================================================
// Widget Event Types
// =============================================================================

/// Identifies which handler to call for a widget event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEventKind {
    /// Popup opened
    Open,
    /// Popup closed
    Close,
    /// Value changed
    Change,
}

/// A widget event to be dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEvent {
    /// Which kind of event
    pub kind: WidgetEventKind,
    /// Widget ID that triggered the event
    pub widget_id: String,
    /// New value, for `Change` events
    pub value: Option<String>,
}

impl WidgetEvent {
    /// Create a new widget event.
    pub fn new(kind: WidgetEventKind, widget_id: impl Into<String>) -> Self {
        Self {
            kind,
            widget_id: widget_id.into(),
            value: None,
        }
    }

    /// Attach the new value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

// =============================================================================
// Event Context
// =============================================================================

/// Host state a widget may touch while handling an event.
#[derive(Debug)]
pub struct EventContext<'a> {
    focus: &'a mut FocusState,
    events: Vec<WidgetEvent>,
}

impl<'a> EventContext<'a> {
    pub fn new(focus: &'a mut FocusState) -> Self {
        Self {
            focus,
            events: Vec::new(),
        }
    }

    /// Currently focused element.
    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Move focus programmatically.
    pub fn focus(&mut self, id: &str) {
        self.focus.focus(id);
    }

    /// Queue a widget event for the host.
    pub fn push_event(&mut self, event: WidgetEvent) {
        self.events.push(event);
    }

    /// Take the queued events.
    pub fn drain_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.events)
    }
}

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation and prevent the default action.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Trait for widgets that can handle events.
///
/// All handlers default to `EventResult::Ignored`, so widgets only implement
/// the events they care about. Handlers receive the target element id and
/// should ignore targets they don't own.
pub trait WidgetEvents {
    /// Handle a pointer press.
    fn on_pointer_down(&self, _target: &str, _cx: &mut EventContext<'_>) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a click.
    fn on_click(&self, _target: &str, _cx: &mut EventContext<'_>) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key press on a focused element.
    fn on_key(
        &self,
        _target: &str,
        _key: Key,
        _modifiers: Modifiers,
        _cx: &mut EventContext<'_>,
    ) -> EventResult {
        EventResult::Ignored
    }

    /// Handle an element losing focus to `related` (None if focus left the page).
    fn on_blur(
        &self,
        _target: &str,
        _related: Option<&str>,
        _cx: &mut EventContext<'_>,
    ) -> EventResult {
        EventResult::Ignored
    }

    /// Route a host event to the matching handler.
    fn dispatch(&self, event: &Event, cx: &mut EventContext<'_>) -> EventResult {
        match event {
            Event::PointerDown {
                target: Some(target),
                ..
            } => self.on_pointer_down(target, cx),
            Event::Click {
                target: Some(target),
                ..
            } => self.on_click(target, cx),
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } => self.on_key(target, *key, *modifiers, cx),
            Event::Blur { target, related } => self.on_blur(target, related.as_deref(), cx),
            _ => EventResult::Ignored,
        }
    }
}
