//! Event handling for the Dropdown widget.

use hostdom::{Key, Modifiers};

use crate::config::BlurPolicy;
use crate::widgets::events::{
    EventContext, EventResult, WidgetEvent, WidgetEventKind, WidgetEvents,
};

use super::{Dropdown, Presentation};

impl Dropdown {
    fn open_and_focus_list(&self, cx: &mut EventContext<'_>) {
        self.open();
        cx.focus(&self.listbox_id());
        cx.push_event(WidgetEvent::new(WidgetEventKind::Open, self.id_string()));
    }

    fn close_and_focus_trigger(&self, cx: &mut EventContext<'_>) {
        self.close();
        cx.focus(&self.trigger_id());
        cx.push_event(WidgetEvent::new(WidgetEventKind::Close, self.id_string()));
    }

    /// Select the option rendered with `element_id`, close, and report the change.
    fn select_element(&self, element_id: &str, cx: &mut EventContext<'_>) -> EventResult {
        let Some(option) = self.context().option_by_element_id(element_id) else {
            return EventResult::Ignored;
        };
        let changed = self.value().as_ref() != Some(&option.value);
        let value = option.value.to_string();

        if let Err(err) = self.select(option.value) {
            log::warn!("[dropdown] {} select failed: {err}", self.id());
            return EventResult::Ignored;
        }
        cx.focus(&self.trigger_id());
        cx.push_event(WidgetEvent::new(WidgetEventKind::Close, self.id_string()));
        if changed {
            cx.push_event(
                WidgetEvent::new(WidgetEventKind::Change, self.id_string()).with_value(value),
            );
        }
        EventResult::Consumed
    }

    fn select_active(&self, cx: &mut EventContext<'_>) -> EventResult {
        match self.active() {
            Some(id) => self.select_element(&id.to_string(), cx),
            None => {
                self.close_and_focus_trigger(cx);
                EventResult::Consumed
            }
        }
    }

    fn closes_on_blur(&self) -> bool {
        match self.config().on_blur {
            BlurPolicy::Close => true,
            BlurPolicy::CloseOnDesktop => self.presentation() == Presentation::Inline,
        }
    }
}

impl WidgetEvents for Dropdown {
    fn on_pointer_down(&self, target: &str, cx: &mut EventContext<'_>) -> EventResult {
        if target != self.trigger_id() {
            return EventResult::Ignored;
        }

        if self.is_open() {
            self.close_and_focus_trigger(cx);
        } else {
            self.open_and_focus_list(cx);
        }
        // Prevent the default focus change on press
        EventResult::Consumed
    }

    fn on_click(&self, target: &str, cx: &mut EventContext<'_>) -> EventResult {
        if !self.is_open() {
            return EventResult::Ignored;
        }

        if target == self.backdrop_id() {
            self.close_and_focus_trigger(cx);
            return EventResult::Consumed;
        }

        self.select_element(target, cx)
    }

    fn on_key(
        &self,
        target: &str,
        key: Key,
        modifiers: Modifiers,
        cx: &mut EventContext<'_>,
    ) -> EventResult {
        if !self.owns(target) || modifiers.ctrl {
            return EventResult::Ignored;
        }

        if !self.is_open() {
            // Closed state - open on Enter, Space, or Alt+Up/Down
            return match key {
                Key::Enter | Key::Char(' ') => {
                    self.open_and_focus_list(cx);
                    EventResult::Consumed
                }
                Key::Up | Key::Down if modifiers.alt => {
                    self.open_and_focus_list(cx);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        // Open state - navigate and select
        match key {
            Key::Escape | Key::Tab => {
                self.close_and_focus_trigger(cx);
                EventResult::Consumed
            }
            Key::Up | Key::Down if modifiers.alt => {
                self.close_and_focus_trigger(cx);
                EventResult::Consumed
            }
            Key::Up => {
                self.active_prev();
                EventResult::Consumed
            }
            Key::Down => {
                self.active_next();
                EventResult::Consumed
            }
            Key::Home | Key::PageUp => {
                self.active_first();
                EventResult::Consumed
            }
            Key::End | Key::PageDown => {
                self.active_last();
                EventResult::Consumed
            }
            Key::Enter | Key::Char(' ') => self.select_active(cx),
            _ => EventResult::Ignored,
        }
    }

    fn on_blur(
        &self,
        target: &str,
        related: Option<&str>,
        cx: &mut EventContext<'_>,
    ) -> EventResult {
        if !self.is_open() || !self.owns(target) {
            return EventResult::Ignored;
        }
        // Focus moving between parts of the widget (trigger, list, options)
        if related.is_some_and(|id| self.owns(id)) {
            return EventResult::Ignored;
        }
        if !self.closes_on_blur() {
            return EventResult::Ignored;
        }

        log::debug!("[dropdown] {} focus left to {:?}", self.id(), related);
        self.close();
        cx.push_event(WidgetEvent::new(WidgetEventKind::Close, self.id_string()));
        EventResult::Consumed
    }
}
