//! Event handling for the UserMenu widget.

use hostdom::{Key, Modifiers};

use crate::widgets::events::{
    EventContext, EventResult, WidgetEvent, WidgetEventKind, WidgetEvents,
};

use super::UserMenu;

impl UserMenu {
    fn toggle_and_focus(&self, cx: &mut EventContext<'_>) {
        self.toggle();
        if self.is_open() {
            cx.focus(&self.sign_out_id());
            cx.push_event(WidgetEvent::new(WidgetEventKind::Open, self.id_string()));
        } else {
            cx.push_event(WidgetEvent::new(WidgetEventKind::Close, self.id_string()));
        }
    }
}

impl WidgetEvents for UserMenu {
    fn on_click(&self, target: &str, cx: &mut EventContext<'_>) -> EventResult {
        if target != self.trigger_id() {
            return EventResult::Ignored;
        }
        self.toggle_and_focus(cx);
        EventResult::Consumed
    }

    fn on_key(
        &self,
        target: &str,
        key: Key,
        _modifiers: Modifiers,
        cx: &mut EventContext<'_>,
    ) -> EventResult {
        if target == self.trigger_id() {
            return match key {
                Key::Enter | Key::Char(' ') => {
                    self.toggle_and_focus(cx);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        if !self.menu_contains(target) {
            return EventResult::Ignored;
        }

        match key {
            Key::Tab | Key::Escape => {
                cx.focus(&self.trigger_id());
                if self.is_open() {
                    self.close();
                    cx.push_event(WidgetEvent::new(WidgetEventKind::Close, self.id_string()));
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_blur(
        &self,
        target: &str,
        related: Option<&str>,
        cx: &mut EventContext<'_>,
    ) -> EventResult {
        if !self.is_open() || !self.menu_contains(target) {
            return EventResult::Ignored;
        }
        if related.is_some_and(|id| self.menu_contains(id) || id == self.trigger_id()) {
            return EventResult::Ignored;
        }

        self.close();
        cx.push_event(WidgetEvent::new(WidgetEventKind::Close, self.id_string()));
        EventResult::Consumed
    }
}
