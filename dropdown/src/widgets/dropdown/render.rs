//! Rendering for the Dropdown widget.
//!
//! The trigger and the hidden form field always render in place. The option
//! list renders inline beneath the trigger, or, outside desktop mode, inside
//! an overlay node that is mounted into a [`MountTarget`].

use hostdom::{Document, Element, MountTarget};

use super::registry::RegisteredOption;
use super::{Dropdown, Presentation};

impl Dropdown {
    /// Render the widget.
    ///
    /// `portal` receives the overlay in overlay presentation. Without one the
    /// list renders inline whatever the presentation.
    pub fn render(&self, portal: Option<&mut dyn MountTarget>) -> Element {
        let rendered = self.is_list_rendered();
        let overlay = self.presentation() == Presentation::Overlay && portal.is_some();

        let mut root = Element::div()
            .id(self.id_string())
            .data("dropdown", "")
            .child(self.render_trigger(overlay))
            .child(Element::hidden_input(
                self.props().name.clone().unwrap_or_default(),
                self.form_value(),
            ));

        if rendered && !overlay {
            root = root.child(self.render_list());
        }

        match portal {
            Some(portal) => self.sync_overlay(portal, rendered && overlay),
            None if self.is_overlay_mounted() => {
                log::warn!(
                    "[dropdown] {} rendered without a portal while its overlay is mounted",
                    self.id()
                );
            }
            None => {}
        }

        root
    }

    /// Render into a document: the overlay goes to the configured mount point
    /// if the document has it.
    pub fn render_in(&self, document: &mut Document) -> Element {
        match document.mount_point_mut(&self.config().portal_target) {
            Ok(mount_point) => self.render(Some(mount_point)),
            Err(err) => {
                log::trace!("[dropdown] {} rendering inline: {err}", self.id());
                self.render(None)
            }
        }
    }

    fn render_trigger(&self, overlay: bool) -> Element {
        let open = self.is_open();
        let active = if open { self.active() } else { None };

        Element::div()
            .id(self.trigger_id())
            .data("dropdown-title", "")
            .role("combobox")
            .attr("tabindex", "0")
            .focusable(true)
            .aria("expanded", open.to_string())
            .aria("controls", self.listbox_id())
            .attr_opt("aria-haspopup", overlay.then_some("dialog"))
            .attr_opt("aria-label", self.props().label.clone())
            .attr_opt("aria-activedescendant", active.map(|id| id.to_string()))
            .child(Element::span(self.display_text()).data("dropdown-value", ""))
            .child(Element::span("").data("icon", "ChevronDown").aria("hidden", "true"))
    }

    fn render_list(&self) -> Element {
        let selected = self.selected_option().map(|o| o.id);

        let items = self.options().into_iter().map(|option| {
            let is_selected = selected == Some(option.id);
            render_option(option, is_selected)
        });

        let phase = self.transition_phase().as_attr();

        Element::list()
            .id(self.listbox_id())
            .data("dropdown-options", "")
            .role("listbox")
            .attr("tabindex", "-1")
            .focusable(true)
            .attr_opt("data-transition", phase)
            .attr_opt("style", phase.map(|_| self.config().transition.css()))
            .children(items)
    }

    fn render_overlay(&self) -> Element {
        Element::div()
            .id(self.overlay_id())
            .data("dropdown-overlay", "")
            .child(
                Element::div()
                    .id(self.backdrop_id())
                    .data("dropdown-backdrop", "")
                    .data("is-open", self.is_open().to_string()),
            )
            .child(
                Element::div()
                    .role("dialog")
                    .aria("modal", "true")
                    .attr_opt("aria-label", self.props().label.clone())
                    .child(self.render_list()),
            )
    }

    /// Keep the mount point in step with the overlay's presence.
    fn sync_overlay(&self, portal: &mut dyn MountTarget, show: bool) {
        let overlay_id = self.overlay_id();
        if show {
            portal.mount(self.render_overlay());
        } else if portal.unmount(&overlay_id).is_some() {
            log::debug!("[dropdown] {} overlay unmounted", self.id());
        }

        let was_mounted = self
            .context()
            .write(|inner| std::mem::replace(&mut inner.overlay_mounted, show))
            .unwrap_or(false);
        if show && !was_mounted {
            log::debug!("[dropdown] {} overlay mounted", self.id());
        }
    }

    /// Remove the overlay from `portal` if this dropdown mounted it there.
    /// Returns true if a node was removed.
    pub fn unmount_overlay(&self, portal: &mut dyn MountTarget) -> bool {
        let removed = portal.unmount(&self.overlay_id()).is_some();
        self.context().write(|inner| inner.overlay_mounted = false);
        if removed {
            log::debug!("[dropdown] {} overlay unmounted", self.id());
        }
        removed
    }

    /// Tear the dropdown down: its overlay leaves the document's mount point
    /// and its media subscriptions end.
    pub fn teardown_in(self, document: &mut Document) {
        if let Ok(mount_point) = document.mount_point_mut(&self.config().portal_target) {
            self.unmount_overlay(mount_point);
        }
    }

    /// Whether the overlay node is currently in a mount point.
    pub fn is_overlay_mounted(&self) -> bool {
        self.context()
            .read(|inner| inner.overlay_mounted)
            .unwrap_or(false)
    }
}

fn render_option(option: RegisteredOption, selected: bool) -> Element {
    let item = Element::item()
        .id(option.id.to_string())
        .role("option")
        .aria("selected", selected.to_string())
        .attr_opt("data-selected", selected.then_some(""));

    if option.content.is_empty() {
        item.text(option.display_text)
    } else {
        item.children(option.content)
    }
}
