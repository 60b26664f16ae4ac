//! Dropdown widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use hostdom::{MediaEnvironment, MediaQuery, Phase, Presence, Subscription};

use crate::config::DropdownConfig;
use crate::context::{DropdownContext, Scope};
use crate::error::DropdownError;

use super::registry::{OptionId, OptionRegistry, OptionValue, RegisteredOption};

/// Unique identifier for a Dropdown widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownId(usize);

impl DropdownId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DropdownId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__dropdown_{}", self.0)
    }
}

/// How the option list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Rendered inline beneath the trigger.
    Inline,
    /// Rendered into the overlay mount point with a backdrop.
    Overlay,
}

/// Host-supplied properties.
#[derive(Debug, Clone, Default)]
pub struct DropdownProps {
    /// Form field name the value is submitted under.
    pub name: Option<String>,
    /// Element id of the trigger, for `<label for>` association.
    pub id: Option<String>,
    /// Initial selection. May name a value no option carries yet.
    pub default_value: Option<OptionValue>,
    /// Accessible label for the trigger.
    pub label: Option<String>,
    pub config: DropdownConfig,
}

impl DropdownProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<OptionValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn config(mut self, config: DropdownConfig) -> Self {
        self.config = config;
        self
    }
}

/// Internal state for a Dropdown widget.
#[derive(Debug)]
pub(crate) struct DropdownInner {
    pub(crate) registry: OptionRegistry,
    pub(crate) value: Option<OptionValue>,
    pub(crate) open: bool,
    /// Option highlighted for keyboard selection while open
    pub(crate) active: Option<OptionId>,
    pub(crate) desktop: bool,
    pub(crate) presence: Presence,
    /// Whether the overlay node currently sits in the mount point
    pub(crate) overlay_mounted: bool,
}

/// An accessible dropdown select with reactive state.
///
/// The dropdown owns its state; option children reach it through the
/// [`DropdownContext`] handed out by [`scope`](Self::scope). The
/// presentation follows the desktop media query live, and dropping the
/// dropdown unsubscribes it from the [`MediaEnvironment`].
///
/// # Example
///
/// ```ignore
/// let env = MediaEnvironment::default();
/// let dropdown = Dropdown::new(
///     DropdownProps::new().name("type").default_value("Talk"),
///     &env,
/// );
/// let scope = dropdown.scope(&Scope::root());
/// let talk = Mounted::attach(DropdownOption::new().text("Talk"), &scope)?;
/// let workshop = Mounted::attach(DropdownOption::new().text("Workshop"), &scope)?;
/// ```
#[derive(Debug)]
pub struct Dropdown {
    /// Unique identifier for this dropdown instance
    id: DropdownId,
    props: DropdownProps,
    /// Shared state, also reachable through contexts
    context: DropdownContext,
    /// Media listeners, released on drop
    _subscriptions: Vec<Subscription>,
}

impl Dropdown {
    /// Create a dropdown and subscribe it to the environment's desktop and
    /// reduced-motion signals.
    pub fn new(props: DropdownProps, media: &MediaEnvironment) -> Self {
        let id = DropdownId::new();
        let desktop_query = props.config.desktop_query();

        let mut presence = Presence::new(props.config.transition);
        presence.set_reduced_motion(media.matches(MediaQuery::PrefersReducedMotion));

        let inner = Arc::new(RwLock::new(DropdownInner {
            registry: OptionRegistry::new(),
            value: props.default_value.clone(),
            open: false,
            active: None,
            desktop: media.matches(desktop_query),
            presence,
            overlay_mounted: false,
        }));
        let dirty = Arc::new(AtomicBool::new(false));

        let desktop_sub = {
            let inner = Arc::downgrade(&inner);
            let dirty = Arc::clone(&dirty);
            media.subscribe(desktop_query, move |desktop| {
                let Some(inner) = inner.upgrade() else { return };
                if let Ok(mut guard) = inner.write() {
                    guard.desktop = desktop;
                    dirty.store(true, Ordering::SeqCst);
                    log::debug!("[dropdown] {id} desktop={desktop}");
                }
            })
        };
        let motion_sub = {
            let inner = Arc::downgrade(&inner);
            let dirty = Arc::clone(&dirty);
            media.subscribe(MediaQuery::PrefersReducedMotion, move |reduced| {
                let Some(inner) = inner.upgrade() else { return };
                if let Ok(mut guard) = inner.write() {
                    guard.presence.set_reduced_motion(reduced);
                    dirty.store(true, Ordering::SeqCst);
                }
            })
        };

        log::debug!(
            "[dropdown] {id} created name={:?} default={:?}",
            props.name,
            props.default_value
        );

        Self {
            id,
            context: DropdownContext::new(id, inner, dirty),
            props,
            _subscriptions: vec![desktop_sub, motion_sub],
        }
    }

    /// Get the unique ID for this dropdown.
    pub fn id(&self) -> DropdownId {
        self.id
    }

    /// Get the ID as a string (root element id).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn props(&self) -> &DropdownProps {
        &self.props
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.props.config
    }

    /// Shared handle for option children.
    pub fn context(&self) -> DropdownContext {
        self.context.clone()
    }

    /// A child scope that provides this dropdown to its descendants.
    pub fn scope(&self, parent: &Scope) -> Scope {
        parent.with_dropdown(self.context())
    }

    // -------------------------------------------------------------------------
    // Element ids
    // -------------------------------------------------------------------------

    pub fn trigger_id(&self) -> String {
        self.props
            .id
            .clone()
            .unwrap_or_else(|| format!("{}-trigger", self.id))
    }

    pub fn listbox_id(&self) -> String {
        format!("{}-listbox", self.id)
    }

    pub fn overlay_id(&self) -> String {
        format!("{}-overlay", self.id)
    }

    pub fn backdrop_id(&self) -> String {
        format!("{}-backdrop", self.id)
    }

    /// Returns true if the element id belongs to this widget.
    pub fn owns(&self, element_id: &str) -> bool {
        element_id == self.id_string()
            || element_id == self.trigger_id()
            || element_id == self.listbox_id()
            || element_id == self.overlay_id()
            || element_id == self.backdrop_id()
            || self.context.option_by_element_id(element_id).is_some()
    }

    // -------------------------------------------------------------------------
    // Selection state
    // -------------------------------------------------------------------------

    /// Current selection.
    pub fn value(&self) -> Option<OptionValue> {
        self.context.value()
    }

    /// The option that counts as selected, if the value is registered.
    pub fn selected_option(&self) -> Option<RegisteredOption> {
        self.context.selected_option()
    }

    /// Text shown in the trigger: the selected option's display text, or the
    /// raw value while no option carries it.
    pub fn display_text(&self) -> String {
        match (self.selected_option(), self.value()) {
            (Some(option), _) => option.display_text,
            (None, Some(value)) => value.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Value submitted with the form.
    pub fn form_value(&self) -> String {
        self.value().map(|v| v.to_string()).unwrap_or_default()
    }

    pub fn options(&self) -> Vec<RegisteredOption> {
        self.context.options()
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.context.is_open()
    }

    pub fn open(&self) {
        self.context.open();
    }

    pub fn close(&self) {
        self.context.close();
    }

    pub fn toggle(&self) {
        self.context.toggle_open();
    }

    /// Select a registered value and close.
    pub fn select(&self, value: OptionValue) -> Result<(), DropdownError> {
        self.context.select(value)
    }

    // -------------------------------------------------------------------------
    // Active option (keyboard navigation when open)
    // -------------------------------------------------------------------------

    pub fn active(&self) -> Option<OptionId> {
        self.context.active()
    }

    pub fn active_next(&self) {
        self.context.move_active(1);
    }

    pub fn active_prev(&self) {
        self.context.move_active(-1);
    }

    pub fn active_first(&self) {
        self.context.set_active_edge(false);
    }

    pub fn active_last(&self) {
        self.context.set_active_edge(true);
    }

    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------

    /// Presentation implied by the desktop signal alone. Rendering falls back
    /// to inline when no overlay mount point is available.
    pub fn presentation(&self) -> Presentation {
        if self.context.read(|inner| inner.desktop).unwrap_or(true) {
            Presentation::Inline
        } else {
            Presentation::Overlay
        }
    }

    /// Current open/close transition phase.
    pub fn transition_phase(&self) -> Phase {
        self.context
            .read(|inner| inner.presence.phase())
            .unwrap_or_default()
    }

    /// Whether the option list is rendered (open, or still exiting).
    pub fn is_list_rendered(&self) -> bool {
        self.context
            .read(|inner| inner.presence.is_rendered())
            .unwrap_or(false)
    }

    /// Advance transitions. Returns true if a re-render is needed.
    pub fn tick(&self, now: Instant) -> bool {
        let changed = self
            .context
            .write(|inner| inner.presence.tick(now))
            .unwrap_or(false);
        if changed {
            self.context.mark_dirty();
        }
        changed
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the dropdown state has changed.
    pub fn is_dirty(&self) -> bool {
        self.context.is_dirty()
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.context.clear_dirty();
    }
}
