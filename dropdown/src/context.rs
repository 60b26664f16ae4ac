//! Dropdown context and component scopes.
//!
//! A [`Scope`] is the chain of context a component sees from its position in
//! the component tree. A [`Dropdown`](crate::widgets::Dropdown) provides a
//! [`DropdownContext`] to everything below it; option children look it up
//! when they attach.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use crate::error::DropdownError;
use crate::widgets::dropdown::{DropdownId, OptionId, OptionValue, RegisteredOption};
use crate::widgets::dropdown::state::DropdownInner;

/// Shared handle to one dropdown's state.
///
/// Carries the registry and its mutators, the current selection and its
/// mutator, and the open/closed toggle. Cloning yields another handle to the
/// same dropdown.
#[derive(Debug, Clone)]
pub struct DropdownContext {
    id: DropdownId,
    inner: Arc<RwLock<DropdownInner>>,
    dirty: Arc<AtomicBool>,
}

impl DropdownContext {
    pub(crate) fn new(
        id: DropdownId,
        inner: Arc<RwLock<DropdownInner>>,
        dirty: Arc<AtomicBool>,
    ) -> Self {
        Self { id, inner, dirty }
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&DropdownInner) -> R) -> Option<R> {
        self.inner.read().ok().map(|guard| f(&*guard))
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut DropdownInner) -> R) -> Option<R> {
        self.inner.write().ok().map(|mut guard| f(&mut *guard))
    }

    pub(crate) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub(crate) fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// The dropdown this context belongs to.
    pub fn dropdown_id(&self) -> DropdownId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------

    /// Snapshot of the registry, in attach order.
    pub fn options(&self) -> Vec<RegisteredOption> {
        self.read(|inner| inner.registry.as_slice().to_vec())
            .unwrap_or_default()
    }

    pub fn option(&self, id: OptionId) -> Option<RegisteredOption> {
        self.read(|inner| inner.registry.get(id).cloned()).flatten()
    }

    pub(crate) fn option_by_element_id(&self, element_id: &str) -> Option<RegisteredOption> {
        self.read(|inner| inner.registry.find_by_element_id(element_id).cloned())
            .flatten()
    }

    /// Add an option, or update its entry in place if already registered.
    pub fn register(&self, option: RegisteredOption) {
        let id = option.id;
        let appended = self
            .write(|inner| inner.registry.upsert(option))
            .unwrap_or(false);
        self.mark_dirty();
        if appended {
            log::debug!("[dropdown] {} register {id}", self.id);
        } else {
            log::trace!("[dropdown] {} update {id}", self.id);
        }
    }

    /// Remove an option's entry.
    pub fn deregister(&self, id: OptionId) -> Option<RegisteredOption> {
        let removed = self
            .write(|inner| {
                if inner.active == Some(id) {
                    inner.active = None;
                }
                inner.registry.remove(id)
            })
            .flatten();
        if removed.is_some() {
            self.mark_dirty();
            log::debug!("[dropdown] {} deregister {id}", self.id);
        }
        removed
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn value(&self) -> Option<OptionValue> {
        self.read(|inner| inner.value.clone()).flatten()
    }

    /// Set the selection to a registered value.
    ///
    /// Only the initial default may name a value no option carries; later
    /// changes must pick one of the registered options.
    pub fn set_value(&self, value: OptionValue) -> Result<(), DropdownError> {
        let changed = self
            .write(|inner| {
                if inner.registry.first_with_value(&value).is_none() {
                    return Err(DropdownError::UnknownValue(value));
                }
                if inner.value.as_ref() == Some(&value) {
                    return Ok(false);
                }
                log::debug!("[dropdown] {} value {:?} -> {value}", self.id, inner.value);
                inner.value = Some(value);
                Ok(true)
            })
            .unwrap_or(Ok(false))?;
        if changed {
            self.mark_dirty();
        }
        Ok(())
    }

    /// The first registered option carrying the current value.
    pub fn selected_option(&self) -> Option<RegisteredOption> {
        self.read(|inner| {
            let value = inner.value.as_ref()?;
            inner.registry.first_with_value(value).cloned()
        })
        .flatten()
    }

    pub fn is_selected(&self, id: OptionId) -> bool {
        self.selected_option().is_some_and(|o| o.id == id)
    }

    // -------------------------------------------------------------------------
    // Open/close
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.read(|inner| inner.open).unwrap_or(false)
    }

    pub fn open(&self) {
        let opened = self
            .write(|inner| {
                if inner.open {
                    return false;
                }
                inner.open = true;
                // Start keyboard navigation at the selection, else the first option
                inner.active = inner
                    .value
                    .as_ref()
                    .and_then(|v| inner.registry.first_with_value(v))
                    .or_else(|| inner.registry.first())
                    .map(|o| o.id);
                inner.presence.enter(Instant::now());
                true
            })
            .unwrap_or(false);
        if opened {
            self.mark_dirty();
            log::debug!("[dropdown] {} open", self.id);
        }
    }

    /// Close without touching the selection.
    pub fn close(&self) {
        let closed = self
            .write(|inner| {
                if !inner.open {
                    return false;
                }
                inner.open = false;
                inner.active = None;
                inner.presence.exit(Instant::now());
                true
            })
            .unwrap_or(false);
        if closed {
            self.mark_dirty();
            log::debug!("[dropdown] {} close", self.id);
        }
    }

    pub fn toggle_open(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Set the selection and close. The dropdown stays open if the value is
    /// not registered.
    pub fn select(&self, value: OptionValue) -> Result<(), DropdownError> {
        self.set_value(value)?;
        self.close();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Active option
    // -------------------------------------------------------------------------

    pub fn active(&self) -> Option<OptionId> {
        self.read(|inner| inner.active).flatten()
    }

    pub fn set_active(&self, id: OptionId) {
        let changed = self
            .write(|inner| {
                if inner.registry.get(id).is_none() || inner.active == Some(id) {
                    return false;
                }
                inner.active = Some(id);
                true
            })
            .unwrap_or(false);
        if changed {
            self.mark_dirty();
        }
    }

    /// Move the active option by `delta` positions, clamped to the registry.
    pub(crate) fn move_active(&self, delta: isize) {
        let target = self
            .read(|inner| {
                let len = inner.registry.len();
                if len == 0 {
                    return None;
                }
                let next = match inner.active.and_then(|id| inner.registry.position(id)) {
                    Some(current) => current.saturating_add_signed(delta).min(len - 1),
                    None if delta < 0 => len - 1,
                    None => 0,
                };
                inner.registry.at(next).map(|o| o.id)
            })
            .flatten();
        if let Some(id) = target {
            self.set_active(id);
        }
    }

    pub(crate) fn set_active_edge(&self, last: bool) {
        let target = self
            .read(|inner| {
                if last {
                    inner.registry.last().map(|o| o.id)
                } else {
                    inner.registry.first().map(|o| o.id)
                }
            })
            .flatten();
        if let Some(id) = target {
            self.set_active(id);
        }
    }
}

/// Context visible to a component at its position in the tree.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    dropdown: Option<DropdownContext>,
}

impl Scope {
    /// The scope at the top of a page: provides nothing.
    pub fn root() -> Self {
        Self::default()
    }

    /// A child scope in which `context` is the nearest dropdown.
    pub fn with_dropdown(&self, context: DropdownContext) -> Self {
        Self {
            dropdown: Some(context),
        }
    }

    /// Look up the nearest dropdown on behalf of `component`.
    pub fn dropdown(&self, component: &'static str) -> Result<DropdownContext, DropdownError> {
        self.dropdown
            .clone()
            .ok_or(DropdownError::OutsideDropdown { component })
    }
}

/// Look up the nearest dropdown's context.
///
/// Fails with [`DropdownError::OutsideDropdown`] when called outside a dropdown.
pub fn use_dropdown(scope: &Scope) -> Result<DropdownContext, DropdownError> {
    scope.dropdown("use_dropdown")
}
