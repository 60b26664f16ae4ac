//! Attach/detach lifecycle for components.
//!
//! The host tree calls [`Lifecycle::on_attach`] when a component enters the
//! tree and [`Lifecycle::on_detach`] when it leaves. [`Mounted`] pairs the two:
//! every successful attach is followed by exactly one detach, either
//! explicitly through [`Mounted::detach`] or when the guard is dropped.

use std::ops::{Deref, DerefMut};

use crate::context::Scope;
use crate::error::DropdownError;

/// Lifecycle hooks for a component.
pub trait Lifecycle {
    /// Called when the component enters the tree at `scope`.
    fn on_attach(&mut self, scope: &Scope) -> Result<(), DropdownError>;

    /// Called when the component leaves the tree.
    fn on_detach(&mut self);
}

/// A component attached to the tree. Detaches on drop.
#[derive(Debug)]
#[must_use = "dropping a Mounted component detaches it immediately"]
pub struct Mounted<T: Lifecycle> {
    component: Option<T>,
}

impl<T: Lifecycle> Mounted<T> {
    /// Attach `component` at `scope`.
    ///
    /// If attaching fails the component is dropped without a detach call.
    pub fn attach(mut component: T, scope: &Scope) -> Result<Self, DropdownError> {
        component.on_attach(scope)?;
        Ok(Self {
            component: Some(component),
        })
    }

    /// Detach now and hand the component back.
    pub fn detach(mut self) -> T {
        let mut component = self
            .component
            .take()
            .unwrap_or_else(|| unreachable!("Mounted holds its component until detached"));
        component.on_detach();
        component
    }
}

impl<T: Lifecycle> Deref for Mounted<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match &self.component {
            Some(component) => component,
            None => unreachable!("Mounted holds its component until detached"),
        }
    }
}

impl<T: Lifecycle> DerefMut for Mounted<T> {
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.component {
            Some(component) => component,
            None => unreachable!("Mounted holds its component until detached"),
        }
    }
}

impl<T: Lifecycle> Drop for Mounted<T> {
    fn drop(&mut self) {
        if let Some(component) = self.component.as_mut() {
            component.on_detach();
        }
    }
}
