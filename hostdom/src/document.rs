//! Document root and named mount points.
//!
//! A mount point is a container outside the normal page flow (the
//! equivalent of a `<div id="dialogs">` portal target). Widgets that render
//! overlays push their overlay node into a mount point instead of returning
//! it as part of their own subtree.

use std::collections::BTreeMap;

use crate::element::{self, Element};
use crate::error::DocumentError;
use crate::form::FormData;

/// Anything a widget can mount detached nodes into.
///
/// Mounting a node whose id is already mounted replaces it in place, so a
/// widget can re-mount its overlay on every render without piling up copies.
pub trait MountTarget {
    /// Mount (or replace) a node.
    fn mount(&mut self, node: Element);

    /// Remove the node with the given id, returning it if it was mounted.
    fn unmount(&mut self, id: &str) -> Option<Element>;

    /// Returns true if a node with the given id is mounted here.
    fn is_mounted(&self, id: &str) -> bool;
}

/// A named container for detached nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountPoint {
    name: String,
    nodes: Vec<Element>,
}

impl MountPoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currently mounted nodes, in mount order.
    pub fn nodes(&self) -> &[Element] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl MountTarget for MountPoint {
    fn mount(&mut self, node: Element) {
        match self.nodes.iter_mut().find(|n| n.id == node.id) {
            Some(existing) => *existing = node,
            None => {
                log::trace!("[mount] {} <- {}", self.name, node.id);
                self.nodes.push(node);
            }
        }
    }

    fn unmount(&mut self, id: &str) -> Option<Element> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        log::trace!("[mount] {} -x {}", self.name, id);
        Some(self.nodes.remove(idx))
    }

    fn is_mounted(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }
}

/// The host document: a page body plus named mount points.
#[derive(Debug, Clone)]
pub struct Document {
    body: Element,
    mount_points: BTreeMap<String, MountPoint>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Element::new("body").id("body"))
    }
}

impl Document {
    pub fn new(body: Element) -> Self {
        Self {
            body,
            mount_points: BTreeMap::new(),
        }
    }

    /// Add an empty mount point.
    pub fn with_mount_point(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.mount_points
            .insert(name.clone(), MountPoint::new(name));
        self
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Replace the page body (e.g. after re-rendering the page).
    pub fn set_body(&mut self, body: Element) {
        self.body = body;
    }

    pub fn mount_point(&self, name: &str) -> Result<&MountPoint, DocumentError> {
        self.mount_points
            .get(name)
            .ok_or_else(|| DocumentError::UnknownMountPoint(name.to_string()))
    }

    pub fn mount_point_mut(&mut self, name: &str) -> Result<&mut MountPoint, DocumentError> {
        self.mount_points
            .get_mut(name)
            .ok_or_else(|| DocumentError::UnknownMountPoint(name.to_string()))
    }

    /// Find an element in the body or in any mount point.
    pub fn find(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.body, id).or_else(|| {
            self.mount_points
                .values()
                .flat_map(|mp| mp.nodes.iter())
                .find_map(|node| element::find_element(node, id))
        })
    }

    /// Collect the submittable fields of the form with the given id.
    pub fn form_data(&self, form_id: &str) -> Result<FormData, DocumentError> {
        let form = element::find_element(&self.body, form_id)
            .ok_or_else(|| DocumentError::UnknownElement(form_id.to_string()))?;
        Ok(FormData::collect(form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_replaces_same_id() {
        let mut mp = MountPoint::new("dialogs");
        mp.mount(Element::div().id("overlay").data("state", "a"));
        mp.mount(Element::div().id("overlay").data("state", "b"));

        assert_eq!(mp.nodes().len(), 1);
        assert_eq!(mp.nodes()[0].get_data("state"), Some("b"));
    }

    #[test]
    fn test_unmount_missing_is_none() {
        let mut mp = MountPoint::new("dialogs");
        assert!(mp.unmount("nope").is_none());
    }
}
