//! Dropdown configuration types.

use hostdom::{Breakpoints, MediaQuery, TransitionConfig};

/// Name of the default overlay mount point.
pub const DEFAULT_PORTAL_TARGET: &str = "dialogs";

/// Per-dropdown configuration.
#[derive(Debug, Clone)]
pub struct DropdownConfig {
    /// Breakpoints; the desktop one selects the inline presentation.
    pub breakpoints: Breakpoints,

    /// Open/close transition. Ignored when the user prefers reduced motion.
    pub transition: TransitionConfig,

    /// Mount point that receives the overlay outside desktop mode.
    pub portal_target: String,

    /// Behavior when focus leaves the widget while open.
    pub on_blur: BlurPolicy,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            transition: TransitionConfig::default(),
            portal_target: DEFAULT_PORTAL_TARGET.to_string(),
            on_blur: BlurPolicy::default(),
        }
    }
}

impl DropdownConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the breakpoints.
    pub fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Set the open/close transition.
    pub fn transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    /// Set the overlay mount point name.
    pub fn portal_target(mut self, name: impl Into<String>) -> Self {
        self.portal_target = name.into();
        self
    }

    /// Set the blur policy.
    pub fn on_blur(mut self, policy: BlurPolicy) -> Self {
        self.on_blur = policy;
        self
    }

    /// The query deciding between inline and overlay presentation.
    pub fn desktop_query(&self) -> MediaQuery {
        self.breakpoints.desktop_query()
    }
}

/// Behavior when focus leaves an open dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlurPolicy {
    /// Close in every presentation.
    #[default]
    Close,
    /// Close only in the inline (desktop) presentation; the overlay is
    /// dismissed through its backdrop.
    CloseOnDesktop,
}
