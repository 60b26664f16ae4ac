//! Enter/exit presence tracking for conditionally rendered nodes.
//!
//! A node that appears or disappears goes through a short `Entering` or
//! `Exiting` phase before settling back to `Idle`. While exiting, the node
//! must stay rendered so the exit animation can play. Time only advances
//! through [`Presence::tick`], so hosts drive it from their frame loop and
//! tests drive it with explicit instants.

use std::time::Instant;

use crate::transitions::TransitionConfig;

/// Current animation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Entering,
    Exiting,
}

impl Phase {
    /// Value for a `data-transition` attribute, None when idle.
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            Phase::Idle => None,
            Phase::Entering => Some("enter"),
            Phase::Exiting => Some("exit"),
        }
    }
}

/// Tracks whether a node is present and which transition it is in.
#[derive(Debug, Clone)]
pub struct Presence {
    present: bool,
    phase: Phase,
    started: Option<Instant>,
    config: TransitionConfig,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
}

impl Presence {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            present: false,
            phase: Phase::Idle,
            started: None,
            config,
            reduced_motion: false,
        }
    }

    /// Enable or disable reduced motion (accessibility).
    /// Enabling it settles any running transition immediately.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if enabled {
            self.settle();
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the node should be rendered: present, or still exiting.
    pub fn is_rendered(&self) -> bool {
        self.present || self.phase == Phase::Exiting
    }

    /// Show the node. Returns true if anything changed.
    pub fn enter(&mut self, now: Instant) -> bool {
        if self.present {
            return false;
        }
        self.present = true;
        self.begin(Phase::Entering, now);
        true
    }

    /// Hide the node. Returns true if anything changed.
    pub fn exit(&mut self, now: Instant) -> bool {
        if !self.present {
            return false;
        }
        self.present = false;
        self.begin(Phase::Exiting, now);
        true
    }

    /// Advance time. Returns true if the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started) = self.started else {
            return false;
        };
        if now.saturating_duration_since(started) < self.config.duration {
            return false;
        }
        self.settle();
        true
    }

    fn begin(&mut self, phase: Phase, now: Instant) {
        if self.reduced_motion || self.config.is_instant() {
            self.settle();
        } else {
            self.phase = phase;
            self.started = Some(now);
        }
    }

    fn settle(&mut self) {
        self.phase = Phase::Idle;
        self.started = None;
    }
}

impl Default for Presence {
    fn default() -> Self {
        Self::new(TransitionConfig::default())
    }
}
