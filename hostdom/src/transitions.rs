use std::time::Duration;

/// Configuration for an enter/exit transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// A transition that completes immediately.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Easing::Linear)
    }

    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(100), Easing::EaseOut)
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// CSS `transition-timing-function` keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

impl TransitionConfig {
    /// Inline style declaring this transition, e.g.
    /// `transition-duration: 100ms; transition-timing-function: ease-out`.
    pub fn css(&self) -> String {
        format!(
            "transition-duration: {}ms; transition-timing-function: {}",
            self.duration.as_millis(),
            self.easing.css_name()
        )
    }
}
