//! Media queries and boundary-crossing signals.
//!
//! [`MediaEnvironment`] is the host's view of the viewport and user
//! preferences. Widgets subscribe to a [`MediaQuery`] and are called back only
//! when the query's result flips, e.g. when a resize crosses the desktop
//! breakpoint. Dropping the returned [`Subscription`] unsubscribes.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

/// Root font size used to express pixel breakpoints in `rem`.
pub const ROOT_FONT_SIZE_PX: f32 = 16.0;

/// A media condition evaluated against the [`MediaEnvironment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaQuery {
    /// `(min-width: ...)`, in pixels.
    MinWidth(u16),
    /// `(max-width: ...)`, in pixels.
    MaxWidth(u16),
    /// `(prefers-reduced-motion: reduce)`.
    PrefersReducedMotion,
}

impl MediaQuery {
    pub fn matches(&self, viewport_width: u16, reduced_motion: bool) -> bool {
        match *self {
            MediaQuery::MinWidth(px) => viewport_width >= px,
            MediaQuery::MaxWidth(px) => viewport_width <= px,
            MediaQuery::PrefersReducedMotion => reduced_motion,
        }
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaQuery::MinWidth(px) => {
                write!(f, "(min-width: {}rem)", *px as f32 / ROOT_FONT_SIZE_PX)
            }
            MediaQuery::MaxWidth(px) => {
                write!(f, "(max-width: {}rem)", *px as f32 / ROOT_FONT_SIZE_PX)
            }
            MediaQuery::PrefersReducedMotion => write!(f, "(prefers-reduced-motion: reduce)"),
        }
    }
}

/// Responsive breakpoints, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub tablet: u16,
    pub laptop: u16,
    pub desktop: u16,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: 550,
            laptop: 1100,
            desktop: 1500,
        }
    }
}

impl Breakpoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn desktop(mut self, px: u16) -> Self {
        self.desktop = px;
        self
    }

    pub fn desktop_query(&self) -> MediaQuery {
        MediaQuery::MinWidth(self.desktop)
    }

    /// Complement of [`desktop_query`](Self::desktop_query).
    pub fn not_desktop_query(&self) -> MediaQuery {
        MediaQuery::MaxWidth(self.desktop.saturating_sub(1))
    }
}

type Listener = Arc<dyn Fn(bool) + Send + Sync>;

struct ListenerEntry {
    id: u64,
    query: MediaQuery,
    last: bool,
    callback: Listener,
}

struct EnvironmentInner {
    viewport_width: u16,
    reduced_motion: bool,
    listeners: Vec<ListenerEntry>,
}

/// Viewport and preference state with change notification.
///
/// Cloning shares the same environment.
#[derive(Clone)]
pub struct MediaEnvironment {
    inner: Arc<RwLock<EnvironmentInner>>,
}

impl fmt::Debug for MediaEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MediaEnvironment");
        if let Ok(guard) = self.inner.read() {
            s.field("viewport_width", &guard.viewport_width)
                .field("reduced_motion", &guard.reduced_motion)
                .field("listeners", &guard.listeners.len());
        }
        s.finish()
    }
}

impl Default for MediaEnvironment {
    fn default() -> Self {
        Self::new(Breakpoints::default().desktop, false)
    }
}

impl MediaEnvironment {
    pub fn new(viewport_width: u16, reduced_motion: bool) -> Self {
        Self {
            inner: Arc::new(RwLock::new(EnvironmentInner {
                viewport_width,
                reduced_motion,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn viewport_width(&self) -> u16 {
        self.inner
            .read()
            .map(|guard| guard.viewport_width)
            .unwrap_or(0)
    }

    pub fn prefers_reduced_motion(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.reduced_motion)
            .unwrap_or(false)
    }

    /// Evaluate a query against the current environment.
    pub fn matches(&self, query: MediaQuery) -> bool {
        self.inner
            .read()
            .map(|guard| query.matches(guard.viewport_width, guard.reduced_motion))
            .unwrap_or(false)
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.listeners.len())
            .unwrap_or(0)
    }

    /// Subscribe to changes of a query's result.
    ///
    /// The callback is not invoked for the current value; read it with
    /// [`matches`](Self::matches) when subscribing.
    pub fn subscribe<F>(&self, query: MediaQuery, callback: F) -> Subscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        static NEXT_LISTENER: AtomicU64 = AtomicU64::new(0);
        let id = NEXT_LISTENER.fetch_add(1, Ordering::Relaxed);

        if let Ok(mut guard) = self.inner.write() {
            let last = query.matches(guard.viewport_width, guard.reduced_motion);
            guard.listeners.push(ListenerEntry {
                id,
                query,
                last,
                callback: Arc::new(callback),
            });
            log::debug!("[media] subscribe #{id} to {query}");
        }

        Subscription {
            id,
            env: Arc::downgrade(&self.inner),
        }
    }

    /// Resize the viewport, notifying listeners whose query flipped.
    pub fn set_viewport_width(&self, width: u16) {
        self.update(|inner| inner.viewport_width = width);
    }

    /// Change the reduced-motion preference, notifying listeners whose query flipped.
    pub fn set_prefers_reduced_motion(&self, reduced: bool) {
        self.update(|inner| inner.reduced_motion = reduced);
    }

    fn update(&self, apply: impl FnOnce(&mut EnvironmentInner)) {
        // Callbacks run after the lock is released so they may read the
        // environment or (un)subscribe.
        let notify: Vec<(Listener, bool)> = match self.inner.write() {
            Ok(mut guard) => {
                apply(&mut *guard);
                let (width, reduced) = (guard.viewport_width, guard.reduced_motion);
                guard
                    .listeners
                    .iter_mut()
                    .filter_map(|entry| {
                        let now = entry.query.matches(width, reduced);
                        if now == entry.last {
                            return None;
                        }
                        entry.last = now;
                        log::debug!("[media] {} -> {now} (#{})", entry.query, entry.id);
                        Some((Arc::clone(&entry.callback), now))
                    })
                    .collect()
            }
            Err(_) => return,
        };

        for (callback, matches) in notify {
            callback(matches);
        }
    }
}

/// Live subscription to a [`MediaEnvironment`]. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    env: Weak<RwLock<EnvironmentInner>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(env) = self.env.upgrade() else {
            return;
        };
        if let Ok(mut guard) = env.write() {
            guard.listeners.retain(|entry| entry.id != self.id);
            log::debug!("[media] unsubscribe #{}", self.id);
        };
    }
}
