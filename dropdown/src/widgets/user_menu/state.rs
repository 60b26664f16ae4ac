//! User menu state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Unique identifier for a UserMenu instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserMenuId(usize);

impl UserMenuId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for UserMenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__user_menu_{}", self.0)
    }
}

/// The signed-in user as shown in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: String,
    #[serde(rename = "preferred_username")]
    pub username: String,
}

impl UserSummary {
    pub fn new(name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
        }
    }

    /// Upper-cased first letters of the first two words of the name.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .take(2)
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// `Name (username)`, used as the trigger's tooltip.
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.username)
    }
}

#[derive(Debug, Default)]
struct UserMenuInner {
    open: bool,
}

/// Menu button showing the user's initials, with a sign-out entry.
#[derive(Debug, Clone)]
pub struct UserMenu {
    id: UserMenuId,
    user: UserSummary,
    inner: Arc<RwLock<UserMenuInner>>,
    dirty: Arc<AtomicBool>,
}

impl UserMenu {
    pub fn new(user: UserSummary) -> Self {
        Self {
            id: UserMenuId::new(),
            user,
            inner: Arc::new(RwLock::new(UserMenuInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> UserMenuId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn user(&self) -> &UserSummary {
        &self.user
    }

    // -------------------------------------------------------------------------
    // Element ids
    // -------------------------------------------------------------------------

    pub fn trigger_id(&self) -> String {
        format!("{}-button", self.id)
    }

    pub fn menu_id(&self) -> String {
        format!("{}-menu", self.id)
    }

    pub fn header_id(&self) -> String {
        format!("{}-header", self.id)
    }

    pub fn sign_out_id(&self) -> String {
        format!("{}-signout", self.id)
    }

    /// Returns true if the element id is the menu or one of its items.
    pub fn menu_contains(&self, element_id: &str) -> bool {
        element_id == self.menu_id()
            || element_id == self.header_id()
            || element_id == self.sign_out_id()
    }

    // -------------------------------------------------------------------------
    // Open/close
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.inner.read().map(|guard| guard.open).unwrap_or(false)
    }

    pub fn open(&self) {
        self.set_open(true);
    }

    pub fn close(&self) {
        self.set_open(false);
    }

    pub fn toggle(&self) {
        self.set_open(!self.is_open());
    }

    fn set_open(&self, open: bool) {
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        if guard.open != open {
            guard.open = open;
            self.dirty.store(true, Ordering::SeqCst);
            log::debug!("[user_menu] {} open={open}", self.id);
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}
