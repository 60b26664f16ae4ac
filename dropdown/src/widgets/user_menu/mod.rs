//! User menu - a disclosure menu button for the signed-in user.

pub mod events;
pub mod render;
pub mod state;

pub use state::{UserMenu, UserMenuId, UserSummary};

/// Where the sign-out link points.
pub const SIGN_OUT_HREF: &str = "/.auth/logout";
