//! Widget composition errors.

use thiserror::Error;

use crate::widgets::dropdown::{OptionId, OptionValue};

/// Errors raised when widgets are composed incorrectly.
///
/// These are programmer errors: they signal a component placed in the wrong
/// part of the tree, never a user-facing condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropdownError {
    /// A dropdown-dependent component looked up its context outside a dropdown.
    #[error("{component} must be used inside a dropdown")]
    OutsideDropdown { component: &'static str },

    /// An option was used as if attached, but it has no dropdown.
    #[error("option {0} is not attached to a dropdown")]
    NotAttached(OptionId),

    /// A selection was set to a value no registered option carries.
    #[error("no option carries the value '{0}'")]
    UnknownValue(OptionValue),
}
