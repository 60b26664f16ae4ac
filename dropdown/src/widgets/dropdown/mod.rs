//! Dropdown widget - an accessible select with inline and overlay presentations.

pub mod events;
pub mod option;
pub mod registry;
pub mod render;
pub(crate) mod state;

pub use option::{DropdownOption, OptionChild};
pub use registry::{OptionId, OptionRegistry, OptionValue, RegisteredOption};
pub use state::{Dropdown, DropdownId, DropdownProps, Presentation};
