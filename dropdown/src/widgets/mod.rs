pub mod dropdown;
pub mod events;
pub mod user_menu;

pub use dropdown::{Dropdown, DropdownOption};
pub use user_menu::UserMenu;
