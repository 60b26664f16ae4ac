pub mod config;
pub mod context;
pub mod error;
pub mod lifecycle;
pub mod widgets;

pub mod prelude {
    pub use crate::config::{BlurPolicy, DropdownConfig};
    pub use crate::context::{DropdownContext, Scope, use_dropdown};
    pub use crate::error::DropdownError;
    pub use crate::lifecycle::{Lifecycle, Mounted};
    pub use crate::widgets::dropdown::{
        Dropdown, DropdownId, DropdownOption, DropdownProps, OptionChild, OptionId, OptionRegistry,
        OptionValue, Presentation, RegisteredOption,
    };
    pub use crate::widgets::events::{
        EventContext, EventResult, WidgetEvent, WidgetEventKind, WidgetEvents,
    };
    pub use crate::widgets::user_menu::{UserMenu, UserSummary};
}
