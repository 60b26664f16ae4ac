pub mod animation;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod form;
pub mod media;
pub mod transitions;

pub use animation::{Phase, Presence};
pub use document::{Document, MountPoint, MountTarget};
pub use element::{Content, Element};
pub use error::DocumentError;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::FocusState;
pub use form::FormData;
pub use media::{Breakpoints, MediaEnvironment, MediaQuery, Subscription};
pub use transitions::{Easing, TransitionConfig};
