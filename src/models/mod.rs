pub mod event;
pub mod guest;
pub mod hide;
pub mod user;

pub use event::{Event, EventPatch, NewEvent};
pub use guest::{Guest, GuestPatch, GuestStatus, GuestWithProfile, NewGuest};
pub use hide::{HiddenEvent, HideRequest};
pub use user::User;
