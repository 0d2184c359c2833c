//! Per-session client state: input commands and the rendered room view.

pub mod command;
pub mod view;

pub use command::Command;
pub use view::{NameChange, RoomView};
