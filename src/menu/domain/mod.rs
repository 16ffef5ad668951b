//! Domain types for menu contribution.

mod command;
mod entry;

pub use command::MenuCommand;
pub use entry::{ContextMenu, MenuEntry, MenuNode};
