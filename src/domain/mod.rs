//! Chat entities shared by the formatting, visibility and menu contexts.
//!
//! These types carry no behaviour beyond construction and accessors; every
//! context reads them and none mutates them.

mod ids;
mod message;

pub use ids::{ChannelId, MessageId, UserId};
pub use message::MessageSnapshot;
