//! Data model for groupboard
//!
//! Groups are supplied by a remote JSON document and are read-only from the
//! point of view of the rest of the workspace.

mod color;
mod friend;
mod group;

pub use color::{AvatarColor, ParseColorError};
pub use friend::Friend;
pub use group::Group;
