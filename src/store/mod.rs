//! Store Module
//!
//! In-process document store presenting the boundary the rest of the server
//! programs against: a users collection, a tasks collection and a change
//! feed over task writes. Handlers and the realtime layer only see this
//! surface, so a networked document database could replace it at this seam.

mod feed;
mod tasks;
mod users;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use feed::{ChangeEvent, ChangeKind, TaskFeed};
pub use tasks::TaskCollection;
pub use users::{UserCollection, UserInsert};

// == Public Constants ==
/// Maximum allowed task title length in characters
pub const MAX_TITLE_LENGTH: usize = 50;

// == Store ==
/// The two logical collections, owned together and shared via `Arc`.
#[derive(Debug, Default)]
pub struct Store {
    users: UserCollection,
    tasks: TaskCollection,
}

impl Store {
    /// Creates a store with empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// The user collection.
    pub fn users(&self) -> &UserCollection {
        &self.users
    }

    /// The task collection.
    pub fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }
}
