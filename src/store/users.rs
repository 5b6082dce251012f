//! User Collection Module
//!
//! Document storage for registered users, keyed by email. Duplicate
//! registration is reported, not treated as a failure.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{NewUser, User};

// == Insert Outcome ==
/// Result of a user insertion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInsert {
    /// A new document was created with this id
    Inserted(Uuid),
    /// A user with this email already exists; nothing was written
    DuplicateEmail,
}

// == User Collection ==
/// The user collection: documents keyed by their unique email.
#[derive(Debug, Default)]
pub struct UserCollection {
    inner: RwLock<HashMap<String, User>>,
}

impl UserCollection {
    // == Constructor ==
    /// Creates an empty user collection.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Registers a new user unless the email is already taken.
    pub async fn insert(&self, new: NewUser) -> UserInsert {
        let mut inner = self.inner.write().await;
        if inner.contains_key(&new.email) {
            return UserInsert::DuplicateEmail;
        }

        let user = User {
            id: Uuid::new_v4(),
            email: new.email.clone(),
            name: new.name,
        };
        let id = user.id;
        inner.insert(new.email, user);
        UserInsert::Inserted(id)
    }

    // == Find All ==
    /// Returns every registered user, sorted by email for stable output.
    pub async fn find_all(&self) -> Vec<User> {
        let inner = self.inner.read().await;
        let mut users: Vec<User> = inner.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        users
    }

    // == Length ==
    /// Returns the current number of registered users.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Returns true if no users are registered.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
