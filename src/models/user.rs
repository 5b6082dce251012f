//! User Document Module

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == User Document ==
/// A registered user as persisted in the user collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Document id, assigned on insert
    pub id: Uuid,
    /// Email address, unique across the collection
    pub email: String,
    /// Display name, if the client supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// == New User ==
/// Fields supplied by the caller when registering a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
}
