//! User entity referenced by links through an opaque owner id.

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Owned by the authentication collaborator; the core only ever reads `id`
/// as the owner key on links. Credentials never pass through this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

impl User {
    pub fn new(id: String, email: String) -> Self {
        Self { id, email }
    }
}
