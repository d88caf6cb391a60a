//! Static in-memory user directory.
//!
//! User storage and credential verification live outside this service.
//! The directory is the minimal stand-in the HTTP surface needs: a
//! username → identity map seeded at startup.

use std::collections::HashMap;

use uuid::Uuid;

use keygate_auth::ClaimsMap;

/// A user known to the directory.
#[derive(Debug, Clone)]
pub struct DirectoryUser {
    /// Stable user identifier.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Role granted to tokens issued for this user.
    pub role: String,
}

impl DirectoryUser {
    /// Creates a user with a fresh identifier.
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            role: role.into(),
        }
    }

    /// The identity payload embedded in tokens issued for this user.
    pub fn claims(&self) -> ClaimsMap {
        let mut claims = ClaimsMap::new();
        claims.insert("id".to_string(), serde_json::json!(self.id));
        claims.insert("username".to_string(), serde_json::json!(self.username));
        claims.insert("role".to_string(), serde_json::json!(self.role));
        claims
    }
}

/// Username-keyed directory of known users.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, DirectoryUser>,
}

impl UserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user, replacing any existing entry for the username.
    pub fn insert(&mut self, user: DirectoryUser) {
        self.users.insert(user.username.clone(), user);
    }

    /// Looks up a user by exact username.
    pub fn find(&self, username: &str) -> Option<&DirectoryUser> {
        self.users.get(username)
    }
}
