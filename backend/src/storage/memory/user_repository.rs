use log::{debug, info, warn};
use std::sync::Arc;

use shared::{derive_initials, NewUser, User, UserPatch};

use super::connection::{next_id, MemoryConnection};
use crate::storage::traits::UserStorage;

/// In-memory family-member repository
#[derive(Clone)]
pub struct UserRepository {
    connection: MemoryConnection,
}

impl UserRepository {
    /// Create a user repository over the connection's user collection
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl UserStorage for UserRepository {
    fn list_users(&self) -> Arc<Vec<User>> {
        let users = self.connection.users().snapshot();
        debug!("Listing {} users", users.len());
        users
    }

    fn get_user(&self, user_id: u32) -> Option<User> {
        let user = self
            .connection
            .users()
            .snapshot()
            .iter()
            .find(|user| user.id == user_id)
            .cloned();
        if user.is_none() {
            debug!("User not found: {}", user_id);
        }
        user
    }

    fn add_user(&self, new_user: NewUser) -> User {
        let avatar = self.connection.default_avatar().to_string();
        let user = self.connection.users().modify(|users| {
            let id = next_id(users.iter().map(|user| user.id), new_user.id);
            let user = User {
                id,
                initials: derive_initials(&new_user.name),
                name: new_user.name,
                email: new_user.email,
                role: new_user.role,
                avatar,
                completed_chores: 0,
                pending_chores: 0,
            };
            users.push(user.clone());
            user
        });

        info!("Stored user {} '{}' ({})", user.id, user.name, user.role);
        user
    }

    fn update_user(&self, user_id: u32, patch: &UserPatch) -> Option<User> {
        let updated = self.connection.users().try_modify(|users| {
            let user = users.iter_mut().find(|user| user.id == user_id)?;
            patch.apply_to(user);
            Some(user.clone())
        });

        match &updated {
            Some(user) => info!("Updated user {} '{}'", user.id, user.name),
            None => warn!("Ignoring update for unknown user {}", user_id),
        }
        updated
    }

    fn delete_user(&self, user_id: u32) -> Option<User> {
        let removed = self.connection.users().try_modify(|users| {
            let index = users.iter().position(|user| user.id == user_id)?;
            Some(users.remove(index))
        });

        match &removed {
            Some(user) => info!("Deleted user {} '{}'", user.id, user.name),
            None => warn!("Ignoring delete for unknown user {}", user_id),
        }
        removed
    }
}
