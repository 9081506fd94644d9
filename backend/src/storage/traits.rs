//! # Storage Traits
//!
//! Storage abstraction for the two session collections.
//!
//! Unlike most repositories these operations are total: an unknown id is
//! answered with `None` (and the collection is left untouched) rather than
//! with an error. Callers that need a user-visible failure check for
//! existence first.

use std::sync::Arc;

use shared::{Chore, ChorePatch, NewChore, NewUser, User, UserPatch};

/// Interface for chore storage operations
pub trait ChoreStorage: Send + Sync {
    /// Snapshot of all chores in insertion order
    fn list_chores(&self) -> Arc<Vec<Chore>>;

    /// Retrieve a chore by id
    fn get_chore(&self, chore_id: u32) -> Option<Chore>;

    /// Append a chore and return the stored record.
    ///
    /// The id is `max + 1` (1 on an empty collection) unless the caller
    /// supplies an id that is not already taken. Status defaults to pending.
    fn add_chore(&self, chore: NewChore) -> Chore;

    /// Merge a patch into an existing chore
    /// Returns the updated chore, or `None` if no chore has this id
    fn update_chore(&self, chore_id: u32, patch: &ChorePatch) -> Option<Chore>;

    /// Remove a chore
    /// Returns the removed chore, or `None` if no chore has this id
    fn delete_chore(&self, chore_id: u32) -> Option<Chore>;
}

/// Interface for family-member storage operations
pub trait UserStorage: Send + Sync {
    /// Snapshot of all users in insertion order
    fn list_users(&self) -> Arc<Vec<User>>;

    /// Retrieve a user by id
    fn get_user(&self, user_id: u32) -> Option<User>;

    /// Append a user, deriving initials and defaulting avatar and counters
    fn add_user(&self, user: NewUser) -> User;

    /// Merge a patch into an existing user
    fn update_user(&self, user_id: u32, patch: &UserPatch) -> Option<User>;

    /// Remove a user
    fn delete_user(&self, user_id: u32) -> Option<User>;
}
