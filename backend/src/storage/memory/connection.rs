use log::{debug, info};
use std::sync::{Arc, PoisonError, RwLock};

use shared::{Chore, User, PLACEHOLDER_AVATAR};

use crate::storage::seed;

/// A copy-on-write collection of records.
///
/// Readers get an `Arc` snapshot. Writers build a new vector and swap it in
/// under the write lock, so snapshots are never mutated after the fact.
#[derive(Debug)]
pub struct Collection<T> {
    records: RwLock<Arc<Vec<T>>>,
}

impl<T: Clone> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(Arc::new(records)),
        }
    }

    /// Current contents of the collection
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        let guard = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Apply `edit` to a copy of the collection and publish the copy
    pub fn modify<R>(&self, edit: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let mut guard = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = Vec::clone(&guard);
        let outcome = edit(&mut next);
        *guard = Arc::new(next);
        outcome
    }

    /// Like [`Collection::modify`], but when `edit` returns `None` nothing is
    /// published and the current collection stays in place.
    pub fn try_modify<R>(&self, edit: impl FnOnce(&mut Vec<T>) -> Option<R>) -> Option<R> {
        let mut guard = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = Vec::clone(&guard);
        let outcome = edit(&mut next)?;
        *guard = Arc::new(next);
        Some(outcome)
    }

    /// Replace the whole collection
    pub fn replace(&self, records: Vec<T>) {
        let mut guard = self.records.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(records);
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

/// Pick the id for a new record.
///
/// A requested id is honoured when no existing record uses it; otherwise the
/// id is one more than the current maximum, or 1 for an empty collection.
/// When the maximum is already `u32::MAX` the smallest unused id is taken.
pub fn next_id(existing: impl IntoIterator<Item = u32> + Clone, requested: Option<u32>) -> u32 {
    if let Some(id) = requested {
        if !existing.clone().into_iter().any(|existing_id| existing_id == id) {
            return id;
        }
        debug!("Requested id {} is already taken, generating a new one", id);
    }
    match existing.clone().into_iter().max() {
        None => 1,
        Some(max) => max.checked_add(1).unwrap_or_else(|| smallest_unused_id(existing)),
    }
}

fn smallest_unused_id(existing: impl IntoIterator<Item = u32>) -> u32 {
    let mut taken: Vec<u32> = existing.into_iter().collect();
    taken.sort_unstable();
    taken.dedup();
    let mut candidate = 1;
    for id in taken {
        if id > candidate {
            break;
        }
        if id == candidate {
            candidate += 1;
        }
    }
    candidate
}

/// Handle to the session's chore and user collections
#[derive(Clone)]
pub struct MemoryConnection {
    chores: Arc<Collection<Chore>>,
    users: Arc<Collection<User>>,
    default_avatar: Arc<str>,
}

impl MemoryConnection {
    /// Create a connection with empty collections
    pub fn new() -> Self {
        Self::with_default_avatar(PLACEHOLDER_AVATAR)
    }

    /// Create a connection with empty collections and a custom avatar for new users
    pub fn with_default_avatar(default_avatar: &str) -> Self {
        Self {
            chores: Arc::new(Collection::new(Vec::new())),
            users: Arc::new(Collection::new(Vec::new())),
            default_avatar: Arc::from(default_avatar),
        }
    }

    /// Create a connection pre-loaded with the seed data set
    pub fn seeded() -> Self {
        let connection = Self::new();
        connection.load_seed_data();
        connection
    }

    /// Replace both collections with the seed data set
    pub fn load_seed_data(&self) {
        let chores = seed::seed_chores();
        let users = seed::seed_users();
        info!("Loading seed data: {} chores, {} users", chores.len(), users.len());
        self.chores.replace(chores);
        self.users.replace(users);
    }

    pub fn chores(&self) -> &Arc<Collection<Chore>> {
        &self.chores
    }

    pub fn users(&self) -> &Arc<Collection<User>> {
        &self.users
    }

    /// Avatar reference given to users that do not bring their own
    pub fn default_avatar(&self) -> &str {
        &self.default_avatar
    }
}

impl Default for MemoryConnection {
    fn default() -> Self {
        Self::new()
    }
}
