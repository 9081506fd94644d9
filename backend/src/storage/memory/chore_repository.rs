use log::{debug, info, warn};
use std::sync::Arc;

use shared::{Chore, ChorePatch, NewChore};

use super::connection::{next_id, MemoryConnection};
use crate::storage::traits::ChoreStorage;

/// In-memory chore repository
#[derive(Clone)]
pub struct ChoreRepository {
    connection: MemoryConnection,
}

impl ChoreRepository {
    /// Create a chore repository over the connection's chore collection
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl ChoreStorage for ChoreRepository {
    fn list_chores(&self) -> Arc<Vec<Chore>> {
        let chores = self.connection.chores().snapshot();
        debug!("Listing {} chores", chores.len());
        chores
    }

    fn get_chore(&self, chore_id: u32) -> Option<Chore> {
        let chore = self
            .connection
            .chores()
            .snapshot()
            .iter()
            .find(|chore| chore.id == chore_id)
            .cloned();
        if chore.is_none() {
            debug!("Chore not found: {}", chore_id);
        }
        chore
    }

    fn add_chore(&self, new_chore: NewChore) -> Chore {
        let chore = self.connection.chores().modify(|chores| {
            let id = next_id(chores.iter().map(|chore| chore.id), new_chore.id);
            let chore = Chore {
                id,
                name: new_chore.name,
                description: new_chore.description,
                frequency: new_chore.frequency,
                assigned_to: new_chore.assigned_to,
                status: new_chore.status.unwrap_or_default(),
                due_date: new_chore.due_date,
                priority: new_chore.priority,
            };
            chores.push(chore.clone());
            chore
        });

        info!("Stored chore {} '{}'", chore.id, chore.name);
        chore
    }

    fn update_chore(&self, chore_id: u32, patch: &ChorePatch) -> Option<Chore> {
        let updated = self.connection.chores().try_modify(|chores| {
            let chore = chores.iter_mut().find(|chore| chore.id == chore_id)?;
            patch.apply_to(chore);
            Some(chore.clone())
        });

        match &updated {
            Some(chore) => info!("Updated chore {} '{}'", chore.id, chore.name),
            None => warn!("Ignoring update for unknown chore {}", chore_id),
        }
        updated
    }

    fn delete_chore(&self, chore_id: u32) -> Option<Chore> {
        let removed = self.connection.chores().try_modify(|chores| {
            let index = chores.iter().position(|chore| chore.id == chore_id)?;
            Some(chores.remove(index))
        });

        match &removed {
            Some(chore) => info!("Deleted chore {} '{}'", chore.id, chore.name),
            None => warn!("Ignoring delete for unknown chore {}", chore_id),
        }
        removed
    }
}
