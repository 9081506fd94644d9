use chrono::NaiveDate;
use log::{debug, info, warn};
use std::cmp::Ordering;

use shared::{Chore, ChoreFilter, ChorePatch, ChoreStatus, NewChore, DUE_DATE_FORMAT};

use crate::domain::commands::chores::{CreateChoreCommand, DeleteChoreResult};
use crate::domain::errors::ChoreError;
use crate::domain::undo::UndoBuffer;
use crate::storage::{ChoreRepository, ChoreStorage, MemoryConnection, UserRepository, UserStorage};

/// Service for managing chores
#[derive(Clone)]
pub struct ChoreService {
    chore_repository: ChoreRepository,
    user_repository: UserRepository,
    last_deleted: UndoBuffer<Chore>,
}

impl ChoreService {
    /// Create a new ChoreService
    pub fn new(connection: MemoryConnection) -> Self {
        Self {
            chore_repository: ChoreRepository::new(connection.clone()),
            user_repository: UserRepository::new(connection),
            last_deleted: UndoBuffer::new(),
        }
    }

    /// All chores in insertion order
    pub fn list_chores(&self) -> Vec<Chore> {
        self.chore_repository.list_chores().to_vec()
    }

    /// Chores matching a search term and status selector
    pub fn filter_chores(&self, filter: &ChoreFilter) -> Vec<Chore> {
        let chores: Vec<Chore> = self
            .chore_repository
            .list_chores()
            .iter()
            .filter(|chore| filter.matches(chore))
            .cloned()
            .collect();
        debug!("Filter {:?} matched {} chores", filter, chores.len());
        chores
    }

    pub fn get_chore(&self, chore_id: u32) -> Option<Chore> {
        self.chore_repository.get_chore(chore_id)
    }

    /// Create a chore assigned to an existing family member
    pub fn create_chore(&self, command: CreateChoreCommand) -> Result<Chore, ChoreError> {
        info!("Creating chore: name={}, assigned_user_id={}", command.name, command.assigned_user_id);

        validate_name(&command.name)?;
        validate_description(&command.description)?;
        validate_frequency(&command.frequency)?;
        validate_due_date(&command.due_date)?;

        let user = self
            .user_repository
            .get_user(command.assigned_user_id)
            .ok_or(ChoreError::UserNotFound(command.assigned_user_id))?;

        let chore = self.chore_repository.add_chore(NewChore {
            id: None,
            name: command.name.trim().to_string(),
            description: command.description.trim().to_string(),
            frequency: command.frequency,
            assigned_to: user.assignee(),
            status: None,
            due_date: command.due_date,
            priority: command.priority,
        });

        info!("Created chore: {} with ID: {}", chore.name, chore.id);
        Ok(chore)
    }

    /// Apply a partial edit to a chore.
    ///
    /// Name and description are trimmed like on creation. The assignee
    /// snapshot cannot be patched here; use [`ChoreService::reassign_chore`].
    pub fn update_chore(&self, chore_id: u32, mut patch: ChorePatch) -> Result<Chore, ChoreError> {
        info!("Updating chore: {}", chore_id);

        if patch.assigned_to.is_some() {
            return Err(ChoreError::AssigneeNotEditable);
        }
        if let Some(name) = patch.name.as_mut() {
            validate_name(name)?;
            *name = name.trim().to_string();
        }
        if let Some(description) = patch.description.as_mut() {
            validate_description(description)?;
            *description = description.trim().to_string();
        }
        if let Some(frequency) = &patch.frequency {
            validate_frequency(frequency)?;
        }
        if let Some(due_date) = &patch.due_date {
            validate_due_date(due_date)?;
        }

        if patch.is_empty() {
            debug!("Empty patch for chore {}, nothing to write", chore_id);
            return self
                .chore_repository
                .get_chore(chore_id)
                .ok_or(ChoreError::ChoreNotFound(chore_id));
        }

        self.chore_repository
            .update_chore(chore_id, &patch)
            .ok_or(ChoreError::ChoreNotFound(chore_id))
    }

    /// Mark a chore as completed
    pub fn complete_chore(&self, chore_id: u32) -> Result<Chore, ChoreError> {
        self.set_status(chore_id, ChoreStatus::Completed)
    }

    /// Put a completed chore back to pending
    pub fn reopen_chore(&self, chore_id: u32) -> Result<Chore, ChoreError> {
        self.set_status(chore_id, ChoreStatus::Pending)
    }

    fn set_status(&self, chore_id: u32, status: ChoreStatus) -> Result<Chore, ChoreError> {
        let chore = self
            .chore_repository
            .update_chore(chore_id, &ChorePatch::status(status))
            .ok_or(ChoreError::ChoreNotFound(chore_id))?;
        info!("Chore '{}' is now {}", chore.name, status);
        Ok(chore)
    }

    /// Hand a chore to another family member.
    ///
    /// Only the embedded assignee snapshot changes; every other field of the
    /// chore is left as it was.
    pub fn reassign_chore(&self, chore_id: u32, user_id: u32) -> Result<Chore, ChoreError> {
        info!("Reassigning chore {} to user {}", chore_id, user_id);

        let user = self
            .user_repository
            .get_user(user_id)
            .ok_or(ChoreError::UserNotFound(user_id))?;

        let chore = self
            .chore_repository
            .update_chore(chore_id, &ChorePatch::assigned_to(user.assignee()))
            .ok_or(ChoreError::ChoreNotFound(chore_id))?;

        info!("Chore '{}' is now assigned to {}", chore.name, chore.assigned_to.name);
        Ok(chore)
    }

    /// Delete a chore, keeping a copy so the deletion can be undone
    pub fn delete_chore(&self, chore_id: u32) -> Result<DeleteChoreResult, ChoreError> {
        info!("Deleting chore: {}", chore_id);

        let chore = self
            .chore_repository
            .delete_chore(chore_id)
            .ok_or(ChoreError::ChoreNotFound(chore_id))?;

        self.last_deleted.remember(chore.clone());

        Ok(DeleteChoreResult {
            success_message: format!("'{}' has been removed", chore.name),
            chore,
        })
    }

    /// The chore an undo would bring back, if any
    pub fn last_deleted(&self) -> Option<Chore> {
        self.last_deleted.peek()
    }

    /// Restore the most recently deleted chore with its original id and status.
    /// Returns `None` when there is nothing to undo.
    pub fn undo_delete(&self) -> Option<Chore> {
        let Some(snapshot) = self.last_deleted.take() else {
            warn!("Undo requested but no deleted chore is buffered");
            return None;
        };

        let restored = self.chore_repository.add_chore(NewChore::from(snapshot));
        info!("Restored chore: {} with ID: {}", restored.name, restored.id);
        Some(restored)
    }

    /// Pending chores, soonest due first, then most urgent, then oldest id.
    /// Chores with an unreadable due date go last.
    pub fn upcoming_chores(&self, limit: usize) -> Vec<Chore> {
        let mut pending: Vec<Chore> = self
            .chore_repository
            .list_chores()
            .iter()
            .filter(|chore| chore.is_pending())
            .cloned()
            .collect();

        pending.sort_by(compare_upcoming);
        pending.truncate(limit);
        pending
    }
}

fn compare_upcoming(a: &Chore, b: &Chore) -> Ordering {
    let by_date = match (a.due_date(), b.due_date()) {
        (Some(a_date), Some(b_date)) => a_date.cmp(&b_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date
        .then_with(|| a.priority.urgency_rank().cmp(&b.priority.urgency_rank()))
        .then_with(|| a.id.cmp(&b.id))
}

fn validate_name(name: &str) -> Result<(), ChoreError> {
    if name.trim().chars().count() < 2 {
        return Err(ChoreError::NameTooShort);
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ChoreError> {
    if description.trim().chars().count() < 5 {
        return Err(ChoreError::DescriptionTooShort);
    }
    Ok(())
}

fn validate_frequency(frequency: &str) -> Result<(), ChoreError> {
    if frequency.trim().is_empty() {
        return Err(ChoreError::MissingFrequency);
    }
    Ok(())
}

fn validate_due_date(due_date: &str) -> Result<(), ChoreError> {
    NaiveDate::parse_from_str(due_date, DUE_DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| ChoreError::InvalidDueDate(due_date.to_string()))
}
