use log::{debug, info, warn};

use shared::{Chore, ChorePatch, NewUser, User, UserPatch};

use crate::domain::commands::users::{CreateUserCommand, DeleteUserResult, UpdateUserResult};
use crate::domain::errors::UserError;
use crate::domain::statistics::assignee_matches;
use crate::domain::undo::UndoBuffer;
use crate::storage::{ChoreRepository, ChoreStorage, MemoryConnection, UserRepository, UserStorage};

/// Service for managing family members
#[derive(Clone)]
pub struct UserService {
    user_repository: UserRepository,
    chore_repository: ChoreRepository,
    last_deleted: UndoBuffer<User>,
    cascade_delete_chores: bool,
}

impl UserService {
    /// Create a new UserService.
    ///
    /// With `cascade_delete_chores`, deleting a user also deletes the chores
    /// assigned to them.
    pub fn new(connection: MemoryConnection, cascade_delete_chores: bool) -> Self {
        Self {
            user_repository: UserRepository::new(connection.clone()),
            chore_repository: ChoreRepository::new(connection),
            last_deleted: UndoBuffer::new(),
            cascade_delete_chores,
        }
    }

    /// All family members in insertion order
    pub fn list_users(&self) -> Vec<User> {
        self.user_repository.list_users().to_vec()
    }

    pub fn get_user(&self, user_id: u32) -> Option<User> {
        self.user_repository.get_user(user_id)
    }

    /// Add a family member
    pub fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        info!("Creating user: name={}, role={}", command.name, command.role);

        validate_name(&command.name)?;
        validate_email(&command.email)?;

        let user = self.user_repository.add_user(NewUser {
            id: None,
            name: command.name.trim().to_string(),
            email: command.email.trim().to_string(),
            role: command.role,
        });

        info!("Created user: {} with ID: {}", user.name, user.id);
        Ok(user)
    }

    /// Apply a partial edit to a family member.
    ///
    /// Name and email are trimmed like on creation. When the edit touches
    /// the name, avatar or initials, every chore that matched the user before
    /// the edit gets a fresh assignee snapshot. With two members sharing a
    /// first name, chores assigned to that bare first name follow whichever
    /// member is edited.
    pub fn update_user(&self, user_id: u32, mut patch: UserPatch) -> Result<UpdateUserResult, UserError> {
        info!("Updating user: {}", user_id);

        if let Some(name) = patch.name.as_mut() {
            validate_name(name)?;
            *name = name.trim().to_string();
        }
        if let Some(email) = patch.email.as_mut() {
            validate_email(email)?;
            *email = email.trim().to_string();
        }

        let previous = self
            .user_repository
            .get_user(user_id)
            .ok_or(UserError::UserNotFound(user_id))?;

        if patch.is_empty() {
            debug!("Empty patch for user {}, nothing to write", user_id);
            return Ok(UpdateUserResult {
                user: previous,
                reassigned_chores: Vec::new(),
            });
        }

        let user = self
            .user_repository
            .update_user(user_id, &patch)
            .ok_or(UserError::UserNotFound(user_id))?;

        let reassigned_chores = if patch.touches_display_fields() {
            self.refresh_assignee_snapshots(&previous, &user)
        } else {
            Vec::new()
        };

        info!(
            "Updated user: {} with ID: {} ({} chores re-snapshotted)",
            user.name,
            user.id,
            reassigned_chores.len()
        );
        Ok(UpdateUserResult { user, reassigned_chores })
    }

    fn refresh_assignee_snapshots(&self, previous: &User, current: &User) -> Vec<Chore> {
        let assignee = current.assignee();
        let stale: Vec<u32> = self
            .chore_repository
            .list_chores()
            .iter()
            .filter(|chore| assignee_matches(previous, &chore.assigned_to.name))
            .filter(|chore| chore.assigned_to != assignee)
            .map(|chore| chore.id)
            .collect();

        let patch = ChorePatch::assigned_to(assignee);
        stale
            .into_iter()
            .filter_map(|chore_id| self.chore_repository.update_chore(chore_id, &patch))
            .collect()
    }

    /// Delete a family member, keeping a copy so the deletion can be undone
    pub fn delete_user(&self, user_id: u32) -> Result<DeleteUserResult, UserError> {
        info!("Deleting user: {}", user_id);

        let user = self
            .user_repository
            .delete_user(user_id)
            .ok_or(UserError::UserNotFound(user_id))?;

        let removed_chores = if self.cascade_delete_chores {
            self.delete_chores_of(&user)
        } else {
            Vec::new()
        };

        self.last_deleted.remember(user.clone());

        Ok(DeleteUserResult {
            success_message: format!("{} has been removed", user.name),
            user,
            removed_chores,
        })
    }

    fn delete_chores_of(&self, user: &User) -> Vec<Chore> {
        let owned: Vec<u32> = self
            .chore_repository
            .list_chores()
            .iter()
            .filter(|chore| assignee_matches(user, &chore.assigned_to.name))
            .map(|chore| chore.id)
            .collect();

        let removed: Vec<Chore> = owned
            .into_iter()
            .filter_map(|chore_id| self.chore_repository.delete_chore(chore_id))
            .collect();
        info!("Removed {} chores assigned to {}", removed.len(), user.name);
        removed
    }

    /// The family member an undo would bring back, if any
    pub fn last_deleted(&self) -> Option<User> {
        self.last_deleted.peek()
    }

    /// Re-create the most recently deleted family member from their name,
    /// email and role. The restored record gets a fresh id and re-derived
    /// initials, avatar and counters.
    pub fn undo_delete(&self) -> Option<User> {
        let Some(snapshot) = self.last_deleted.take() else {
            warn!("Undo requested but no deleted user is buffered");
            return None;
        };

        let restored = self.user_repository.add_user(NewUser {
            id: None,
            name: snapshot.name,
            email: snapshot.email,
            role: snapshot.role,
        });
        info!("Restored user: {} with ID: {}", restored.name, restored.id);
        Some(restored)
    }
}

fn validate_name(name: &str) -> Result<(), UserError> {
    if name.trim().chars().count() < 2 {
        return Err(UserError::NameTooShort);
    }
    Ok(())
}

/// Shape check only: one `@`, a non-empty local part and a dotted domain
fn validate_email(email: &str) -> Result<(), UserError> {
    let email = email.trim();
    let invalid = || UserError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::statistics::{user_progress, DEFAULT_TOP_PERFORMER_THRESHOLD};
    use shared::Role;
    use std::sync::Arc;

    fn setup_test() -> (UserService, ChoreRepository) {
        let connection = MemoryConnection::seeded();
        (
            UserService::new(connection.clone(), false),
            ChoreRepository::new(connection),
        )
    }

    #[test]
    fn test_create_user() {
        let (service, _) = setup_test();

        let user = service
            .create_user(CreateUserCommand {
                name: "  Casey Morgan ".to_string(),
                email: "casey@example.com".to_string(),
                role: Role::Other,
            })
            .expect("Failed to create user");

        assert_eq!(user.id, 5);
        assert_eq!(user.name, "Casey Morgan");
        assert_eq!(user.initials, "CM");
        assert_eq!(service.list_users().len(), 5);
    }

    #[test]
    fn test_create_user_validation() {
        let (service, _) = setup_test();

        let command = |name: &str, email: &str| CreateUserCommand {
            name: name.to_string(),
            email: email.to_string(),
            role: Role::Child,
        };

        assert_eq!(service.create_user(command("C", "c@example.com")), Err(UserError::NameTooShort));
        assert!(matches!(service.create_user(command("Casey", "casey")), Err(UserError::InvalidEmail(_))));
        assert!(matches!(service.create_user(command("Casey", "@example.com")), Err(UserError::InvalidEmail(_))));
        assert!(matches!(service.create_user(command("Casey", "casey@example")), Err(UserError::InvalidEmail(_))));
        assert!(matches!(service.create_user(command("Casey", "casey@@example.com")), Err(UserError::InvalidEmail(_))));
        assert!(matches!(service.create_user(command("Casey", "ca sey@example.com")), Err(UserError::InvalidEmail(_))));
        assert_eq!(service.list_users().len(), 4);
    }

    #[test]
    fn test_rename_propagates_to_matching_chores() {
        let (service, chores) = setup_test();

        let result = service
            .update_user(
                1,
                UserPatch {
                    name: Some("Alexis Johnson".to_string()),
                    initials: Some("AJ".to_string()),
                    ..Default::default()
                },
            )
            .expect("Failed to update user");

        let ids: Vec<u32> = result.reassigned_chores.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(chores.get_chore(1).map(|c| c.assigned_to.name), Some("Alexis Johnson".to_string()));
        assert_eq!(chores.get_chore(5).map(|c| c.assigned_to.name), Some("Alexis Johnson".to_string()));
        assert_eq!(chores.get_chore(2).map(|c| c.assigned_to.name), Some("Sam".to_string()));

        let progress = user_progress(&result.user, &chores.list_chores(), DEFAULT_TOP_PERFORMER_THRESHOLD);
        assert_eq!(progress.total_chores, 2);
    }

    #[test]
    fn test_update_user_trims_name_and_email() {
        let (service, chores) = setup_test();

        let result = service
            .update_user(
                1,
                UserPatch {
                    name: Some(" Alex Johnson ".to_string()),
                    email: Some("  alex@family.org ".to_string()),
                    ..Default::default()
                },
            )
            .expect("Failed to update user");

        assert_eq!(result.user.name, "Alex Johnson");
        assert_eq!(result.user.first_name(), "Alex");
        assert_eq!(result.user.email, "alex@family.org");

        let progress = user_progress(&result.user, &chores.list_chores(), DEFAULT_TOP_PERFORMER_THRESHOLD);
        assert_eq!(progress.total_chores, 2);
    }

    #[test]
    fn test_rename_with_shared_first_name_takes_bare_first_name_chores() {
        let (service, chores) = setup_test();
        let other_alex = service
            .create_user(CreateUserCommand {
                name: "Alex Smith".to_string(),
                email: "alex.smith@example.com".to_string(),
                role: Role::Child,
            })
            .expect("Failed to create user");

        // Both Alexes claim the chores assigned to plain "Alex"
        let before = user_progress(&other_alex, &chores.list_chores(), DEFAULT_TOP_PERFORMER_THRESHOLD);
        assert_eq!(before.total_chores, 2);

        let result = service
            .update_user(
                1,
                UserPatch {
                    name: Some("Alexis Johnson".to_string()),
                    ..Default::default()
                },
            )
            .expect("Failed to update user");

        let ids: Vec<u32> = result.reassigned_chores.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 5]);

        let renamed = user_progress(&result.user, &chores.list_chores(), DEFAULT_TOP_PERFORMER_THRESHOLD);
        let after = user_progress(&other_alex, &chores.list_chores(), DEFAULT_TOP_PERFORMER_THRESHOLD);
        assert_eq!(renamed.total_chores, 2);
        assert_eq!(after.total_chores, 0);
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let (service, chores) = setup_test();
        let before = chores.list_chores();

        let result = service.update_user(3, UserPatch::default()).expect("Failed to update user");

        assert_eq!(Some(result.user), service.get_user(3));
        assert!(result.reassigned_chores.is_empty());
        assert!(Arc::ptr_eq(&before, &chores.list_chores()));
    }

    #[test]
    fn test_email_change_does_not_touch_chores() {
        let (service, chores) = setup_test();
        let before = chores.list_chores();

        let result = service
            .update_user(
                2,
                UserPatch {
                    email: Some("sam@family.org".to_string()),
                    ..Default::default()
                },
            )
            .expect("Failed to update user");

        assert!(result.reassigned_chores.is_empty());
        assert_eq!(result.user.email, "sam@family.org");
        assert_eq!(*chores.list_chores(), *before);
    }

    #[test]
    fn test_update_missing_user() {
        let (service, _) = setup_test();

        let result = service.update_user(9, UserPatch::default());
        assert!(matches!(result, Err(UserError::UserNotFound(9))));
    }

    #[test]
    fn test_delete_and_undo_user() {
        let (service, chores) = setup_test();
        let original = service.get_user(1).expect("user 1 is seeded");

        let result = service.delete_user(1).expect("Failed to delete user");
        assert_eq!(result.user, original);
        assert!(result.removed_chores.is_empty());
        assert_eq!(service.last_deleted(), Some(original.clone()));
        assert_eq!(chores.list_chores().len(), 5);

        let restored = service.undo_delete().expect("undo should restore");
        assert_eq!(restored.name, original.name);
        assert_eq!(restored.email, original.email);
        assert_eq!(restored.role, original.role);
        assert_eq!(restored.id, 5);

        let progress = user_progress(&restored, &chores.list_chores(), DEFAULT_TOP_PERFORMER_THRESHOLD);
        assert_eq!(progress.completed_chores, 1);
        assert_eq!(progress.pending_chores, 1);

        assert!(service.undo_delete().is_none());
    }

    #[test]
    fn test_cascading_delete_removes_matching_chores() {
        let connection = MemoryConnection::seeded();
        let service = UserService::new(connection.clone(), true);
        let chores = ChoreRepository::new(connection);

        let result = service.delete_user(1).expect("Failed to delete user");

        let removed: Vec<u32> = result.removed_chores.iter().map(|c| c.id).collect();
        assert_eq!(removed, vec![1, 5]);
        assert_eq!(chores.list_chores().len(), 3);

        service.undo_delete().expect("undo should restore");
        assert_eq!(chores.list_chores().len(), 3);
    }

    #[test]
    fn test_delete_missing_user() {
        let (service, _) = setup_test();

        assert!(matches!(service.delete_user(77), Err(UserError::UserNotFound(77))));
        assert_eq!(service.list_users().len(), 4);
    }
}
