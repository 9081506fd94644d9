//! Derived statistics for the dashboard and the family roster.
//!
//! Everything here is a pure function of the current chore and user
//! collections and is recomputed on every call.
//!
//! Chores do not reference users by id. A chore belongs to a user when its
//! assignee name equals, ignoring case, either the user's full name or the
//! user's first name. This is a best-effort reconciliation: "Alexander"
//! does not match "Alex Johnson", but two users sharing a first name will
//! both claim the same chores.

use shared::{Chore, DashboardStats, PendingChoreSummary, User, UserProgress};

/// Progress at or above this percentage earns the top-performer badge
pub const DEFAULT_TOP_PERFORMER_THRESHOLD: u32 = 80;

/// Whole-number percentage of `part` in `total`, rounded half up.
/// Returns 0 when `total` is 0.
pub fn percentage(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (part, total) = (u64::from(part), u64::from(total));
    ((part * 200 + total) / (total * 2)) as u32
}

/// Whether an assignee name refers to `user`
pub fn assignee_matches(user: &User, assignee_name: &str) -> bool {
    let assignee = assignee_name.to_lowercase();
    assignee == user.name.to_lowercase() || assignee == user.first_name().to_lowercase()
}

/// Chores whose assignee name matches the user
pub fn chores_for_user<'a>(user: &User, chores: &'a [Chore]) -> Vec<&'a Chore> {
    chores
        .iter()
        .filter(|chore| assignee_matches(user, &chore.assigned_to.name))
        .collect()
}

/// Global dashboard counters
pub fn dashboard_stats(chores: &[Chore], users: &[User]) -> DashboardStats {
    let completed = chores.iter().filter(|chore| chore.is_completed()).count() as u32;
    let pending = chores.iter().filter(|chore| chore.is_pending()).count() as u32;
    let total = chores.len() as u32;

    DashboardStats {
        completed_chores: completed,
        pending_chores: pending,
        active_users: users.len() as u32,
        total_chores: total,
        completion_rate: percentage(completed, total),
    }
}

/// Progress of a single user, counted from the chores that match them
pub fn user_progress(user: &User, chores: &[Chore], top_performer_threshold: u32) -> UserProgress {
    let matched = chores_for_user(user, chores);
    let completed = matched.iter().filter(|chore| chore.is_completed()).count() as u32;
    let pending: Vec<PendingChoreSummary> = matched
        .iter()
        .filter(|chore| chore.is_pending())
        .map(|chore| PendingChoreSummary {
            id: chore.id,
            name: chore.name.clone(),
            due_date: chore.due_date.clone(),
        })
        .collect();
    let total = matched.len() as u32;
    let progress = percentage(completed, total);

    UserProgress {
        user_id: user.id,
        name: user.name.clone(),
        avatar: user.avatar.clone(),
        initials: user.initials.clone(),
        completed_chores: completed,
        pending_chores: pending.len() as u32,
        total_chores: total,
        progress,
        top_performer: total > 0 && progress >= top_performer_threshold,
        pending,
    }
}

/// Progress of every user, in roster order
pub fn family_progress(users: &[User], chores: &[Chore], top_performer_threshold: u32) -> Vec<UserProgress> {
    users
        .iter()
        .map(|user| user_progress(user, chores, top_performer_threshold))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::{seed_chores, seed_users};
    use shared::{Assignee, ChoreStatus, Priority, Role};

    fn user_named(name: &str) -> User {
        User {
            id: 1,
            name: name.to_string(),
            email: "someone@example.com".to_string(),
            role: Role::Parent,
            avatar: "/placeholder.svg".to_string(),
            initials: shared::derive_initials(name),
            completed_chores: 0,
            pending_chores: 0,
        }
    }

    fn chore_for(id: u32, assignee: &str, status: ChoreStatus) -> Chore {
        Chore {
            id,
            name: format!("Chore {}", id),
            description: "Something around the house".to_string(),
            frequency: "Daily".to_string(),
            assigned_to: Assignee {
                name: assignee.to_string(),
                avatar: "/placeholder.svg".to_string(),
                initials: "XX".to_string(),
            },
            status,
            due_date: "2023-06-20".to_string(),
            priority: Priority::Low,
        }
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(2, 5), 40);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn test_name_matching_rules() {
        let alex = user_named("Alex Johnson");

        assert!(assignee_matches(&alex, "Alex Johnson"));
        assert!(assignee_matches(&alex, "alex johnson"));
        assert!(assignee_matches(&alex, "Alex"));
        assert!(assignee_matches(&alex, "ALEX"));
        assert!(!assignee_matches(&alex, "Alexander"));
        assert!(!assignee_matches(&alex, "Johnson"));
        assert!(!assignee_matches(&alex, ""));
    }

    #[test]
    fn test_user_progress_counts_full_and_first_name_matches() {
        let alex = user_named("Alex Johnson");
        let chores = vec![
            chore_for(1, "Alex Johnson", ChoreStatus::Completed),
            chore_for(2, "alex", ChoreStatus::Pending),
            chore_for(3, "Alexander", ChoreStatus::Completed),
            chore_for(4, "ALEX", ChoreStatus::Completed),
        ];

        let progress = user_progress(&alex, &chores, DEFAULT_TOP_PERFORMER_THRESHOLD);

        assert_eq!(progress.completed_chores, 2);
        assert_eq!(progress.pending_chores, 1);
        assert_eq!(progress.total_chores, 3);
        assert_eq!(progress.progress, 67);
        assert!(!progress.top_performer);
        assert_eq!(progress.pending.len(), 1);
        assert_eq!(progress.pending[0].id, 2);
    }

    #[test]
    fn test_user_without_chores_has_zero_progress() {
        let progress = user_progress(&user_named("Robin"), &seed_chores(), DEFAULT_TOP_PERFORMER_THRESHOLD);

        assert_eq!(progress.total_chores, 0);
        assert_eq!(progress.progress, 0);
        assert!(!progress.top_performer);
    }

    #[test]
    fn test_dashboard_stats_empty() {
        let stats = dashboard_stats(&[], &[]);

        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.total_chores, 0);
        assert_eq!(stats.active_users, 0);
    }

    #[test]
    fn test_dashboard_stats_on_seed_data() {
        let stats = dashboard_stats(&seed_chores(), &seed_users());

        assert_eq!(stats.completed_chores, 2);
        assert_eq!(stats.pending_chores, 3);
        assert_eq!(stats.active_users, 4);
        assert_eq!(stats.total_chores, 5);
        assert_eq!(stats.completion_rate, 40);
    }

    #[test]
    fn test_family_progress_on_seed_data() {
        let family = family_progress(&seed_users(), &seed_chores(), DEFAULT_TOP_PERFORMER_THRESHOLD);

        let summary: Vec<(&str, u32, u32, u32)> = family
            .iter()
            .map(|p| (p.name.as_str(), p.completed_chores, p.pending_chores, p.progress))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Alex Johnson", 1, 1, 50),
                ("Sam Lee", 1, 0, 100),
                ("Jamie Davis", 0, 1, 0),
                ("Taylor Smith", 0, 1, 0),
            ]
        );
        assert!(family[1].top_performer);
    }

    #[test]
    fn test_advisory_counters_are_not_used() {
        let users = seed_users();
        let progress = user_progress(&users[0], &seed_chores(), DEFAULT_TOP_PERFORMER_THRESHOLD);

        assert_eq!(users[0].completed_chores, 8);
        assert_eq!(progress.completed_chores, 1);
    }
}
