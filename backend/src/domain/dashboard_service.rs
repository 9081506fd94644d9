//! Dashboard and roster views built from the live collections.

use log::debug;

use shared::{Chore, DashboardStats, UserProgress};

use crate::domain::commands::dashboard::DashboardOverview;
use crate::domain::statistics;
use crate::domain::ChoreService;
use crate::storage::{ChoreRepository, ChoreStorage, MemoryConnection, UserRepository, UserStorage};

/// Read-only service computing derived statistics on every call
#[derive(Clone)]
pub struct DashboardService {
    chore_repository: ChoreRepository,
    user_repository: UserRepository,
    chore_service: ChoreService,
    top_performer_threshold: u32,
    upcoming_limit: usize,
}

impl DashboardService {
    pub fn new(
        connection: MemoryConnection,
        chore_service: ChoreService,
        top_performer_threshold: u32,
        upcoming_limit: usize,
    ) -> Self {
        Self {
            chore_repository: ChoreRepository::new(connection.clone()),
            user_repository: UserRepository::new(connection),
            chore_service,
            top_performer_threshold,
            upcoming_limit,
        }
    }

    /// Completed, pending, member count and completion rate
    pub fn dashboard_stats(&self) -> DashboardStats {
        let chores = self.chore_repository.list_chores();
        let users = self.user_repository.list_users();
        let stats = statistics::dashboard_stats(&chores, &users);
        debug!("Dashboard stats: {:?}", stats);
        stats
    }

    /// Per-member progress in roster order
    pub fn family_progress(&self) -> Vec<UserProgress> {
        let chores = self.chore_repository.list_chores();
        let users = self.user_repository.list_users();
        statistics::family_progress(&users, &chores, self.top_performer_threshold)
    }

    /// Progress of one member, `None` if the member does not exist
    pub fn user_progress(&self, user_id: u32) -> Option<UserProgress> {
        let user = self.user_repository.get_user(user_id)?;
        let chores = self.chore_repository.list_chores();
        Some(statistics::user_progress(&user, &chores, self.top_performer_threshold))
    }

    /// Chores that match a member by name, `None` if the member does not exist
    pub fn chores_for_user(&self, user_id: u32) -> Option<Vec<Chore>> {
        let user = self.user_repository.get_user(user_id)?;
        let chores = self.chore_repository.list_chores();
        Some(
            statistics::chores_for_user(&user, &chores)
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    /// Stats, family progress and the next pending chores in one view
    pub fn overview(&self) -> DashboardOverview {
        DashboardOverview {
            stats: self.dashboard_stats(),
            family: self.family_progress(),
            upcoming: self.chore_service.upcoming_chores(self.upcoming_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::statistics::DEFAULT_TOP_PERFORMER_THRESHOLD;

    fn setup_test() -> (DashboardService, ChoreService) {
        let connection = MemoryConnection::seeded();
        let chore_service = ChoreService::new(connection.clone());
        let dashboard = DashboardService::new(connection, chore_service.clone(), DEFAULT_TOP_PERFORMER_THRESHOLD, 2);
        (dashboard, chore_service)
    }

    #[test]
    fn test_stats_follow_mutations() {
        let (dashboard, chores) = setup_test();
        assert_eq!(dashboard.dashboard_stats().completion_rate, 40);

        chores.complete_chore(1).expect("Failed to complete chore");
        let stats = dashboard.dashboard_stats();
        assert_eq!(stats.completed_chores, 3);
        assert_eq!(stats.pending_chores, 2);
        assert_eq!(stats.completion_rate, 60);

        let alex = dashboard.user_progress(1).expect("user 1 is seeded");
        assert_eq!(alex.progress, 100);
        assert!(alex.top_performer);
    }

    #[test]
    fn test_chores_for_user() {
        let (dashboard, _) = setup_test();

        let names: Vec<String> = dashboard
            .chores_for_user(1)
            .expect("user 1 is seeded")
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Vacuum Living Room", "Do Dishes"]);
        assert!(dashboard.chores_for_user(12).is_none());
        assert!(dashboard.user_progress(12).is_none());
    }

    #[test]
    fn test_overview_respects_upcoming_limit() {
        let (dashboard, _) = setup_test();

        let overview = dashboard.overview();

        assert_eq!(overview.stats.total_chores, 5);
        assert_eq!(overview.family.len(), 4);
        assert_eq!(overview.upcoming.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);
    }
}
