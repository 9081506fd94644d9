//! # Chore Tracker Backend
//!
//! In-memory core of a household chore tracker: two stores (chores and
//! family members), the services that validate and mutate them, derived
//! dashboard statistics and a month calendar of due dates.
//!
//! Everything lives for one session; nothing is written to disk. The
//! [`Backend`] struct wires the services to a single shared connection.

use log::{info, warn};

pub mod config;
pub mod domain;
pub mod storage;

pub use config::TrackerConfig;
pub use storage::MemoryConnection;

use domain::{CalendarService, ChoreService, DashboardService, UserService};

/// Main backend struct that owns the session's services
#[derive(Clone)]
pub struct Backend {
    pub config: TrackerConfig,
    pub connection: MemoryConnection,
    pub chore_service: ChoreService,
    pub user_service: UserService,
    pub dashboard_service: DashboardService,
    pub calendar_service: CalendarService,
}

impl Backend {
    /// Create a backend with fresh collections, seeded when the config asks for it
    pub fn new(config: TrackerConfig) -> Self {
        let connection = MemoryConnection::with_default_avatar(&config.default_avatar);
        if config.seed_on_start {
            connection.load_seed_data();
        }
        Self::with_connection(config, connection)
    }

    /// Create a backend on top of an existing connection
    pub fn with_connection(config: TrackerConfig, connection: MemoryConnection) -> Self {
        let chore_service = ChoreService::new(connection.clone());
        let user_service = UserService::new(connection.clone(), config.cascade_delete_chores);
        let dashboard_service = DashboardService::new(
            connection.clone(),
            chore_service.clone(),
            config.top_performer_threshold,
            config.upcoming_limit,
        );
        let calendar_service = CalendarService::new();

        if connection.users().is_empty() {
            warn!("No family members loaded, chores cannot be assigned until one is added");
        }
        info!(
            "Backend ready: {} chores, {} users",
            connection.chores().len(),
            connection.users().len()
        );

        Self {
            config,
            connection,
            chore_service,
            user_service,
            dashboard_service,
            calendar_service,
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::commands::users::CreateUserCommand;
    use shared::Role;

    #[test]
    fn test_seeded_session() {
        let backend = Backend::default();

        let stats = backend.dashboard_service.dashboard_stats();
        assert_eq!(stats.completed_chores, 2);
        assert_eq!(stats.pending_chores, 3);
        assert_eq!(stats.active_users, 4);
        assert_eq!(stats.completion_rate, 40);

        // Alex leaves and comes back under a new id; chores follow by name
        backend.user_service.delete_user(1).expect("Failed to delete user");
        let alex = backend.user_service.undo_delete().expect("undo should restore");
        assert_eq!(alex.id, 5);

        backend.chore_service.reassign_chore(1, 2).expect("Failed to reassign chore");

        let sam = backend.dashboard_service.user_progress(2).expect("user 2 is seeded");
        assert_eq!((sam.completed_chores, sam.pending_chores, sam.progress), (1, 1, 50));

        let alex = backend.dashboard_service.user_progress(5).expect("user 5 was restored");
        assert_eq!((alex.completed_chores, alex.pending_chores, alex.progress), (1, 0, 100));
        assert!(alex.top_performer);
    }

    #[test]
    fn test_unseeded_backend_uses_configured_avatar() {
        let config = TrackerConfig {
            seed_on_start: false,
            default_avatar: "/avatars/default.png".to_string(),
            ..Default::default()
        };
        let backend = Backend::new(config);

        assert!(backend.chore_service.list_chores().is_empty());
        assert_eq!(backend.dashboard_service.dashboard_stats().completion_rate, 0);

        let user = backend
            .user_service
            .create_user(CreateUserCommand {
                name: "Robin".to_string(),
                email: "robin@example.com".to_string(),
                role: Role::Parent,
            })
            .expect("Failed to create user");
        assert_eq!(user.id, 1);
        assert_eq!(user.avatar, "/avatars/default.png");
        assert_eq!(user.initials, "RO");
    }
}
