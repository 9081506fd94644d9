//! Domain-level command and result types.
//!
//! Callers (a UI, the demo binary, tests) build these and hand them to the
//! services. They carry what a form submits, which is not always what the
//! stores take: a new chore names its assignee by user id, and the service
//! turns that into an embedded snapshot.

pub mod chores {
    use shared::{Chore, Priority};

    /// Input for creating a new chore
    #[derive(Debug, Clone)]
    pub struct CreateChoreCommand {
        pub name: String,
        pub description: String,
        pub frequency: String,
        /// Id of the family member the chore is assigned to
        pub assigned_user_id: u32,
        /// ISO 8601 date (YYYY-MM-DD)
        pub due_date: String,
        pub priority: Priority,
    }

    /// Result of deleting a chore
    #[derive(Debug, Clone)]
    pub struct DeleteChoreResult {
        pub chore: Chore,
        pub success_message: String,
    }
}

pub mod users {
    use shared::{Chore, Role, User};

    /// Input for creating a new family member
    #[derive(Debug, Clone)]
    pub struct CreateUserCommand {
        pub name: String,
        pub email: String,
        pub role: Role,
    }

    /// Result of updating a family member
    #[derive(Debug, Clone)]
    pub struct UpdateUserResult {
        pub user: User,
        /// Chores whose embedded assignee snapshot was rewritten
        pub reassigned_chores: Vec<Chore>,
    }

    /// Result of deleting a family member
    #[derive(Debug, Clone)]
    pub struct DeleteUserResult {
        pub user: User,
        /// Chores removed along with the user (only with cascading deletes)
        pub removed_chores: Vec<Chore>,
        pub success_message: String,
    }
}

pub mod dashboard {
    use shared::{Chore, DashboardStats, UserProgress};

    /// Everything the dashboard page shows
    #[derive(Debug, Clone, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DashboardOverview {
        pub stats: DashboardStats,
        pub family: Vec<UserProgress>,
        pub upcoming: Vec<Chore>,
    }
}
