//! Fixed data set every session starts from.

use shared::{Assignee, Chore, ChoreStatus, Priority, Role, User, PLACEHOLDER_AVATAR};

fn assignee(name: &str, initials: &str) -> Assignee {
    Assignee {
        name: name.to_string(),
        avatar: PLACEHOLDER_AVATAR.to_string(),
        initials: initials.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn chore(
    id: u32,
    name: &str,
    description: &str,
    frequency: &str,
    assigned_to: Assignee,
    status: ChoreStatus,
    due_date: &str,
    priority: Priority,
) -> Chore {
    Chore {
        id,
        name: name.to_string(),
        description: description.to_string(),
        frequency: frequency.to_string(),
        assigned_to,
        status,
        due_date: due_date.to_string(),
        priority,
    }
}

fn user(id: u32, name: &str, email: &str, role: Role, initials: &str, completed: u32, pending: u32) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: PLACEHOLDER_AVATAR.to_string(),
        initials: initials.to_string(),
        completed_chores: completed,
        pending_chores: pending,
    }
}

/// The five starter chores. Assignees carry first names only.
pub fn seed_chores() -> Vec<Chore> {
    vec![
        chore(
            1,
            "Vacuum Living Room",
            "Use the vacuum cleaner to clean the living room floor and under furniture",
            "Weekly",
            assignee("Alex", "AJ"),
            ChoreStatus::Pending,
            "2023-06-15",
            Priority::High,
        ),
        chore(
            2,
            "Take Out Trash",
            "Empty all trash cans and take bags to outdoor bin",
            "Daily",
            assignee("Sam", "SL"),
            ChoreStatus::Completed,
            "2023-06-14",
            Priority::Low,
        ),
        chore(
            3,
            "Clean Bathroom",
            "Clean toilet, sink, shower, and floor",
            "Weekly",
            assignee("Jamie", "JD"),
            ChoreStatus::Pending,
            "2023-06-16",
            Priority::Medium,
        ),
        chore(
            4,
            "Mow Lawn",
            "Cut grass in front and back yard",
            "Bi-weekly",
            assignee("Taylor", "TS"),
            ChoreStatus::Pending,
            "2023-06-18",
            Priority::High,
        ),
        chore(
            5,
            "Do Dishes",
            "Wash all dishes in the sink and load/unload dishwasher",
            "Daily",
            assignee("Alex", "AJ"),
            ChoreStatus::Completed,
            "2023-06-14",
            Priority::Medium,
        ),
    ]
}

/// The four starter family members. Their counters are advisory demo values.
pub fn seed_users() -> Vec<User> {
    vec![
        user(1, "Alex Johnson", "alex@example.com", Role::Parent, "AJ", 8, 2),
        user(2, "Sam Lee", "sam@example.com", Role::Child, "SL", 6, 2),
        user(3, "Jamie Davis", "jamie@example.com", Role::Child, "JD", 9, 1),
        user(4, "Taylor Smith", "taylor@example.com", Role::Child, "TS", 7, 2),
    ]
}
