use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Avatar reference used when a record does not carry its own image
pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

/// Date format used for chore due dates (ISO 8601 calendar date)
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Lifecycle state of a chore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoreStatus {
    #[default]
    Pending,
    Completed,
}

impl ChoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoreStatus::Pending => "pending",
            ChoreStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ChoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How urgent a chore is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Sort key where the most urgent priority comes first
    pub fn urgency_rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a family member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Parent,
    Child,
    Other,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Parent => "parent",
            Role::Child => "child",
            Role::Other => "other",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display fields of a user copied onto a chore at assignment time.
///
/// This is a snapshot, not a reference: renaming the user does not touch
/// chores that already carry a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub name: String,
    pub avatar: String,
    pub initials: String,
}

/// A household task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chore {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Free text; the UI offers Daily, Weekly, Bi-weekly and Monthly
    pub frequency: String,
    pub assigned_to: Assignee,
    pub status: ChoreStatus,
    /// ISO 8601 date (YYYY-MM-DD)
    pub due_date: String,
    pub priority: Priority,
}

impl Chore {
    /// Parsed due date, `None` when the stored string is not a valid date
    pub fn due_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.due_date, DUE_DATE_FORMAT).ok()
    }

    pub fn is_completed(&self) -> bool {
        self.status == ChoreStatus::Completed
    }

    pub fn is_pending(&self) -> bool {
        self.status == ChoreStatus::Pending
    }
}

/// Fields for creating a chore.
///
/// `id` and `status` are normally left empty; they are only supplied when
/// a previously deleted chore is being restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChore {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    pub description: String,
    pub frequency: String,
    pub assigned_to: Assignee,
    #[serde(default)]
    pub status: Option<ChoreStatus>,
    pub due_date: String,
    pub priority: Priority,
}

impl From<Chore> for NewChore {
    fn from(chore: Chore) -> Self {
        Self {
            id: Some(chore.id),
            name: chore.name,
            description: chore.description,
            frequency: chore.frequency,
            assigned_to: chore.assigned_to,
            status: Some(chore.status),
            due_date: chore.due_date,
            priority: chore.priority,
        }
    }
}

/// Partial update for a chore. Absent fields are left untouched and the
/// id can never be changed through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChorePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<String>,
    pub assigned_to: Option<Assignee>,
    pub status: Option<ChoreStatus>,
    pub due_date: Option<String>,
    pub priority: Option<Priority>,
}

impl ChorePatch {
    pub fn status(status: ChoreStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn assigned_to(assignee: Assignee) -> Self {
        Self {
            assigned_to: Some(assignee),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the present fields into `chore`
    pub fn apply_to(&self, chore: &mut Chore) {
        if let Some(name) = &self.name {
            chore.name = name.clone();
        }
        if let Some(description) = &self.description {
            chore.description = description.clone();
        }
        if let Some(frequency) = &self.frequency {
            chore.frequency = frequency.clone();
        }
        if let Some(assigned_to) = &self.assigned_to {
            chore.assigned_to = assigned_to.clone();
        }
        if let Some(status) = self.status {
            chore.status = status;
        }
        if let Some(due_date) = &self.due_date {
            chore.due_date = due_date.clone();
        }
        if let Some(priority) = self.priority {
            chore.priority = priority;
        }
    }
}

/// A family member who can be assigned chores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
    pub initials: String,
    /// Advisory counter set at creation; not kept in sync with chores
    pub completed_chores: u32,
    /// Advisory counter set at creation; not kept in sync with chores
    pub pending_chores: u32,
}

impl User {
    /// First space-delimited token of the name
    pub fn first_name(&self) -> &str {
        first_name(&self.name)
    }

    /// Snapshot of the display fields to embed in a chore
    pub fn assignee(&self) -> Assignee {
        Assignee {
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            initials: self.initials.clone(),
        }
    }
}

/// Fields for creating a user. Avatar, initials and counters are derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Only supplied when restoring a deleted user
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Partial update for a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub avatar: Option<String>,
    pub initials: Option<String>,
    pub completed_chores: Option<u32>,
    pub pending_chores: Option<u32>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether applying this patch can change the snapshot embedded in chores
    pub fn touches_display_fields(&self) -> bool {
        self.name.is_some() || self.avatar.is_some() || self.initials.is_some()
    }

    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(avatar) = &self.avatar {
            user.avatar = avatar.clone();
        }
        if let Some(initials) = &self.initials {
            user.initials = initials.clone();
        }
        if let Some(completed) = self.completed_chores {
            user.completed_chores = completed;
        }
        if let Some(pending) = self.pending_chores {
            user.pending_chores = pending;
        }
    }
}

/// Whitespace-separated tokens of a name. Runs of spaces and leading or
/// trailing spaces never produce empty tokens.
fn name_tokens(name: &str) -> std::str::SplitWhitespace<'_> {
    name.split_whitespace()
}

/// First token of a name ("Alex Johnson" -> "Alex")
pub fn first_name(name: &str) -> &str {
    name_tokens(name).next().unwrap_or("")
}

/// Derive display initials from a full name.
///
/// Two or more tokens: first letter of each of the first two tokens.
/// One token: its first two characters. Always uppercased.
pub fn derive_initials(name: &str) -> String {
    let mut tokens = name_tokens(name);
    let initials: String = match (tokens.next(), tokens.next()) {
        (Some(first), Some(second)) => first.chars().take(1).chain(second.chars().take(1)).collect(),
        (Some(only), None) => only.chars().take(2).collect(),
        _ => String::new(),
    };
    initials.to_uppercase()
}

/// Global counters shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub completed_chores: u32,
    pub pending_chores: u32,
    pub active_users: u32,
    pub total_chores: u32,
    /// Whole percent, 0 when there are no chores
    pub completion_rate: u32,
}

/// Short view of a pending chore for a member's detail panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingChoreSummary {
    pub id: u32,
    pub name: String,
    pub due_date: String,
}

/// Progress of one family member, derived from the chore collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub user_id: u32,
    pub name: String,
    pub avatar: String,
    pub initials: String,
    pub completed_chores: u32,
    pub pending_chores: u32,
    pub total_chores: u32,
    /// Whole percent, 0 when no chore matched the user
    pub progress: u32,
    pub top_performer: bool,
    pub pending: Vec<PendingChoreSummary>,
}

/// Status selector of the chores list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn matches(&self, status: ChoreStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == ChoreStatus::Pending,
            StatusFilter::Completed => status == ChoreStatus::Completed,
        }
    }
}

/// Search and status filter for the chores list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoreFilter {
    pub search: Option<String>,
    pub status: StatusFilter,
}

impl ChoreFilter {
    /// Case-insensitive substring match on name or description, plus status.
    /// The search term is used as typed, spaces included.
    pub fn matches(&self, chore: &Chore) -> bool {
        if !self.status.matches(chore.status) {
            return false;
        }
        match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                chore.name.to_lowercase().contains(&term)
                    || chore.description.to_lowercase().contains(&term)
            }
        }
    }
}

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Empty padding cell before the first day of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Empty padding cell completing the last week
    PaddingAfter,
}

/// A single cell of the chore calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChoreCalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    pub day_type: CalendarDayType,
    pub chores: Vec<Chore>,
}

/// A month grid of chores keyed by due date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChoreCalendarMonth {
    pub month: u32,
    pub year: i32,
    pub month_name: String,
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u32,
    pub days: Vec<ChoreCalendarDay>,
}

/// Month currently shown by the calendar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: i32,
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            month: now.month(),
            year: now.year(),
        }
    }
}
