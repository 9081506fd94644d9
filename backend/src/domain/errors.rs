//! User-visible failures raised by the domain services.
//!
//! The stores themselves never fail; these errors come from the checks the
//! services run before touching them (form rules, referenced records).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoreError {
    #[error("Chore not found: {0}")]
    ChoreNotFound(u32),
    #[error("Selected user not found: {0}")]
    UserNotFound(u32),
    #[error("Chore name must be at least 2 characters")]
    NameTooShort,
    #[error("Description must be at least 5 characters")]
    DescriptionTooShort,
    #[error("Please select a frequency")]
    MissingFrequency,
    #[error("Due date must be a valid YYYY-MM-DD date, got '{0}'")]
    InvalidDueDate(String),
    #[error("The assignee of a chore can only be changed by reassigning it")]
    AssigneeNotEditable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    UserNotFound(u32),
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email address, got '{0}'")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
}
