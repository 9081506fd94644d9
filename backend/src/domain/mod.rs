//! # Domain Layer
//!
//! Business rules for the chore tracker. Services sit on top of the
//! in-memory stores and own validation, assignee resolution, undo and the
//! derived statistics. They are cheap to clone; clones share the same
//! underlying collections.

pub mod calendar;
pub mod chore_service;
pub mod commands;
pub mod dashboard_service;
pub mod errors;
pub mod statistics;
pub mod undo;
pub mod user_service;

pub use calendar::CalendarService;
pub use chore_service::ChoreService;
pub use dashboard_service::DashboardService;
pub use errors::{CalendarError, ChoreError, UserError};
pub use undo::UndoBuffer;
pub use user_service::UserService;
