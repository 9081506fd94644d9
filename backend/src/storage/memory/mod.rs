//! # In-Memory Storage
//!
//! Session-scoped storage for chores and family members.
//!
//! - [`MemoryConnection`] owns both collections and is cheap to clone; every
//!   clone shares the same data
//! - [`ChoreRepository`] and [`UserRepository`] implement the storage traits
//!   on top of a connection

pub mod chore_repository;
pub mod connection;
pub mod user_repository;

pub use chore_repository::ChoreRepository;
pub use connection::{Collection, MemoryConnection};
pub use user_repository::UserRepository;
