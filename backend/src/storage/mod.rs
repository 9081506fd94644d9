//! # Storage Module
//!
//! Holds the chore and family-member collections for one application session.
//!
//! Nothing is persisted: every session starts either empty or from the fixed
//! seed data set, and all state is dropped when the process exits. The
//! domain layer only talks to the collections through the traits in
//! [`traits`], so a persistent backend could be slotted in later without
//! touching the services.
//!
//! ## Update discipline
//!
//! Each collection is an `Arc<Vec<T>>` behind a lock. A mutation clones the
//! vector, edits the clone and swaps the new `Arc` in, so a reader holding a
//! snapshot never observes a half-applied change.

pub mod memory;
pub mod seed;
pub mod traits;

pub use memory::{ChoreRepository, MemoryConnection, UserRepository};
pub use traits::{ChoreStorage, UserStorage};
