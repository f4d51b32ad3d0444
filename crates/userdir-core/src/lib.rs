//! User repository operations for the userdir service.
//!
//! This crate owns everything between the request dispatcher and the backing
//! store: the [`UserStore`] trait (the seam the dispatcher's operations are
//! tested through), the DynamoDB-backed store, an in-memory store for tests,
//! and the [`UserRepository`] implementing the four CRUD operations.

mod config;
mod dynamo;
mod error;
mod memory;
mod repository;
mod store;

pub use config::UserDirConfig;
pub use dynamo::DynamoStore;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use repository::UserRepository;
pub use store::UserStore;
