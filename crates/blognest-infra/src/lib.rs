//! # BlogNest Infrastructure
//!
//! Concrete implementations of the ports defined in `blognest-core`.
//!
//! - [`InMemoryPostRepository`] - the post list, optionally seeded with demo posts
//! - [`InMemoryStorage`] - local storage that lives as long as the process
//! - [`FileStorage`] - local storage kept in a JSON file

pub mod repository;
pub mod storage;

pub use repository::InMemoryPostRepository;
pub use storage::{FileStorage, InMemoryStorage};
