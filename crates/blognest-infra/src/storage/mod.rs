//! Local storage implementations - a JSON file and an in-memory fallback.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;
