//! Services - the state stores consumed by the presentation layer.

mod post_store;
mod session_store;

pub use post_store::PostStore;
pub use session_store::{Latency, SESSION_KEY, SESSION_PASSWORD_MIN, SessionStore};
