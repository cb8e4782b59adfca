//! # BlogNest Core
//!
//! The domain layer of BlogNest.
//! Posts, users, the two state stores built on top of them, and the form
//! validation that guards their inputs. Storage is reached only through the
//! traits in [`ports`].

pub mod domain;
pub mod error;
pub mod forms;
pub mod ports;
pub mod services;

pub use error::{AuthError, DomainError};
pub use services::{PostStore, SessionStore};
