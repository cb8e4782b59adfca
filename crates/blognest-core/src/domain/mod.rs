//! Domain entities - the core business objects.

pub mod content;
mod id;
mod post;
mod user;

pub use content::{Block, render};
pub use id::TimestampIds;
pub use post::{DEFAULT_FEATURED_IMAGE, EXCERPT_LENGTH, NewPost, Post, excerpt};
pub use user::{AuthProvider, OAuthProvider, UnknownProvider, User, avatar_url};
