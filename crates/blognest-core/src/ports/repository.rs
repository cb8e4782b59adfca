use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::Post;
use crate::error::RepoError;

/// Post repository - an ordered, create-only collection.
///
/// The collection is always observed as a whole: readers get an immutable
/// snapshot, and every write swaps in a new one.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, most recent first.
    async fn list(&self) -> Result<Arc<[Post]>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// Insert a post at the front. Fails if the id is already taken.
    async fn prepend(&self, post: Post) -> Result<Post, RepoError>;

    /// Receive every new snapshot of the collection.
    fn subscribe(&self) -> watch::Receiver<Arc<[Post]>>;
}
