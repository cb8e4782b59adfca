//! In-memory post repository.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use blognest_core::domain::Post;
use blognest_core::error::RepoError;
use blognest_core::ports::PostRepository;

use super::seed::seed_posts;

/// Posts kept in a `watch` channel.
///
/// The channel's current value is the list itself, so writing a new list and
/// notifying subscribers is a single step.
pub struct InMemoryPostRepository {
    posts: watch::Sender<Arc<[Post]>>,
}

impl InMemoryPostRepository {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: watch::Sender::new(posts.into()),
        }
    }

    /// A repository holding the demo posts.
    pub fn seeded() -> Self {
        Self::new(seed_posts())
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Arc<[Post]>, RepoError> {
        Ok(self.posts.borrow().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.borrow().iter().find(|p| p.id == id).cloned())
    }

    async fn prepend(&self, post: Post) -> Result<Post, RepoError> {
        let mut conflict = false;
        self.posts.send_if_modified(|posts| {
            if posts.iter().any(|p| p.id == post.id) {
                conflict = true;
                return false;
            }
            *posts = std::iter::once(post.clone())
                .chain(posts.iter().cloned())
                .collect();
            true
        });

        if conflict {
            tracing::warn!(post_id = %post.id, "Rejected post with duplicate id");
            return Err(RepoError::Constraint(format!(
                "post id {} already exists",
                post.id
            )));
        }

        tracing::debug!(post_id = %post.id, total = self.posts.borrow().len(), "Post stored");
        Ok(post)
    }

    fn subscribe(&self) -> watch::Receiver<Arc<[Post]>> {
        self.posts.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Post {id}"),
            content: "Body".into(),
            excerpt: "Body".into(),
            featured_image: "/img.png".into(),
            author: "Tester".into(),
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            tags: vec![],
        }
    }

    #[tokio::test]
    async fn test_prepend_keeps_newest_first() {
        let repo = InMemoryPostRepository::seeded();
        repo.prepend(post("a")).await.unwrap();
        repo.prepend(post("b")).await.unwrap();

        let ids: Vec<_> = repo.list().await.unwrap().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec!["b", "a", "1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected_and_list_unchanged() {
        let repo = InMemoryPostRepository::new(vec![post("x")]);
        let rx = repo.subscribe();

        let err = repo.prepend(post("x")).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert_eq!(repo.list().await.unwrap().len(), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryPostRepository::seeded();
        let found = repo.find_by_id("2").await.unwrap().unwrap();
        assert_eq!(found.title, "Mastering TailwindCSS for Modern UI Design");
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_old_snapshots_are_not_mutated() {
        let repo = InMemoryPostRepository::new(vec![post("x")]);
        let before = repo.list().await.unwrap();
        repo.prepend(post("y")).await.unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}
