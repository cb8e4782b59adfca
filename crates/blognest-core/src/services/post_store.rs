//! The post store: an ordered list of posts with create and lookup.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use crate::domain::{NewPost, Post, TimestampIds};
use crate::error::DomainError;
use crate::ports::PostRepository;

pub struct PostStore {
    posts: Arc<dyn PostRepository>,
    ids: TimestampIds,
}

impl PostStore {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            ids: TimestampIds::new(),
        }
    }

    /// Assign an id and today's date, then put the post at the front of the list.
    pub async fn add_post(&self, data: NewPost) -> Result<Post, DomainError> {
        let now = Utc::now();
        let id = self.ids.next_at(now.timestamp_millis()).to_string();
        let post = self.posts.prepend(data.into_post(id, now.date_naive())).await?;

        tracing::info!(post_id = %post.id, title = %post.title, "Post created");
        Ok(post)
    }

    pub async fn get_post(&self, id: &str) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.find_by_id(id).await?)
    }

    /// Like [`get_post`](Self::get_post), but a miss is an error.
    pub async fn require_post(&self, id: &str) -> Result<Post, DomainError> {
        self.get_post(id).await?.ok_or_else(|| DomainError::NotFound {
            entity_type: "Post",
            id: id.to_string(),
        })
    }

    /// Current list, most recent first.
    pub async fn posts(&self) -> Result<Arc<[Post]>, DomainError> {
        Ok(self.posts.list().await?)
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<[Post]>> {
        self.posts.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepoError;
    use async_trait::async_trait;

    /// Bare-bones repository for exercising the store.
    struct SnapshotRepository {
        tx: watch::Sender<Arc<[Post]>>,
    }

    impl SnapshotRepository {
        fn with(posts: Vec<Post>) -> Arc<Self> {
            Arc::new(Self {
                tx: watch::Sender::new(posts.into()),
            })
        }
    }

    #[async_trait]
    impl PostRepository for SnapshotRepository {
        async fn list(&self) -> Result<Arc<[Post]>, RepoError> {
            Ok(self.tx.borrow().clone())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
            Ok(self.tx.borrow().iter().find(|p| p.id == id).cloned())
        }

        async fn prepend(&self, post: Post) -> Result<Post, RepoError> {
            self.tx.send_modify(|posts| {
                *posts = std::iter::once(post.clone())
                    .chain(posts.iter().cloned())
                    .collect();
            });
            Ok(post)
        }

        fn subscribe(&self) -> watch::Receiver<Arc<[Post]>> {
            self.tx.subscribe()
        }
    }

    fn draft(title: &str) -> NewPost {
        NewPost {
            title: title.into(),
            content: format!("{title} body"),
            excerpt: format!("{title} body"),
            featured_image: "/img.png".into(),
            author: "Tester".into(),
            tags: vec![],
        }
    }

    fn seed() -> Post {
        draft("Seed").into_post("1".into(), Utc::now().date_naive())
    }

    #[tokio::test]
    async fn test_add_post_prepends_and_counts() {
        let store = PostStore::new(SnapshotRepository::with(vec![seed()]));

        for title in ["first", "second", "third"] {
            store.add_post(draft(title)).await.unwrap();
        }

        let posts = store.posts().await.unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first", "Seed"]);
    }

    #[tokio::test]
    async fn test_rapid_adds_get_distinct_ids() {
        let store = PostStore::new(SnapshotRepository::with(vec![]));

        let mut ids = Vec::new();
        for i in 0..50 {
            ids.push(store.add_post(draft(&i.to_string())).await.unwrap().id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[tokio::test]
    async fn test_get_post_returns_exact_post() {
        let store = PostStore::new(SnapshotRepository::with(vec![seed()]));

        let created = store.add_post(draft("lookup")).await.unwrap();
        assert_eq!(created.date, Utc::now().date_naive());

        let found = store.get_post(&created.id).await.unwrap();
        assert_eq!(found, Some(created));
        assert_eq!(store.get_post("never-assigned").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_require_post_reports_not_found() {
        let store = PostStore::new(SnapshotRepository::with(vec![]));
        let err = store.require_post("404").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity_type: "Post", .. }));
    }

    #[tokio::test]
    async fn test_subscribers_see_new_snapshots() {
        let store = PostStore::new(SnapshotRepository::with(vec![seed()]));
        let mut rx = store.subscribe();

        store.add_post(draft("watched")).await.unwrap();

        rx.changed().await.unwrap();
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].title, "watched");
    }
}
