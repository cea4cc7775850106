use super::{ReviewFilter, ReviewStore};
use crate::models;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Process-local store with the same contract as the MongoDB one.
/// Counts every call so tests can assert that nothing reached storage.
#[derive(Debug, Default)]
pub struct InMemoryReviewStore {
    reviews: Mutex<Vec<models::Review>>,
    calls: AtomicUsize,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store operations issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Puts a document in as-is, e.g. a legacy record without `created_at`.
    /// Not counted as a call.
    pub fn seed(&self, mut review: models::Review) -> Result<ObjectId, String> {
        let id = review.id.unwrap_or_else(ObjectId::new);
        review.id = Some(id);
        self.lock()?.push(review);
        Ok(id)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<models::Review>>, String> {
        self.reviews.lock().map_err(|err| {
            tracing::error!("In-memory review store is poisoned: {:?}", err);
            "Review store unavailable".to_string()
        })
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn insert(&self, review: &models::Review) -> Result<ObjectId, String> {
        self.touch();
        let id = ObjectId::new();
        let mut review = review.clone();
        review.id = Some(id);
        self.lock()?.push(review);
        tracing::debug!("Stored review {}", id);
        Ok(id)
    }

    async fn find(&self, filter: ReviewFilter) -> Result<Vec<models::Review>, String> {
        self.touch();
        let mut reviews: Vec<models::Review> = self
            .lock()?
            .iter()
            .filter(|review| filter.matches(review))
            .cloned()
            .collect();
        // documents without created_at go last, as with a descending Mongo sort
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    async fn update(&self, id: &ObjectId, review: &str, rating: i32) -> Result<bool, String> {
        self.touch();
        let mut reviews = self.lock()?;
        match reviews.iter_mut().find(|stored| stored.id.as_ref() == Some(id)) {
            Some(stored) => {
                stored.review = review.to_string();
                stored.rating = rating;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, String> {
        self.touch();
        let mut reviews = self.lock()?;
        let before = reviews.len();
        reviews.retain(|stored| stored.id.as_ref() != Some(id));
        Ok(reviews.len() < before)
    }

    async fn ping(&self) -> Result<(), String> {
        Ok(())
    }
}
