//! Review storage.
//!
//! The manager only talks to [`ReviewStore`]; `mongo` backs it with a MongoDB
//! collection and `memory` with a process-local list for tests and local runs.

use crate::models;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

pub mod memory;
pub mod mongo;

pub use memory::InMemoryReviewStore;
pub use mongo::MongoReviewStore;

/// Which documents a `find` returns.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewFilter {
    All,
    Product(i64),
    Id(ObjectId),
}

impl ReviewFilter {
    pub fn matches(&self, review: &models::Review) -> bool {
        match self {
            Self::All => true,
            Self::Product(product_id) => review.product_id == *product_id,
            Self::Id(id) => review.id.as_ref() == Some(id),
        }
    }
}

/// Document store operations. Each call is a single backend request; errors
/// are short descriptions, the driver error is logged where it happens.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Stores a new document and returns the identifier the backend assigned.
    async fn insert(&self, review: &models::Review) -> Result<ObjectId, String>;

    /// Matching documents, most recent `created_at` first.
    async fn find(&self, filter: ReviewFilter) -> Result<Vec<models::Review>, String>;

    /// Sets `review` and `rating` only. `false` when no document matched.
    async fn update(&self, id: &ObjectId, review: &str, rating: i32) -> Result<bool, String>;

    /// `false` when no document matched.
    async fn delete(&self, id: &ObjectId) -> Result<bool, String>;

    async fn ping(&self) -> Result<(), String>;
}
