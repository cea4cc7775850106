use crate::db::{ReviewFilter, ReviewStore};
use crate::errors::ReviewError;
use crate::forms;
use crate::models;
use crate::views;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use serde_valid::Validate;
use std::sync::Arc;

/// Review operations over an injected store. Input shape, rating bounds and
/// identifier format are checked here, before the store is touched.
#[derive(Clone)]
pub struct ReviewManager {
    store: Arc<dyn ReviewStore>,
}

impl ReviewManager {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "Create review.", skip(self))]
    pub async fn create(&self, form: forms::review::Add) -> Result<views::Review, ReviewError> {
        form.validate()?;

        let mut review: models::Review = form.into();
        review.created_at = Some(Utc::now());

        let id = self
            .store
            .insert(&review)
            .await
            .map_err(ReviewError::Storage)?;
        review.id = Some(id);
        tracing::info!("New review {} has been saved", id);

        Ok(review.into())
    }

    #[tracing::instrument(name = "List reviews.", skip(self))]
    pub async fn list(&self) -> Result<Vec<views::Review>, ReviewError> {
        self.fetch(ReviewFilter::All).await
    }

    #[tracing::instrument(name = "List reviews of a product.", skip(self))]
    pub async fn list_by_product(&self, product_id: i64) -> Result<Vec<views::Review>, ReviewError> {
        if product_id < 1 {
            return Err(ReviewError::Validation(format!(
                "product_id must be a positive integer, got {}",
                product_id
            )));
        }
        self.fetch(ReviewFilter::Product(product_id)).await
    }

    #[tracing::instrument(name = "Get review.", skip(self))]
    pub async fn get(&self, id: &str) -> Result<views::Review, ReviewError> {
        let id = parse_id(id)?;
        self.fetch(ReviewFilter::Id(id))
            .await?
            .into_iter()
            .next()
            .ok_or(ReviewError::NotFound)
    }

    #[tracing::instrument(name = "Update review.", skip(self))]
    pub async fn update(&self, id: &str, form: forms::review::Edit) -> Result<(), ReviewError> {
        form.validate()?;
        let id = parse_id(id)?;

        match self.store.update(&id, &form.review, form.rating).await {
            Ok(true) => {
                tracing::info!("Review {} has been updated", id);
                Ok(())
            }
            Ok(false) => Err(ReviewError::NotFound),
            Err(err) => Err(ReviewError::Storage(err)),
        }
    }

    #[tracing::instrument(name = "Delete review.", skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ReviewError> {
        let id = parse_id(id)?;

        match self.store.delete(&id).await {
            Ok(true) => {
                tracing::info!("Review {} has been deleted", id);
                Ok(())
            }
            Ok(false) => Err(ReviewError::NotFound),
            Err(err) => Err(ReviewError::Storage(err)),
        }
    }

    async fn fetch(&self, filter: ReviewFilter) -> Result<Vec<views::Review>, ReviewError> {
        let mut reviews = self.store.find(filter).await.map_err(ReviewError::Storage)?;
        // Undated records are shown as created now, so they lead the list.
        reviews.sort_by_key(|review| review.created_at.is_some());

        Ok(reviews.into_iter().map(Into::into).collect())
    }
}

/// External id → ObjectId (24 hex characters).
pub fn parse_id(id: &str) -> Result<ObjectId, ReviewError> {
    ObjectId::parse_str(id).map_err(|_| ReviewError::InvalidIdentifier(id.to_string()))
}
