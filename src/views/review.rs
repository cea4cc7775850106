use crate::models;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use std::convert::From;

/// Review as it crosses the HTTP boundary: string id, ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Review {
    pub id: String,
    pub product_id: i64,
    pub user_id: Option<i64>, // null for legacy records
    pub review: String,
    pub rating: i32,
    pub created_at: String,
}

impl From<models::Review> for Review {
    fn from(review: models::Review) -> Self {
        let created_at = review
            .created_at_or_now()
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        Self {
            id: review.id.map(|id| id.to_hex()).unwrap_or_default(),
            product_id: review.product_id,
            user_id: review.user_id,
            review: review.review,
            rating: review.rating,
            created_at,
        }
    }
}
