use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct AddReview {
    #[validate(minimum = 1)]
    pub product_id: i64,
    #[validate(minimum = 1)]
    pub user_id: i64,
    #[validate(min_length = 1)]
    #[validate(pattern = r"\S")]
    pub review: String,
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rating: i32,
}

impl Into<models::Review> for AddReview {
    fn into(self) -> models::Review {
        let mut review = models::Review::default();
        review.product_id = self.product_id;
        review.user_id = Some(self.user_id);
        review.review = self.review;
        review.rating = self.rating;

        review
    }
}
