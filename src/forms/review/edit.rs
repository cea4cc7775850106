use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Only `review` and `rating` are editable; ids and timestamps are not part of the payload.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct EditReview {
    #[validate(min_length = 1)]
    #[validate(pattern = r"\S")]
    pub review: String,
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rating: i32,
}
