use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Option<ObjectId>, // assigned by the store on insert
    pub product_id: i64,      // product service id, not checked for existence
    pub user_id: Option<i64>, // always set on create; absent on legacy documents
    pub review: String,
    pub rating: i32,
    pub created_at: Option<DateTime<Utc>>, // legacy documents may lack it
}

impl Review {
    /// `created_at` as stored, or now for legacy records. Never written back.
    pub fn created_at_or_now(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or_else(Utc::now)
    }
}
