use super::{ReviewFilter, ReviewStore};
use crate::configuration::DatabaseSettings;
use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, DateTime as BsonDateTime, Document};
use mongodb::options::{ClientOptions, FindOptions};
use mongodb::{Client, Collection, Database};
use tracing::Instrument;

/// Reviews kept as documents of one MongoDB collection.
#[derive(Clone, Debug)]
pub struct MongoReviewStore {
    database: Database,
    collection: Collection<Document>,
}

impl MongoReviewStore {
    /// Builds the client and waits until the server answers a ping, retrying
    /// `connect_retries` times `retry_interval_secs` apart.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, String> {
        let mut options = ClientOptions::parse(settings.connection_string())
            .await
            .map_err(|err| {
                tracing::error!("Invalid MongoDB connection options: {:?}", err);
                "Invalid MongoDB connection options".to_string()
            })?;
        options.app_name = Some("review-report".to_string());
        options.server_selection_timeout = Some(settings.server_selection_timeout());

        let client = Client::with_options(options).map_err(|err| {
            tracing::error!("Failed to build MongoDB client: {:?}", err);
            "Failed to build MongoDB client".to_string()
        })?;

        let database = client.database(&settings.database_name);
        let store = Self::new(database, &settings.collection);

        let attempts = settings.connect_retries.max(1);
        for attempt in 1..=attempts {
            match store.ping().await {
                Ok(()) => {
                    tracing::info!(
                        database = %settings.database_name,
                        collection = %settings.collection,
                        "Connected to MongoDB"
                    );
                    return Ok(store);
                }
                Err(_) if attempt < attempts => {
                    tracing::warn!(attempt, attempts, "MongoDB not ready, retrying...");
                    tokio::time::sleep(settings.retry_interval()).await;
                }
                Err(_) => {}
            }
        }

        Err(format!("MongoDB unreachable after {} attempts", attempts))
    }

    pub fn new(database: Database, collection: &str) -> Self {
        let collection = database.collection::<Document>(collection);
        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl ReviewStore for MongoReviewStore {
    async fn insert(&self, review: &models::Review) -> Result<ObjectId, String> {
        let query_span = tracing::info_span!("Saving new review into the database");
        self.collection
            .insert_one(to_document(review), None)
            .instrument(query_span)
            .await
            .map_err(|err| {
                tracing::error!("Failed to insert review: {:?}", err);
                "Failed to insert".to_string()
            })
            .and_then(|result| {
                result.inserted_id.as_object_id().ok_or_else(|| {
                    tracing::error!("Unexpected inserted id: {:?}", result.inserted_id);
                    "Failed to insert".to_string()
                })
            })
    }

    async fn find(&self, filter: ReviewFilter) -> Result<Vec<models::Review>, String> {
        let query_span = tracing::info_span!("Fetch reviews.", filter = ?filter);
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        async {
            let mut cursor = self
                .collection
                .find(filter_document(&filter), options)
                .await
                .map_err(|err| {
                    tracing::error!("Failed to fetch reviews: {:?}", err);
                    "Could not fetch data".to_string()
                })?;

            let mut reviews = vec![];
            while let Some(document) = cursor.try_next().await.map_err(|err| {
                tracing::error!("Failed to read review cursor: {:?}", err);
                "Could not fetch data".to_string()
            })? {
                match from_document(&document) {
                    Ok(review) => reviews.push(review),
                    Err(err) => {
                        tracing::warn!("Skipping undecodable review {:?}: {}", document.get("_id"), err);
                    }
                }
            }

            Ok::<_, String>(reviews)
        }
        .instrument(query_span)
        .await
    }

    async fn update(&self, id: &ObjectId, review: &str, rating: i32) -> Result<bool, String> {
        let query_span = tracing::info_span!("Update review.", %id);
        self.collection
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "review": review, "rating": rating } },
                None,
            )
            .instrument(query_span)
            .await
            .map(|result| result.matched_count > 0)
            .map_err(|err| {
                tracing::error!("Failed to update review: {:?}", err);
                "Failed to update".to_string()
            })
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, String> {
        let query_span = tracing::info_span!("Delete review.", %id);
        self.collection
            .delete_one(doc! { "_id": *id }, None)
            .instrument(query_span)
            .await
            .map(|result| result.deleted_count > 0)
            .map_err(|err| {
                tracing::error!("Failed to delete review: {:?}", err);
                "Failed to delete".to_string()
            })
    }

    async fn ping(&self) -> Result<(), String> {
        self.database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map(|_| ())
            .map_err(|err| {
                tracing::error!("MongoDB ping failed: {:?}", err);
                "MongoDB unreachable".to_string()
            })
    }
}

fn filter_document(filter: &ReviewFilter) -> Document {
    match filter {
        ReviewFilter::All => doc! {},
        ReviewFilter::Product(product_id) => doc! { "product_id": *product_id },
        ReviewFilter::Id(id) => doc! { "_id": *id },
    }
}

fn to_document(review: &models::Review) -> Document {
    let mut document = doc! {
        "product_id": review.product_id,
        "review": review.review.as_str(),
        "rating": review.rating,
    };
    if let Some(user_id) = review.user_id {
        document.insert("user_id", user_id);
    }
    if let Some(id) = review.id {
        document.insert("_id", id);
    }
    if let Some(created_at) = review.created_at {
        document.insert(
            "created_at",
            BsonDateTime::from_millis(created_at.timestamp_millis()),
        );
    }

    document
}

fn from_document(document: &Document) -> Result<models::Review, String> {
    let id = document
        .get_object_id("_id")
        .map_err(|err| format!("_id: {}", err))?;
    let review = document
        .get_str("review")
        .map_err(|err| format!("review: {}", err))?
        .to_string();
    let rating = i32::try_from(get_int(document, "rating")?)
        .map_err(|_| "rating: out of range".to_string())?;

    // legacy documents may carry no timestamp, or a string one
    let created_at = match document.get("created_at") {
        Some(Bson::DateTime(created_at)) => {
            DateTime::<Utc>::from_timestamp_millis(created_at.timestamp_millis())
        }
        Some(Bson::String(created_at)) => DateTime::parse_from_rfc3339(created_at)
            .ok()
            .map(|created_at| created_at.with_timezone(&Utc)),
        _ => None,
    };
    // the first version of the service never stored a user
    let user_id = match document.get("user_id") {
        None | Some(Bson::Null) => None,
        Some(_) => Some(get_int(document, "user_id")?),
    };

    Ok(models::Review {
        id: Some(id),
        product_id: get_int(document, "product_id")?,
        user_id,
        review,
        rating,
        created_at,
    })
}

fn get_int(document: &Document, key: &str) -> Result<i64, String> {
    match document.get(key) {
        Some(Bson::Int32(value)) => Ok(i64::from(*value)),
        Some(Bson::Int64(value)) => Ok(*value),
        Some(Bson::Double(value)) if value.fract() == 0.0 => Ok(*value as i64),
        _ => Err(format!("{}: missing or not an integer", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn review() -> models::Review {
        models::Review {
            id: Some(ObjectId::new()),
            product_id: 1,
            user_id: Some(7),
            review: "Great".to_string(),
            rating: 5,
            created_at: Some(Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap()),
        }
    }

    #[test]
    fn document_round_trip_keeps_fields() {
        let original = review();
        let decoded = from_document(&to_document(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn new_review_document_has_no_id() {
        let mut review = review();
        review.id = None;
        let document = to_document(&review);
        assert!(document.get("_id").is_none());
        assert!(document.get_datetime("created_at").is_ok());
    }

    #[test]
    fn reads_int32_fields_and_missing_timestamp() {
        let id = ObjectId::new();
        let document = doc! {
            "_id": id,
            "product_id": 3_i32,
            "user_id": 9_i32,
            "review": "Legacy",
            "rating": 4_i32,
        };

        let review = from_document(&document).unwrap();
        assert_eq!(review.id, Some(id));
        assert_eq!(review.product_id, 3);
        assert_eq!(review.user_id, Some(9));
        assert_eq!(review.rating, 4);
        assert_eq!(review.created_at, None);
    }

    #[test]
    fn reads_document_without_user_or_timestamp() {
        let id = ObjectId::new();
        let document = doc! {
            "_id": id,
            "product_id": 1_i32,
            "review": "Great",
            "rating": 5_i32,
        };

        let review = from_document(&document).unwrap();
        assert_eq!(review.id, Some(id));
        assert_eq!(review.product_id, 1);
        assert_eq!(review.user_id, None);
        assert_eq!(review.review, "Great");
        assert_eq!(review.rating, 5);
        assert_eq!(review.created_at, None);

        let mut written = review.clone();
        written.id = None;
        assert!(to_document(&written).get("user_id").is_none());
    }

    #[test]
    fn rejects_non_integer_user() {
        let document = doc! {
            "_id": ObjectId::new(),
            "product_id": 3_i64,
            "user_id": "seven",
            "review": "Text user",
            "rating": 4_i32,
        };
        assert!(from_document(&document).is_err());
    }

    #[test]
    fn filters() {
        let id = ObjectId::new();
        assert_eq!(filter_document(&ReviewFilter::All), doc! {});
        assert_eq!(
            filter_document(&ReviewFilter::Product(4)),
            doc! { "product_id": 4_i64 }
        );
        assert_eq!(filter_document(&ReviewFilter::Id(id)), doc! { "_id": id });
    }
}
