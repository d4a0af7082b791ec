mod api_error;
mod client;
pub mod models;

pub use api_error::ApiError;
pub use client::ApiClient;
pub use models::*;

use crate::domain::{ListingId, SavedEntry, SavedRecord, SavedSnapshot};

/// Remote store behind the saved-properties mirror.
pub trait SavedStore: Send + Sync {
    fn list_saved(&self) -> Result<Vec<SavedEntry>, ApiError>;
    fn create_saved(&self, snapshot: &SavedSnapshot) -> Result<SavedRecord, ApiError>;
    fn delete_saved(&self, listing_id: &ListingId) -> Result<(), ApiError>;
}

/// Everything the front end reads from or writes to the city backend.
pub trait Backend: SavedStore {
    fn city_info(&self, city: &str) -> Result<CityInfo, ApiError>;

    fn reviews(&self, city: &str) -> Result<Vec<Review>, ApiError>;
    fn create_review(&self, review: &NewReview) -> Result<Review, ApiError>;
    fn like_review(&self, review_id: i64) -> Result<i64, ApiError>;

    fn questions(&self) -> Result<Vec<Question>, ApiError>;
    fn create_question(&self, question: &NewQuestion) -> Result<Question, ApiError>;
    fn answers(&self, question_id: i64) -> Result<Vec<Answer>, ApiError>;
    fn create_answer(&self, question_id: i64, answer: &NewAnswer) -> Result<Answer, ApiError>;

    fn submit_listing(&self, submission: &PropertySubmission)
        -> Result<SubmissionReceipt, ApiError>;
}
