// client.rs
use crate::api::{
    Answer, ApiError, Backend, CityInfo, LikeCount, NewAnswer, NewQuestion, NewReview,
    PropertySubmission, Question, Review, SavedStore, SubmissionReceipt,
};
use crate::config::AppConfig;
use crate::domain::{ListingId, SavedEntry, SavedRecord, SavedSnapshot};
use log::debug;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

const USER_AGENT: &str = concat!("city_explorer/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the city REST backend.
pub struct ApiClient {
    base: String,
    client: Client,
}

impl ApiClient {
    pub fn new(cfg: &AppConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(cfg.http_timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            base: cfg.api_base.clone(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json(self.client.get(self.url(path)))
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(self.client.post(self.url(path)).json(body))
    }

    fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let text = self.send(req)?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and return the body text of a 2xx response.
    fn send(&self, req: RequestBuilder) -> Result<String, ApiError> {
        let resp = req.send().map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        debug!("backend {} -> {}", resp.url(), status);

        let text = resp
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

impl SavedStore for ApiClient {
    fn list_saved(&self) -> Result<Vec<SavedEntry>, ApiError> {
        self.get_json("/saved-properties")
    }

    fn create_saved(&self, snapshot: &SavedSnapshot) -> Result<SavedRecord, ApiError> {
        self.post_json("/saved-properties", snapshot)
    }

    fn delete_saved(&self, listing_id: &ListingId) -> Result<(), ApiError> {
        let path = format!("/saved-properties/{}", segment(listing_id.as_str()));
        self.send(self.client.delete(self.url(&path)))?;
        Ok(())
    }
}

impl Backend for ApiClient {
    fn city_info(&self, city: &str) -> Result<CityInfo, ApiError> {
        self.get_json(&format!("/city-info/{}", segment(city)))
    }

    fn reviews(&self, city: &str) -> Result<Vec<Review>, ApiError> {
        self.get_json(&format!("/reviews/{}", segment(city)))
    }

    fn create_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        self.post_json("/reviews", review)
    }

    fn like_review(&self, review_id: i64) -> Result<i64, ApiError> {
        let resp: LikeCount = self.send_json(
            self.client
                .post(self.url(&format!("/reviews/{review_id}/like"))),
        )?;
        Ok(resp.likes)
    }

    fn questions(&self) -> Result<Vec<Question>, ApiError> {
        self.get_json("/questions")
    }

    fn create_question(&self, question: &NewQuestion) -> Result<Question, ApiError> {
        self.post_json("/questions", question)
    }

    fn answers(&self, question_id: i64) -> Result<Vec<Answer>, ApiError> {
        self.get_json(&format!("/questions/{question_id}/answers"))
    }

    fn create_answer(&self, question_id: i64, answer: &NewAnswer) -> Result<Answer, ApiError> {
        self.post_json(&format!("/questions/{question_id}/answers"), answer)
    }

    fn submit_listing(
        &self,
        submission: &PropertySubmission,
    ) -> Result<SubmissionReceipt, ApiError> {
        self.post_json("/listings", submission)
    }
}
