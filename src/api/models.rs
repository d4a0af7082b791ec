use crate::domain::Listing;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// city-info payload
//  ├── city_name, description, images
//  ├── rent_estimate { currency, average_rent, range_low, range_high }
//  ├── quality_of_life { score, safety, transport, nightlife }
//  ├── areas [ { name, rent, vibe, image } ]
//  └── listings [ Listing ]

#[derive(Debug, Clone, Deserialize)]
pub struct CityInfo {
    pub city_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub rent_estimate: RentEstimate,
    pub quality_of_life: QualityOfLife,
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default)]
    pub listings: Vec<Listing>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RentEstimate {
    #[serde(default = "default_currency")]
    pub currency: String,
    pub average_rent: i64,
    pub range_low: i64,
    pub range_high: i64,
}

fn default_currency() -> String {
    "₹".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct QualityOfLife {
    pub score: f64,
    pub safety: String,
    pub transport: String,
    pub nightlife: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Area {
    pub name: String,
    /// Display rent, e.g. "₹28,000".
    #[serde(default)]
    pub rent: String,
    #[serde(default)]
    pub vibe: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub id: i64,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub rent_amount: i64,
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub likes: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub city: String,
    pub rent_amount: i64,
    pub property_type: String,
    pub comment: String,
    pub likes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LikeCount {
    pub likes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    #[serde(default = "anonymous")]
    pub user_name: String,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    pub upvotes: i64,
}

fn anonymous() -> String {
    "Anonymous".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct NewQuestion {
    pub text: String,
    pub user_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    #[serde(default = "community_member")]
    pub user_name: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

fn community_member() -> String {
    "Community Member".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAnswer {
    pub text: String,
    pub user_name: String,
}

/// "List your property" form, reviewed by the backend before it goes live.
#[derive(Debug, Clone, Serialize)]
pub struct PropertySubmission {
    pub owner_name: String,
    pub contact: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub city: String,
    pub area: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionReceipt {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub id: Option<i64>,
}
