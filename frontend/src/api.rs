use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct RecommendRequest<'a> {
    intent: &'a str,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ChatResponse {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RecommendResponse {
    #[serde(default)]
    pub project: Option<Project>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A request that never produced a decodable body. The cause is logged
/// where it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkFailure;

/// Error text the backend reported, if any. An empty string counts as none.
pub fn reported_error(error: &Option<String>) -> Option<&str> {
    error.as_deref().filter(|e| !e.is_empty())
}

// The body is decoded whatever the status, since the backend answers
// validation failures with a 400 carrying `{error}`.
pub async fn send_chat(message: String) -> Result<ChatResponse, gloo_net::Error> {
    let response = Request::post(&config::endpoint(config::CHAT_ENDPOINT))
        .header("Content-Type", "application/json")
        .json(&ChatRequest { message: &message })?
        .send()
        .await?;
    response.json::<ChatResponse>().await
}

pub async fn request_recommendation(intent: String) -> Result<RecommendResponse, gloo_net::Error> {
    let response = Request::post(&config::endpoint(config::RECOMMEND_ENDPOINT))
        .header("Content-Type", "application/json")
        .json(&RecommendRequest { intent: &intent })?
        .send()
        .await?;
    response.json::<RecommendResponse>().await
}
