// src/message.rs
use serde::{Deserialize, Serialize};

use crate::services::classifier::Route;

/// `message` is optional so an empty JSON body reaches the handler, which
/// answers with the contractual 400 instead of an extractor rejection.
#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(rename = "type")]
    pub kind: Route,
    pub content: String,
}
