use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const HEALTH_OK: &str = "ok";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VerseView {
    pub reference: String,
    pub text: String,
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PerspectiveView {
    pub title: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MeditationView {
    pub date: String,
    pub reference: String,
    pub summary: String,
    pub application_questions: Vec<String>,
    pub prayer: String,
}

/// A resolved verse with the devotional material shown next to it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub reference: String,
    pub text: String,
    pub summary: String,
    pub perspectives: Vec<PerspectiveView>,
    pub meditation: MeditationView,
}

/// `results` holds at most one entry; `suggestions` is filled only when `results` is empty.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub suggestions: Vec<VerseView>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TodayResponse {
    pub date: String,
    pub reference: String,
    pub summary: String,
    pub application_questions: Vec<String>,
    pub prayer: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MeditateResult {
    pub reference: String,
    pub summary: String,
    pub prompts: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MeditateResponse {
    pub query: String,
    pub result: Option<MeditateResult>,
    pub suggestions: Vec<VerseView>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VersesResponse {
    pub verses: Vec<VerseView>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PerspectivesResponse {
    pub perspectives: Vec<PerspectiveView>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: HEALTH_OK.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}
