//! Data models for the study API

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use study_types::Highlight;

/// Request to upload a document
///
/// Either `pdf_base64` (a PDF to run text extraction on) or `text`
/// (pre-extracted content) must be provided.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadDocumentRequest {
    pub title: Option<String>,
    #[serde(default)]
    pub pdf_base64: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Document fields exposed over the API (text content stays server-side)
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    pub id: String,
    pub title: String,
    pub pages: u32,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

/// Analysis fields returned alongside a freshly uploaded document
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub summary: String,
    pub key_concepts: Vec<String>,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadDocumentResponse {
    pub document: DocumentResponse,
    pub analysis: AnalysisResponse,
}

/// Request to create a study plan against an uploaded document
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanRequest {
    pub document_id: String,
    pub plan_name: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlanResponse {
    pub plan_id: String,
}

/// Partial update to a daily goal; absent fields keep stored values
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGoalRequest {
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub reflections: Option<serde_json::Value>,
}

/// Request to record a progress entry against a plan
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProgressRequest {
    #[serde(default)]
    pub goal_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub mastery: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalResponse {
    pub id: String,
    pub day_number: u32,
    pub date: NaiveDate,
    pub start_index: usize,
    pub end_index: usize,
    pub excerpt: String,
    pub word_count: usize,
    pub completed: bool,
    pub reflections: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub id: String,
    pub document_id: String,
    pub name: String,
    pub total_days: u32,
    pub start_date: NaiveDate,
    pub deadline: NaiveDate,
    pub daily_word_count: usize,
    pub summary: String,
    pub key_concepts: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub goals: Vec<GoalResponse>,
    pub progress_entries: Vec<ProgressEntryResponse>,
    pub completed_goals: usize,
    pub completion_rate: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressEntryResponse {
    pub id: String,
    pub goal_id: Option<String>,
    pub notes: Option<String>,
    pub mood: Option<String>,
    pub mastery: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Document row stored in the database
#[derive(Debug, Clone, FromRow)]
pub struct DbDocument {
    pub id: String,
    pub title: String,
    pub pages: i64,
    pub text_content: String,
    pub summary: String,
    pub highlights_json: String,
    pub created_at: DateTime<Utc>,
}

/// Study plan row stored in the database
#[derive(Debug, Clone, FromRow)]
pub struct DbPlan {
    pub id: String,
    pub document_id: String,
    pub name: String,
    pub total_days: i64,
    pub start_date: NaiveDate,
    pub deadline: NaiveDate,
    pub daily_word_count: i64,
    pub summary: String,
    pub key_concepts_json: String,
    pub created_at: DateTime<Utc>,
}

/// Progress entry row stored in the database
#[derive(Debug, Clone, FromRow)]
pub struct DbProgressEntry {
    pub id: String,
    pub study_plan_id: String,
    pub goal_id: Option<String>,
    pub notes: Option<String>,
    pub mood: Option<String>,
    pub mastery: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Daily goal row stored in the database
#[derive(Debug, Clone, FromRow)]
pub struct DbGoal {
    pub id: String,
    pub study_plan_id: String,
    pub day_number: i64,
    pub date: NaiveDate,
    pub start_index: i64,
    pub end_index: i64,
    pub content_preview: String,
    pub word_count: i64,
    pub completed: bool,
    pub reflections_json: Option<String>,
}
