//! HTTP handlers for the study API

use axum::{
    extract::{Path, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use analysis_engine::AnalysisEngine;
use plan_engine::{build_plan, calendar, progress};

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

const MAX_PDF_BYTES: usize = 15 * 1024 * 1024; // 15 MB
const MIN_TEXT_CHARS: usize = 100;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Upload a document, extract its text, and analyze it
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UploadDocumentRequest>,
) -> Result<Json<UploadDocumentResponse>, ApiError> {
    let (text, pages) = match (&req.pdf_base64, &req.text) {
        (Some(b64), _) => {
            let pdf_data = BASE64
                .decode(b64)
                .map_err(|e| ApiError::InvalidRequest(format!("Invalid PDF base64: {}", e)))?;

            if pdf_data.len() > MAX_PDF_BYTES {
                return Err(ApiError::InvalidRequest(
                    "File exceeds the 15MB limit.".to_string(),
                ));
            }

            let pages = page_count(&pdf_data)?;
            let text = pdf_extract::extract_text_from_mem(&pdf_data)
                .map_err(|e| ApiError::InvalidRequest(format!("Failed to extract text: {}", e)))?;
            (text, pages)
        }
        (None, Some(text)) => (text.clone(), 0),
        (None, None) => {
            return Err(ApiError::InvalidRequest(
                "A PDF or text payload is required.".to_string(),
            ));
        }
    };

    if text.trim().chars().count() < MIN_TEXT_CHARS {
        return Err(ApiError::InvalidRequest(
            "Unable to extract enough text from this document.".to_string(),
        ));
    }

    let analysis = AnalysisEngine::new().analyze(&text);

    let document_id = Uuid::new_v4().to_string();
    let title = req
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("Untitled document")
        .to_string();
    let now = Utc::now();

    let highlights_json = serde_json::to_string(&analysis.highlights)
        .map_err(|e| ApiError::Internal(e.into()))?;

    sqlx::query(
        r#"
        INSERT INTO documents (id, title, pages, text_content, summary, highlights_json, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&document_id)
    .bind(&title)
    .bind(pages as i64)
    .bind(&text)
    .bind(&analysis.summary)
    .bind(&highlights_json)
    .bind(now.to_rfc3339())
    .execute(&state.db)
    .await?;

    tracing::info!(
        "Analyzed document {}: {} words, {} highlights",
        document_id,
        analysis.words.len(),
        analysis.highlights.len()
    );

    Ok(Json(UploadDocumentResponse {
        document: DocumentResponse {
            id: document_id,
            title,
            pages,
            summary: analysis.summary.clone(),
            created_at: now,
        },
        analysis: AnalysisResponse {
            summary: analysis.summary,
            key_concepts: analysis.key_concepts,
            highlights: analysis.highlights,
        },
    }))
}

/// List uploaded documents, newest first
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DocumentResponse>>, ApiError> {
    let documents: Vec<DbDocument> = sqlx::query_as(
        r#"
        SELECT id, title, pages, text_content, summary, highlights_json, created_at
        FROM documents
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    let responses = documents
        .into_iter()
        .map(|doc| DocumentResponse {
            id: doc.id,
            title: doc.title,
            pages: doc.pages as u32,
            summary: doc.summary,
            created_at: doc.created_at,
        })
        .collect();

    Ok(Json(responses))
}

/// Create a study plan: schedule the document's words across the days
/// remaining until the deadline
pub async fn create_plan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePlanRequest>,
) -> Result<Json<CreatePlanResponse>, ApiError> {
    let name_len = req.plan_name.trim().chars().count();
    if !(3..=80).contains(&name_len) {
        return Err(ApiError::InvalidRequest(
            "Plan name must be between 3 and 80 characters.".to_string(),
        ));
    }

    let document: Option<DbDocument> = sqlx::query_as(
        r#"
        SELECT id, title, pages, text_content, summary, highlights_json, created_at
        FROM documents
        WHERE id = ?
        "#,
    )
    .bind(&req.document_id)
    .fetch_optional(&state.db)
    .await?;

    let document = document.ok_or_else(|| ApiError::DocumentNotFound(req.document_id.clone()))?;

    let start = req.start_date.unwrap_or_else(|| Utc::now().date_naive());
    let total_days = calendar::total_days_between(start, req.deadline);

    let analysis = AnalysisEngine::new().analyze(&document.text_content);
    let goals = build_plan(&analysis.words, total_days);
    let daily_word_count = progress::daily_word_count(analysis.words.len(), total_days);

    let plan_id = Uuid::new_v4().to_string();
    let now = Utc::now();
    let key_concepts_json = serde_json::to_string(&analysis.key_concepts)
        .map_err(|e| ApiError::Internal(e.into()))?;

    let mut tx = state.db.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO study_plans
            (id, document_id, name, total_days, start_date, deadline,
             daily_word_count, summary, key_concepts_json, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&plan_id)
    .bind(&document.id)
    .bind(req.plan_name.trim())
    .bind(total_days as i64)
    .bind(start)
    .bind(req.deadline)
    .bind(daily_word_count as i64)
    .bind(&analysis.summary)
    .bind(&key_concepts_json)
    .bind(now.to_rfc3339())
    .execute(&mut *tx)
    .await?;

    for goal in &goals {
        sqlx::query(
            r#"
            INSERT INTO daily_goals
                (id, study_plan_id, day_number, date, start_index, end_index,
                 content_preview, word_count, completed)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&plan_id)
        .bind(goal.day_number as i64)
        .bind(calendar::date_for_day(start, goal.day_number))
        .bind(goal.start_index as i64)
        .bind(goal.end_index as i64)
        .bind(&goal.excerpt)
        .bind(goal.word_count as i64)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        "Created plan {} over {} days for document {}",
        plan_id,
        total_days,
        document.id
    );

    Ok(Json(CreatePlanResponse { plan_id }))
}

/// List study plans with their goals, progress entries, and completion
/// statistics
pub async fn list_plans(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlanResponse>>, ApiError> {
    let plans: Vec<DbPlan> = sqlx::query_as(
        r#"
        SELECT id, document_id, name, total_days, start_date, deadline,
               daily_word_count, summary, key_concepts_json, created_at
        FROM study_plans
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    let mut responses = Vec::with_capacity(plans.len());
    for plan in plans {
        responses.push(plan_response(&state, plan).await?);
    }

    Ok(Json(responses))
}

/// Fetch one study plan with its goals, progress entries, and completion
/// statistics
pub async fn get_plan(
    State(state): State<Arc<AppState>>,
    Path(plan_id): Path<String>,
) -> Result<Json<PlanResponse>, ApiError> {
    let plan: Option<DbPlan> = sqlx::query_as(
        r#"
        SELECT id, document_id, name, total_days, start_date, deadline,
               daily_word_count, summary, key_concepts_json, created_at
        FROM study_plans
        WHERE id = ?
        "#,
    )
    .bind(&plan_id)
    .fetch_optional(&state.db)
    .await?;

    let plan = plan.ok_or_else(|| ApiError::PlanNotFound(plan_id))?;

    Ok(Json(plan_response(&state, plan).await?))
}

/// Assemble a plan response: goals in day order, progress entries newest
/// first, completion statistics over the goal flags
async fn plan_response(state: &AppState, plan: DbPlan) -> Result<PlanResponse, ApiError> {
    let goals: Vec<DbGoal> = sqlx::query_as(
        r#"
        SELECT id, study_plan_id, day_number, date, start_index, end_index,
               content_preview, word_count, completed, reflections_json
        FROM daily_goals
        WHERE study_plan_id = ?
        ORDER BY day_number ASC
        "#,
    )
    .bind(&plan.id)
    .fetch_all(&state.db)
    .await?;

    let entries: Vec<DbProgressEntry> = sqlx::query_as(
        r#"
        SELECT id, study_plan_id, goal_id, notes, mood, mastery, created_at
        FROM progress_entries
        WHERE study_plan_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(&plan.id)
    .fetch_all(&state.db)
    .await?;

    let completed_flags: Vec<bool> = goals.iter().map(|g| g.completed).collect();
    let stats = progress::plan_progress(&completed_flags);

    let key_concepts: Vec<String> = serde_json::from_str(&plan.key_concepts_json)
        .map_err(|e| ApiError::Internal(e.into()))?;

    Ok(PlanResponse {
        id: plan.id,
        document_id: plan.document_id,
        name: plan.name,
        total_days: plan.total_days as u32,
        start_date: plan.start_date,
        deadline: plan.deadline,
        daily_word_count: plan.daily_word_count as usize,
        summary: plan.summary,
        key_concepts,
        created_at: plan.created_at,
        goals: goals.into_iter().map(goal_response).collect::<Result<_, _>>()?,
        progress_entries: entries.into_iter().map(progress_entry_response).collect(),
        completed_goals: stats.completed_goals,
        completion_rate: stats.completion_rate,
    })
}

/// Update a daily goal's completion flag or reflections
pub async fn update_goal(
    State(state): State<Arc<AppState>>,
    Path((plan_id, goal_id)): Path<(String, String)>,
    Json(req): Json<UpdateGoalRequest>,
) -> Result<Json<GoalResponse>, ApiError> {
    let goal: Option<DbGoal> = sqlx::query_as(
        r#"
        SELECT g.id, g.study_plan_id, g.day_number, g.date, g.start_index, g.end_index,
               g.content_preview, g.word_count, g.completed, g.reflections_json
        FROM daily_goals g
        JOIN study_plans p ON p.id = g.study_plan_id
        WHERE g.id = ? AND p.id = ?
        "#,
    )
    .bind(&goal_id)
    .bind(&plan_id)
    .fetch_optional(&state.db)
    .await?;

    let goal = goal.ok_or_else(|| ApiError::GoalNotFound(goal_id.clone()))?;

    // Absent fields keep their stored values
    let completed = req.completed.unwrap_or(goal.completed);
    let reflections_json = match &req.reflections {
        Some(value) => Some(serde_json::to_string(value).map_err(|e| ApiError::Internal(e.into()))?),
        None => goal.reflections_json.clone(),
    };

    sqlx::query(
        r#"
        UPDATE daily_goals
        SET completed = ?, reflections_json = ?
        WHERE id = ?
        "#,
    )
    .bind(completed)
    .bind(&reflections_json)
    .bind(&goal_id)
    .execute(&state.db)
    .await?;

    goal_response(DbGoal {
        completed,
        reflections_json,
        ..goal
    })
    .map(Json)
}

/// Record a progress entry against a plan
pub async fn add_progress(
    State(state): State<Arc<AppState>>,
    Path(plan_id): Path<String>,
    Json(req): Json<CreateProgressRequest>,
) -> Result<Json<ProgressEntryResponse>, ApiError> {
    if let Some(notes) = &req.notes {
        if notes.chars().count() > 1000 {
            return Err(ApiError::InvalidRequest(
                "Notes are limited to 1000 characters.".to_string(),
            ));
        }
    }
    if let Some(mood) = &req.mood {
        if mood.chars().count() > 40 {
            return Err(ApiError::InvalidRequest(
                "Mood is limited to 40 characters.".to_string(),
            ));
        }
    }
    if let Some(mastery) = req.mastery {
        if !(0..=100).contains(&mastery) {
            return Err(ApiError::InvalidRequest(
                "Mastery must be between 0 and 100.".to_string(),
            ));
        }
    }

    let plan_exists: Option<(String,)> = sqlx::query_as("SELECT id FROM study_plans WHERE id = ?")
        .bind(&plan_id)
        .fetch_optional(&state.db)
        .await?;
    if plan_exists.is_none() {
        return Err(ApiError::PlanNotFound(plan_id));
    }

    if let Some(goal_id) = &req.goal_id {
        let goal_exists: Option<(String,)> =
            sqlx::query_as("SELECT id FROM daily_goals WHERE id = ? AND study_plan_id = ?")
                .bind(goal_id)
                .bind(&plan_id)
                .fetch_optional(&state.db)
                .await?;
        if goal_exists.is_none() {
            return Err(ApiError::GoalNotFound(goal_id.clone()));
        }
    }

    let entry_id = Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO progress_entries (id, study_plan_id, goal_id, notes, mood, mastery, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&entry_id)
    .bind(&plan_id)
    .bind(&req.goal_id)
    .bind(&req.notes)
    .bind(&req.mood)
    .bind(req.mastery)
    .bind(now.to_rfc3339())
    .execute(&state.db)
    .await?;

    Ok(Json(ProgressEntryResponse {
        id: entry_id,
        goal_id: req.goal_id,
        notes: req.notes,
        mood: req.mood,
        mastery: req.mastery,
        created_at: now,
    }))
}

/// Parse PDF bytes and return page count
fn page_count(bytes: &[u8]) -> Result<u32, ApiError> {
    let doc = lopdf::Document::load_mem(bytes)
        .map_err(|e| ApiError::InvalidRequest(format!("Failed to parse PDF: {}", e)))?;
    Ok(doc.get_pages().len() as u32)
}

fn progress_entry_response(entry: DbProgressEntry) -> ProgressEntryResponse {
    ProgressEntryResponse {
        id: entry.id,
        goal_id: entry.goal_id,
        notes: entry.notes,
        mood: entry.mood,
        mastery: entry.mastery,
        created_at: entry.created_at,
    }
}

fn goal_response(goal: DbGoal) -> Result<GoalResponse, ApiError> {
    let reflections = goal
        .reflections_json
        .as_deref()
        .map(serde_json::from_str)
        .transpose()
        .map_err(|e: serde_json::Error| ApiError::Internal(e.into()))?;

    Ok(GoalResponse {
        id: goal.id,
        day_number: goal.day_number as u32,
        date: goal.date,
        start_index: goal.start_index as usize,
        end_index: goal.end_index as usize,
        excerpt: goal.content_preview,
        word_count: goal.word_count as usize,
        completed: goal.completed,
        reflections,
    })
}
