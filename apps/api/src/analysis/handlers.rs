use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::report::AnalysisReport;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub raw_text: String,
}

#[derive(Serialize)]
pub struct FieldCatalogEntry {
    pub field: String,
    pub skills: Vec<String>,
    pub courses: Vec<String>,
}

/// POST /api/v1/analyze
/// Blank text is analyzed like any other document (score 15, no fields found).
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = state.analysis.analyze(req.raw_text).await?;
    info!(
        analysis_id = %report.analysis_id,
        total_score = report.total_score,
        cached = report.cached,
        "Résumé analyzed"
    );
    Ok(Json(report))
}

/// POST /api/v1/analyze/upload
/// Multipart body with a PDF in the `file` field.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut pdf: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read 'file' field: {e}")))?;
            pdf = Some(bytes.to_vec());
            break;
        }
    }

    let pdf = pdf.ok_or_else(|| {
        AppError::Validation("Multipart field 'file' with a PDF document is required".to_string())
    })?;

    let raw_text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
        .await
        .map_err(|e| {
            // pdf-extract panics on some malformed documents
            if e.is_panic() {
                AppError::UnprocessableEntity("Could not read PDF: parser aborted".to_string())
            } else {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}"))
            }
        })?
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?;

    handle_analyze(State(state), Json(AnalyzeRequest { raw_text })).await
}

/// GET /api/v1/catalog/fields
pub async fn handle_list_fields(State(state): State<AppState>) -> Json<Vec<FieldCatalogEntry>> {
    Json(
        state
            .tables
            .fields
            .iter()
            .map(|f| FieldCatalogEntry {
                field: f.name.clone(),
                skills: f.skills.clone(),
                courses: f.courses.clone(),
            })
            .collect(),
    )
}
