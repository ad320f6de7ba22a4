use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::gap;
use crate::document::{self, DocumentFormat};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TextAnalysisRequest {
    pub resume_text: String,
    pub job_title: String,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub job_title: String,
    pub role_category: Option<String>,
    pub resume_word_count: usize,
    pub readiness: f64,
    /// Top required skills for the title, ranked by mention frequency.
    pub required_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Missing skills in suggested learning order (most demanded first).
    pub recommended_skills: Vec<String>,
    pub recommendation: String,
    pub generated_at: DateTime<Utc>,
}

/// POST /api/v1/analysis
///
/// Multipart form: a `resume` file (PDF or DOCX), a `job_title` field, and an
/// optional `role` field echoed back as the role category.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut resume: Option<(Option<String>, Option<String>, Bytes)> = None;
    let mut job_title: Option<String> = None;
    let mut role: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().map(String::from);
        match name.as_deref() {
            Some("resume") => {
                let filename = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume upload: {e}")))?;
                resume = Some((filename, content_type, bytes));
            }
            Some("job_title") => {
                job_title = Some(read_text_field(field).await?);
            }
            Some("role") => {
                role = Some(read_text_field(field).await?);
            }
            _ => {}
        }
    }

    let (filename, content_type, bytes) = resume
        .ok_or_else(|| AppError::Validation("Missing 'resume' file field".to_string()))?;
    let job_title =
        job_title.ok_or_else(|| AppError::Validation("Missing 'job_title' field".to_string()))?;

    let format = DocumentFormat::detect(filename.as_deref(), content_type.as_deref())
        .ok_or_else(|| {
            AppError::Validation("Unsupported resume format; upload a PDF or DOCX".to_string())
        })?;
    let resume_text = document::extract_text(format, &bytes)?;

    let report = run_analysis(&state, &resume_text, &job_title, role)?;
    Ok(Json(report))
}

/// POST /api/v1/analysis/text
///
/// Same analysis for clients that already hold the resume as plain text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<TextAnalysisRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let resume_text = document::normalize::normalize(&req.resume_text);
    let report = run_analysis(&state, &resume_text, &req.job_title, req.role)?;
    Ok(Json(report))
}

fn run_analysis(
    state: &AppState,
    resume_text: &str,
    job_title: &str,
    role: Option<String>,
) -> Result<AnalysisReport, AppError> {
    if resume_text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the resume".to_string(),
        ));
    }
    if !state.jobs.contains_title(job_title) {
        return Err(AppError::NotFound(format!(
            "Job title '{job_title}' is not in the dataset"
        )));
    }

    let required_raw = state.jobs.required_skills_for(job_title);
    let extracted = state.extractor.extract(resume_text);
    let report = gap::score(&required_raw, &extracted, state.config.analysis_top_n);

    info!(
        job_title,
        readiness = report.readiness,
        matched = report.matched.len(),
        missing = report.missing.len(),
        "Analysis complete"
    );

    // Learning order follows required-set rank, not alphabetical display order.
    let recommended_skills: Vec<String> = report
        .required
        .iter()
        .filter(|skill| report.missing.contains(skill))
        .cloned()
        .collect();
    let recommendation = gap::build_recommendation(report.readiness, &report.missing);
    let role_category = role.or_else(|| state.jobs.role_category_for(job_title));

    Ok(AnalysisReport {
        job_title: job_title.to_string(),
        role_category,
        resume_word_count: resume_text.split_whitespace().count(),
        readiness: report.readiness,
        required_skills: report.required,
        matched_skills: report.matched,
        missing_skills: report.missing,
        recommended_skills,
        recommendation,
        generated_at: Utc::now(),
    })
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map(|s| s.trim().to_string())
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::extractor::SkillExtractor;
    use crate::config::Config;
    use crate::dataset::jobs::JobDataset;

    fn test_state() -> AppState {
        let csv = "\
Role Category,Job Title,Skills Required
Data Science,Data Analyst,\"Python, SQL, Excel\"
Data Science,Data Analyst,\"Python, Tableau\"
";
        let jobs = JobDataset::from_reader(csv.as_bytes()).unwrap();
        let extractor =
            SkillExtractor::from_terms(["python", "sql", "excel", "tableau", "rust"]).unwrap();
        AppState {
            jobs: Arc::new(jobs),
            extractor: Arc::new(extractor),
            config: Config {
                job_data_path: String::new(),
                skill_frequency_path: String::new(),
                analysis_top_n: 10,
                search_result_limit: 15,
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    #[test]
    fn test_run_analysis_reports_gap() {
        let state = test_state();
        let report =
            run_analysis(&state, "python developer with sql experience", "Data Analyst", None)
                .unwrap();

        assert_eq!(report.required_skills[0], "python");
        assert_eq!(
            report.matched_skills,
            vec!["python".to_string(), "sql".to_string()]
        );
        assert_eq!(
            report.missing_skills,
            vec!["excel".to_string(), "tableau".to_string()]
        );
        assert_eq!(report.readiness, 50.0);
        assert_eq!(report.resume_word_count, 5);
        assert_eq!(report.role_category, Some("Data Science".to_string()));
    }

    #[test]
    fn test_recommended_skills_follow_required_rank() {
        let state = test_state();
        let report = run_analysis(&state, "python only", "Data Analyst", None).unwrap();
        // python outranks the single-mention tokens; the rest keep row order.
        assert_eq!(
            report.recommended_skills,
            vec![
                "sql".to_string(),
                "excel".to_string(),
                "tableau".to_string()
            ]
        );
    }

    #[test]
    fn test_explicit_role_overrides_dataset_lookup() {
        let state = test_state();
        let report = run_analysis(
            &state,
            "python",
            "Data Analyst",
            Some("Analytics".to_string()),
        )
        .unwrap();
        assert_eq!(report.role_category, Some("Analytics".to_string()));
    }

    #[test]
    fn test_unknown_title_is_not_found() {
        let state = test_state();
        let result = run_analysis(&state, "python", "Quant Trader", None);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_empty_resume_text_is_unprocessable() {
        let state = test_state();
        let result = run_analysis(&state, "", "Data Analyst", None);
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }
}
