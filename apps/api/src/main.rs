mod analysis;
mod config;
mod dataset;
mod document;
mod errors;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::extractor::SkillExtractor;
use crate::config::Config;
use crate::dataset::jobs::JobDataset;
use crate::dataset::vocabulary::SkillVocabulary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skill Gap Radar API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill vocabulary and precompile matching patterns
    let vocabulary = SkillVocabulary::load(&config.skill_frequency_path)?;
    let extractor = Arc::new(SkillExtractor::new(&vocabulary)?);
    info!("Skill vocabulary loaded ({} terms)", extractor.vocabulary_len());

    // Load the job postings table
    let jobs = Arc::new(JobDataset::load(&config.job_data_path)?);
    info!("Job dataset loaded ({} postings)", jobs.len());

    // Build app state
    let state = AppState {
        jobs,
        extractor,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
