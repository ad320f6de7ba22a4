use std::sync::Arc;

use crate::analysis::extractor::SkillExtractor;
use crate::config::Config;
use crate::dataset::jobs::JobDataset;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is loaded once at startup and read-only
/// afterwards, so handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<JobDataset>,
    /// Skill matcher with patterns precompiled from the vocabulary.
    pub extractor: Arc<SkillExtractor>,
    pub config: Config,
}
