// Startup-loaded, read-only data sources: the job-postings CSV and the
// skill-frequency vocabulary JSON. Both are memoized in AppState.

pub mod handlers;
pub mod jobs;
pub mod vocabulary;
