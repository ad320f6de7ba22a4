// Skill-gap analysis core: whole-word skill extraction and gap scoring.
// Both are pure, stateless passes over startup-loaded data — handlers wire
// them to the HTTP surface.

pub mod extractor;
pub mod gap;
pub mod handlers;
