use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;

use crate::dataset::vocabulary::SkillVocabulary;

/// Scans normalized resume text for whole-word occurrences of each vocabulary
/// term. Patterns are compiled once at startup; extraction itself is a pure
/// read-only pass, safe to call from any number of workers.
///
/// Terms are escaped and matched literally with a word boundary on each side,
/// so "java" never matches inside "javascript" and multi-word terms like
/// "machine learning" match as a phrase. Known gap carried on purpose: `\b`
/// never fires between punctuation and whitespace, so terms such as "c++" or
/// "c#" cannot match in running text.
#[derive(Debug)]
pub struct SkillExtractor {
    patterns: Vec<(String, Regex)>,
}

impl SkillExtractor {
    pub fn new(vocabulary: &SkillVocabulary) -> Result<Self> {
        Self::from_terms(vocabulary.terms().iter().map(String::as_str))
    }

    pub fn from_terms<'a, I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let mut patterns = Vec::new();
        for term in terms {
            let term = term.trim().to_lowercase();
            if term.is_empty() || !seen.insert(term.clone()) {
                continue;
            }
            let pattern = format!(r"\b{}\b", regex::escape(&term));
            let regex = Regex::new(&pattern)
                .with_context(|| format!("Failed to compile pattern for skill term '{term}'"))?;
            patterns.push((term, regex));
        }
        Ok(Self { patterns })
    }

    /// The distinct vocabulary terms present in `text`. Multiplicity is
    /// discarded; empty text or an empty vocabulary yields an empty set.
    pub fn extract(&self, text: &str) -> HashSet<String> {
        self.patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(text))
            .map(|(term, _)| term.clone())
            .collect()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.patterns.len()
    }
}
