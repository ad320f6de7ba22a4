use std::collections::BTreeSet;
use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

/// The closed set of recognized skill names, loaded once at startup from a
/// skill-frequency JSON table. Frequencies are ignored; only the key set
/// matters. Immutable after load.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl SkillVocabulary {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill frequency file '{}'", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Failed to parse skill frequency file '{}'", path.display()))
    }

    /// Parses a JSON object mapping skill name -> frequency. The frequency
    /// values are never inspected, so any JSON value is accepted there.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let table: HashMap<String, serde_json::Value> =
            serde_json::from_str(raw).context("Skill frequency table must be a JSON object")?;

        let terms: BTreeSet<String> = table
            .keys()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Ok(Self {
            terms: terms.into_iter().collect(),
        })
    }

    /// Lower-cased, de-duplicated skill terms in lexicographic order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
