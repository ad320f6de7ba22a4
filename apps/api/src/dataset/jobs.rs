use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// One job posting. Rows without a title are dropped at load time; a row
/// without a required-skills value is kept and simply contributes no tokens
/// to gap analysis.
#[derive(Debug, Clone)]
pub struct JobRow {
    pub role_category: Option<String>,
    pub title: String,
    pub required_skills: Option<String>,
}

/// The job-postings table, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct JobDataset {
    rows: Vec<JobRow>,
}

/// Indices of the detected columns. The dataset headers vary between dumps,
/// so columns are found by name heuristics rather than fixed positions.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    role: Option<usize>,
    title: usize,
    skills: usize,
}

fn detect_columns(headers: &csv::StringRecord) -> Result<ColumnMap> {
    let names: Vec<String> = headers
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut role = names
        .iter()
        .position(|n| n.contains("role") && n.contains("category"));
    if role.is_none() {
        role = names.iter().position(|n| n.contains("role"));
    }

    let title = match names.iter().position(|n| n.contains("title")) {
        Some(idx) => idx,
        None => bail!("Could not detect a job-title column in the dataset"),
    };

    let mut skills = names
        .iter()
        .position(|n| n.contains("skill") && n.contains("required"));
    if skills.is_none() {
        skills = names.iter().position(|n| n.contains("skill"));
    }
    let skills = match skills {
        Some(idx) => idx,
        None => bail!("Could not detect a required-skills column in the dataset"),
    };

    Ok(ColumnMap {
        role,
        title,
        skills,
    })
}

impl JobDataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open job dataset '{}'", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("Failed to parse job dataset '{}'", path.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let columns = detect_columns(csv_reader.headers()?)?;

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let title = match non_empty_cell(&record, columns.title) {
                Some(t) => t,
                None => continue,
            };
            rows.push(JobRow {
                role_category: columns.role.and_then(|i| non_empty_cell(&record, i)),
                title,
                required_skills: non_empty_cell(&record, columns.skills),
            });
        }

        Ok(Self { rows })
    }

    /// Distinct role categories whose name contains `query`
    /// (case-insensitive), sorted.
    pub fn search_roles(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        let matches: BTreeSet<&str> = self
            .rows
            .iter()
            .filter_map(|r| r.role_category.as_deref())
            .filter(|r| r.to_lowercase().contains(&query))
            .collect();
        matches.into_iter().map(String::from).collect()
    }

    /// Distinct job titles whose name contains `query` (case-insensitive),
    /// optionally restricted to an exact role category, sorted.
    pub fn search_titles(&self, query: &str, role: Option<&str>) -> Vec<String> {
        let query = query.to_lowercase();
        let matches: BTreeSet<&str> = self
            .rows
            .iter()
            .filter(|r| match role {
                Some(role) => r.role_category.as_deref() == Some(role),
                None => true,
            })
            .map(|r| r.title.as_str())
            .filter(|t| t.to_lowercase().contains(&query))
            .collect();
        matches.into_iter().map(String::from).collect()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.rows.iter().any(|r| r.title == title)
    }

    /// Raw required-skills values for every posting with this exact title,
    /// one entry per row. `None` marks a row whose skills cell was absent.
    pub fn required_skills_for(&self, title: &str) -> Vec<Option<String>> {
        self.rows
            .iter()
            .filter(|r| r.title == title)
            .map(|r| r.required_skills.clone())
            .collect()
    }

    /// Role category recorded on the first posting with this title, if any.
    pub fn role_category_for(&self, title: &str) -> Option<String> {
        self.rows
            .iter()
            .filter(|r| r.title == title)
            .find_map(|r| r.role_category.clone())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn non_empty_cell(record: &csv::StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Role Category,Job Title,Skills Required
Data Science,Data Analyst,\"Python, SQL, Excel\"
Data Science,Data Analyst,\"Python, Tableau\"
Engineering,Backend Engineer,\"Rust, SQL\"
Engineering,Backend Engineer,
,Untitled Role Row,\"Go\"
";

    fn sample_dataset() -> JobDataset {
        JobDataset::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn test_detects_canonical_columns() {
        let ds = sample_dataset();
        assert_eq!(ds.len(), 5);
        assert_eq!(
            ds.role_category_for("Data Analyst"),
            Some("Data Science".to_string())
        );
    }

    #[test]
    fn test_detects_fallback_column_names() {
        let csv = "role,title,skills\nEng,Dev,\"Rust, Go\"\n";
        let ds = JobDataset::from_reader(csv.as_bytes()).unwrap();
        assert!(ds.contains_title("Dev"));
        assert_eq!(
            ds.required_skills_for("Dev"),
            vec![Some("Rust, Go".to_string())]
        );
    }

    #[test]
    fn test_missing_title_column_is_an_error() {
        let csv = "role,skills\nEng,Rust\n";
        assert!(JobDataset::from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_skills_column_is_an_error() {
        let csv = "role,title\nEng,Dev\n";
        assert!(JobDataset::from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_rows_without_title_are_dropped() {
        let csv = "title,skills\n,Rust\nDev,Go\n";
        let ds = JobDataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn test_search_roles_is_distinct_sorted_and_case_insensitive() {
        let ds = sample_dataset();
        assert_eq!(
            ds.search_roles(""),
            vec!["Data Science".to_string(), "Engineering".to_string()]
        );
        assert_eq!(ds.search_roles("data"), vec!["Data Science".to_string()]);
        assert!(ds.search_roles("marketing").is_empty());
    }

    #[test]
    fn test_search_titles_filters_by_role() {
        let ds = sample_dataset();
        assert_eq!(
            ds.search_titles("", None),
            vec![
                "Backend Engineer".to_string(),
                "Data Analyst".to_string(),
                "Untitled Role Row".to_string()
            ]
        );
        assert_eq!(
            ds.search_titles("engineer", Some("Engineering")),
            vec!["Backend Engineer".to_string()]
        );
        assert!(ds.search_titles("analyst", Some("Engineering")).is_empty());
    }

    #[test]
    fn test_required_skills_includes_missing_cells() {
        let ds = sample_dataset();
        let skills = ds.required_skills_for("Backend Engineer");
        assert_eq!(skills, vec![Some("Rust, SQL".to_string()), None]);
    }

    #[test]
    fn test_load_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), SAMPLE).unwrap();
        let ds = JobDataset::load(file.path()).unwrap();
        assert!(ds.contains_title("Data Analyst"));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(JobDataset::load("/nonexistent/jobs.csv").is_err());
    }
}
