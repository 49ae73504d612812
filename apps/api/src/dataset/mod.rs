// Dataset layer: one-time CSV load into an immutable, caller-owned table.
// Handlers share it through `Arc<JobTable>` in AppState; there is no reload
// path; restart the service to pick up a new dataset file.

pub mod loader;

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::models::posting::JobPosting;

/// Preselected filter values the UI applies on first load, kept only where
/// the dataset actually contains them.
const DEFAULT_YEAR: i32 = 2024;
const DEFAULT_INDUSTRY: &str = "Education";

/// The immutable job postings table.
pub struct JobTable {
    postings: Vec<JobPosting>,
}

impl JobTable {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }

    pub fn from_csv(path: &Path) -> Result<Self> {
        Ok(Self::new(loader::load_postings(path)?))
    }

    pub fn rows(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Distinct years present in the dataset, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.postings
            .iter()
            .map(|p| p.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct non-null industries, ascending.
    pub fn industries(&self) -> Vec<String> {
        self.postings
            .iter()
            .filter_map(|p| p.industry.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Everything the UI needs to populate its two multiselects.
    pub fn filter_options(&self) -> FilterOptions {
        let years = self.years();
        let industries = self.industries();

        let default_years = if years.contains(&DEFAULT_YEAR) {
            vec![DEFAULT_YEAR]
        } else {
            vec![]
        };
        let default_industries = if industries.iter().any(|i| i == DEFAULT_INDUSTRY) {
            vec![DEFAULT_INDUSTRY.to_string()]
        } else {
            vec![]
        };

        FilterOptions {
            years,
            industries,
            default_years,
            default_industries,
        }
    }
}

/// Response body for GET /api/v1/filters.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub industries: Vec<String>,
    pub default_years: Vec<i32>,
    pub default_industries: Vec<String>,
}
