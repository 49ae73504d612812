//! Filter selection: the user's multiselect state applied as one row predicate.
//!
//! Policy: an empty selection set places no constraint on its dimension.
//! Clearing a multiselect means "don't filter on this", never "show nothing".
//! Operations that need stricter behavior (the locations sentinel, the
//! year-required charts) layer their own guards on top in `aggregate`.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::posting::JobPosting;

#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    pub years: BTreeSet<i32>,
    pub industries: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new(
        years: impl IntoIterator<Item = i32>,
        industries: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            years: years.into_iter().collect(),
            industries: industries.into_iter().collect(),
        }
    }

    pub fn has_years(&self) -> bool {
        !self.years.is_empty()
    }

    pub fn has_industries(&self) -> bool {
        !self.industries.is_empty()
    }

    /// Row predicate. A posting with a null industry never matches an active
    /// industry selection.
    pub fn matches(&self, posting: &JobPosting) -> bool {
        let year_ok = self.years.is_empty() || self.years.contains(&posting.year);
        let industry_ok = self.industries.is_empty()
            || posting
                .industry
                .as_deref()
                .is_some_and(|i| self.industries.contains(i));
        year_ok && industry_ok
    }

    pub fn apply<'a>(&self, rows: &'a [JobPosting]) -> Vec<&'a JobPosting> {
        rows.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Query parameters shared by all chart endpoints:
/// `?years=2024,2025&industries=Education,Retail`
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub years: Option<String>,
    pub industries: Option<String>,
}

impl FilterQuery {
    pub fn into_selection(self) -> Result<FilterSelection, AppError> {
        let mut years = BTreeSet::new();
        for token in list_tokens(self.years.as_deref()) {
            let year = token
                .parse::<i32>()
                .map_err(|_| AppError::Validation(format!("Invalid year value '{token}'")))?;
            years.insert(year);
        }

        let industries = list_tokens(self.industries.as_deref())
            .map(str::to_string)
            .collect();

        Ok(FilterSelection { years, industries })
    }
}

/// Splits a comma-separated query value into trimmed, non-empty tokens.
fn list_tokens(raw: Option<&str>) -> impl Iterator<Item = &str> + '_ {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::posting::{EmploymentType, ExperienceLevel};

    fn make_posting(year: i32, industry: Option<&str>) -> JobPosting {
        JobPosting {
            year,
            industry: industry.map(str::to_string),
            job_title: "ML Engineer".to_string(),
            salary_usd: 100_000.0,
            company_location: "Germany".to_string(),
            company_name: "Acme AI".to_string(),
            required_skills: None,
            experience_level: ExperienceLevel::Senior,
            employment_type: EmploymentType::FullTime,
        }
    }

    #[test]
    fn test_empty_selection_matches_everything() {
        let selection = FilterSelection::default();
        assert!(selection.matches(&make_posting(2024, Some("Education"))));
        assert!(selection.matches(&make_posting(2019, None)));
    }

    #[test]
    fn test_year_and_industry_are_anded() {
        let selection =
            FilterSelection::new([2024], ["Education".to_string()]);
        assert!(selection.matches(&make_posting(2024, Some("Education"))));
        assert!(!selection.matches(&make_posting(2025, Some("Education"))));
        assert!(!selection.matches(&make_posting(2024, Some("Retail"))));
    }

    #[test]
    fn test_null_industry_never_matches_active_industry_filter() {
        let selection = FilterSelection::new([], ["Education".to_string()]);
        assert!(!selection.matches(&make_posting(2024, None)));
    }

    #[test]
    fn test_empty_industry_set_is_unconstrained() {
        let selection = FilterSelection::new([2024], []);
        assert!(selection.matches(&make_posting(2024, None)));
        assert!(selection.matches(&make_posting(2024, Some("Retail"))));
    }

    #[test]
    fn test_apply_keeps_matching_rows_only() {
        let rows = vec![
            make_posting(2024, Some("Education")),
            make_posting(2025, Some("Education")),
            make_posting(2024, Some("Retail")),
        ];
        let selection = FilterSelection::new([2024], []);
        assert_eq!(selection.apply(&rows).len(), 2);
    }

    #[test]
    fn test_query_parses_comma_separated_lists() {
        let query = FilterQuery {
            years: Some("2024, 2025".to_string()),
            industries: Some("Education,Retail".to_string()),
        };
        let selection = query.into_selection().unwrap();
        assert_eq!(selection.years.len(), 2);
        assert!(selection.years.contains(&2024));
        assert!(selection.industries.contains("Retail"));
    }

    #[test]
    fn test_query_skips_empty_tokens() {
        let query = FilterQuery {
            years: Some("2024,,".to_string()),
            industries: Some(" , ".to_string()),
        };
        let selection = query.into_selection().unwrap();
        assert_eq!(selection.years.len(), 1);
        assert!(selection.industries.is_empty());
    }

    #[test]
    fn test_query_rejects_malformed_year() {
        let query = FilterQuery {
            years: Some("twenty-24".to_string()),
            industries: None,
        };
        assert!(matches!(
            query.into_selection(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_absent_params_mean_no_constraint() {
        let selection = FilterQuery::default().into_selection().unwrap();
        assert!(!selection.has_years());
        assert!(!selection.has_industries());
    }
}
