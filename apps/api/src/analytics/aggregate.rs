//! The filter-aggregate pipeline: pure summary operations over the postings
//! table. Each function takes the full dataset plus the user's selection and
//! returns a small typed table, recomputed per request.
//!
//! Every result is bounded, either by an explicit top-N cap or by the cardinality
//! of its grouping key, and deterministically ordered (primary measure
//! descending, then label ascending).

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::analytics::filter::FilterSelection;
use crate::errors::AppError;
use crate::models::posting::{EmploymentType, ExperienceLevel, JobPosting};

pub const TITLE_CAP: usize = 10;
pub const LOCATION_CAP: usize = 5;
pub const SKILL_CAP: usize = 15;
pub const COMPANY_CAP: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Summary table rows
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct TitleSalaryRow {
    pub job_title: String,
    pub mean_salary_usd: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationCountRow {
    pub company_location: String,
    pub job_postings: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCountRow {
    pub skill: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobCountSlice {
    pub category: String,
    pub job_count: u64,
}

/// Selected-vs-remaining split for the selected years.
/// Invariant: `selected_total + remaining_total == overall_total`.
#[derive(Debug, Clone, Serialize)]
pub struct JobCountBreakdown {
    pub slices: Vec<JobCountSlice>,
    pub selected_total: u64,
    pub remaining_total: u64,
    pub overall_total: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyTimelineRow {
    pub year: i32,
    pub company_name: String,
    pub industry: String,
    pub job_postings: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEmploymentRow {
    pub experience_level: ExperienceLevel,
    pub employment_type: EmploymentType,
    pub job_count: u64,
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

/// Mean salary per job title over the filtered rows, highest first, top 10.
pub fn top_paying_titles(dataset: &[JobPosting], selection: &FilterSelection) -> Vec<TitleSalaryRow> {
    let mut sums: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for posting in selection.apply(dataset) {
        let entry = sums.entry(posting.job_title.as_str()).or_insert((0.0, 0));
        entry.0 += posting.salary_usd;
        entry.1 += 1;
    }

    let mut rows: Vec<TitleSalaryRow> = sums
        .into_iter()
        .map(|(title, (sum, count))| TitleSalaryRow {
            job_title: title.to_string(),
            mean_salary_usd: sum / count as f64,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.mean_salary_usd
            .partial_cmp(&a.mean_salary_usd)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.job_title.cmp(&b.job_title))
    });
    rows.truncate(TITLE_CAP);
    rows
}

/// Posting count per company location over the filtered rows, top 5.
/// The "either filter empty → sentinel" rule lives in the chart builder;
/// this stays a plain ranking.
pub fn top_hiring_locations(
    dataset: &[JobPosting],
    selection: &FilterSelection,
) -> Vec<LocationCountRow> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for posting in selection.apply(dataset) {
        *counts.entry(posting.company_location.as_str()).or_insert(0) += 1;
    }

    let mut rows: Vec<LocationCountRow> = counts
        .into_iter()
        .map(|(location, count)| LocationCountRow {
            company_location: location.to_string(),
            job_postings: count,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.job_postings
            .cmp(&a.job_postings)
            .then_with(|| a.company_location.cmp(&b.company_location))
    });
    rows.truncate(LOCATION_CAP);
    rows
}

/// Occurrence count per skill token over the filtered rows, top 15.
///
/// Tokens come from splitting `required_skills` on commas; each token is
/// trimmed and lowercased, empty tokens are dropped. Tokens are counted per
/// occurrence, so counts sum to the total token count across the rows.
pub fn skill_demand(dataset: &[JobPosting], selection: &FilterSelection) -> Vec<SkillCountRow> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for posting in selection.apply(dataset) {
        let Some(skills) = posting.required_skills.as_deref() else {
            continue;
        };
        for token in skills.split(',') {
            let token = token.trim().to_lowercase();
            if token.is_empty() {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<SkillCountRow> = counts
        .into_iter()
        .map(|(skill, count)| SkillCountRow { skill, count })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
    rows.truncate(SKILL_CAP);
    rows
}

/// Selected-vs-other-industries split within the selected years.
///
/// Requires a year selection. With industries selected, the year-filtered set
/// splits into two slices (the "Other Industries" slice is omitted when its
/// remainder is zero); with none, a single "All Industries" slice covers the
/// whole year-filtered set.
pub fn job_count_breakdown(
    dataset: &[JobPosting],
    selection: &FilterSelection,
) -> Result<JobCountBreakdown, AppError> {
    if !selection.has_years() {
        return Err(AppError::MissingFilter(
            "Select at least one year".to_string(),
        ));
    }

    let year_only = FilterSelection::new(selection.years.iter().copied(), []);
    let year_rows = year_only.apply(dataset);
    let overall_total = year_rows.len() as u64;

    if !selection.has_industries() {
        return Ok(JobCountBreakdown {
            slices: vec![JobCountSlice {
                category: "All Industries".to_string(),
                job_count: overall_total,
            }],
            selected_total: overall_total,
            remaining_total: 0,
            overall_total,
        });
    }

    let selected_total = year_rows.iter().filter(|p| selection.matches(p)).count() as u64;
    let remaining_total = overall_total - selected_total;

    let mut slices = vec![JobCountSlice {
        category: "Selected Industries".to_string(),
        job_count: selected_total,
    }];
    if remaining_total > 0 {
        slices.push(JobCountSlice {
            category: "Other Industries".to_string(),
            job_count: remaining_total,
        });
    }

    Ok(JobCountBreakdown {
        slices,
        selected_total,
        remaining_total,
        overall_total,
    })
}

/// Posting counts per (year, company, industry) restricted to the ten
/// (year, company) pairs with the highest totals.
///
/// Requires a year selection. Postings with no industry are excluded from the
/// grouping, matching how the source data treats unlabeled rows.
pub fn top_companies_over_time(
    dataset: &[JobPosting],
    selection: &FilterSelection,
) -> Result<Vec<CompanyTimelineRow>, AppError> {
    if !selection.has_years() {
        return Err(AppError::MissingFilter(
            "Select at least one year".to_string(),
        ));
    }

    let mut counts: BTreeMap<(i32, &str, &str), u64> = BTreeMap::new();
    for posting in selection.apply(dataset) {
        let Some(industry) = posting.industry.as_deref() else {
            continue;
        };
        *counts
            .entry((posting.year, posting.company_name.as_str(), industry))
            .or_insert(0) += 1;
    }

    let mut totals: BTreeMap<(i32, &str), u64> = BTreeMap::new();
    for (&(year, company, _), &count) in &counts {
        *totals.entry((year, company)).or_insert(0) += count;
    }

    let mut ranked: Vec<((i32, &str), u64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| a.0 .0.cmp(&b.0 .0))
            .then_with(|| a.0 .1.cmp(b.0 .1))
    });
    ranked.truncate(COMPANY_CAP);

    // Rejoin: per-industry rows for the surviving (year, company) pairs only,
    // in ranking order.
    let mut rows = Vec::new();
    for ((year, company), _) in ranked {
        for (&(y, c, industry), &count) in &counts {
            if y == year && c == company {
                rows.push(CompanyTimelineRow {
                    year,
                    company_name: company.to_string(),
                    industry: industry.to_string(),
                    job_postings: count,
                });
            }
        }
    }
    Ok(rows)
}

/// Posting counts per (experience level, employment type) over the filtered
/// rows, in code order. At most 16 rows (4 levels x 4 types).
pub fn experience_employment(
    dataset: &[JobPosting],
    selection: &FilterSelection,
) -> Vec<ExperienceEmploymentRow> {
    let mut counts: BTreeMap<(ExperienceLevel, EmploymentType), u64> = BTreeMap::new();
    for posting in selection.apply(dataset) {
        *counts
            .entry((posting.experience_level, posting.employment_type))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(
            |((experience_level, employment_type), job_count)| ExperienceEmploymentRow {
                experience_level,
                employment_type,
                job_count,
            },
        )
        .collect()
}
