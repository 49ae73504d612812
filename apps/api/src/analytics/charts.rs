//! Chart specifications: the JSON contract handed to the rendering layer.
//!
//! The service never renders anything; it emits these small declarative specs
//! (bar, grouped bar, pie, animated bar) and the single-page UI draws them.

use serde::Serialize;

use crate::analytics::aggregate::{
    CompanyTimelineRow, ExperienceEmploymentRow, JobCountBreakdown, LocationCountRow,
    SkillCountRow, TitleSalaryRow,
};
use crate::models::posting::{EmploymentType, ExperienceLevel};

/// Donut palette for the job-count split: green for the selection, grey for
/// the remainder.
const JOB_COUNT_COLORS: [&str; 2] = ["#00cc96", "#d3d3d3"];

// ────────────────────────────────────────────────────────────────────────────
// Spec types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarChart {
    pub title: String,
    pub orientation: Orientation,
    pub value_title: String,
    pub label_title: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
    /// 0.0 for a solid pie, 0.5 for a donut.
    pub hole: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

/// One series per legend entry; `values` align index-wise with `groups`.
#[derive(Debug, Clone, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupedBarChart {
    pub title: String,
    pub groups: Vec<String>,
    pub series: Vec<BarSeries>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarSegment {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StackedBar {
    pub label: String,
    pub segments: Vec<BarSegment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineFrame {
    pub year: i32,
    pub bars: Vec<StackedBar>,
}

/// Bar chart animated over one frame per year.
#[derive(Debug, Clone, Serialize)]
pub struct AnimatedBarChart {
    pub title: String,
    pub frames: Vec<TimelineFrame>,
}

// ────────────────────────────────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────────────────────────────────

pub fn salary_ranking_chart(rows: &[TitleSalaryRow]) -> BarChart {
    BarChart {
        title: "Top 10 High-Paying Job Titles".to_string(),
        orientation: Orientation::Horizontal,
        value_title: "Mean Salary (USD)".to_string(),
        label_title: "Job Title".to_string(),
        bars: rows
            .iter()
            .map(|r| Bar {
                label: r.job_title.clone(),
                value: r.mean_salary_usd,
            })
            .collect(),
    }
}

pub fn location_chart(rows: &[LocationCountRow]) -> PieChart {
    PieChart {
        title: "Top 5 Hiring Company Locations".to_string(),
        slices: rows
            .iter()
            .map(|r| PieSlice {
                label: r.company_location.clone(),
                value: r.job_postings as f64,
            })
            .collect(),
        hole: 0.0,
        colors: None,
    }
}

/// Placeholder pie shown when either filter set is empty, so the rendering
/// layer always has exactly one well-defined slice to draw.
pub fn location_chart_sentinel() -> PieChart {
    PieChart {
        title: "Top 5 Hiring Company Locations".to_string(),
        slices: vec![PieSlice {
            label: "No data to display".to_string(),
            value: 1.0,
        }],
        hole: 0.0,
        colors: None,
    }
}

pub fn skill_chart(rows: &[SkillCountRow]) -> BarChart {
    BarChart {
        title: "Most Required Skills".to_string(),
        orientation: Orientation::Horizontal,
        value_title: "Count".to_string(),
        label_title: "Skill".to_string(),
        bars: rows
            .iter()
            .map(|r| Bar {
                label: r.skill.clone(),
                value: r.count as f64,
            })
            .collect(),
    }
}

pub fn job_count_chart(breakdown: &JobCountBreakdown) -> PieChart {
    PieChart {
        title: "Filtered Job Count".to_string(),
        slices: breakdown
            .slices
            .iter()
            .map(|s| PieSlice {
                label: s.category.clone(),
                value: s.job_count as f64,
            })
            .collect(),
        hole: 0.5,
        colors: Some(JOB_COUNT_COLORS.iter().map(|c| c.to_string()).collect()),
    }
}

/// Groups the timeline rows into one frame per year, one stacked bar per
/// company within its frame. Row order (ranking, then industry) is preserved
/// inside each frame.
pub fn company_timeline_chart(rows: &[CompanyTimelineRow]) -> AnimatedBarChart {
    let mut frames: Vec<TimelineFrame> = Vec::new();
    for row in rows {
        let idx = frames
            .iter()
            .position(|f| f.year == row.year)
            .unwrap_or_else(|| {
                frames.push(TimelineFrame {
                    year: row.year,
                    bars: Vec::new(),
                });
                frames.len() - 1
            });
        let frame = &mut frames[idx];

        let segment = BarSegment {
            name: row.industry.clone(),
            value: row.job_postings,
        };
        match frame.bars.iter_mut().find(|b| b.label == row.company_name) {
            Some(bar) => bar.segments.push(segment),
            None => frame.bars.push(StackedBar {
                label: row.company_name.clone(),
                segments: vec![segment],
            }),
        }
    }
    frames.sort_by_key(|f| f.year);

    AnimatedBarChart {
        title: "Top Hiring Companies Over The Years".to_string(),
        frames,
    }
}

pub fn experience_chart(rows: &[ExperienceEmploymentRow]) -> GroupedBarChart {
    const LEVELS: [ExperienceLevel; 4] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Executive,
    ];
    const TYPES: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
        EmploymentType::Freelance,
    ];

    let levels: Vec<ExperienceLevel> = LEVELS
        .into_iter()
        .filter(|l| rows.iter().any(|r| r.experience_level == *l))
        .collect();

    let series = TYPES
        .into_iter()
        .filter(|t| rows.iter().any(|r| r.employment_type == *t))
        .map(|t| BarSeries {
            name: t.label().to_string(),
            values: levels
                .iter()
                .map(|l| {
                    rows.iter()
                        .filter(|r| r.experience_level == *l && r.employment_type == t)
                        .map(|r| r.job_count)
                        .sum()
                })
                .collect(),
        })
        .collect();

    GroupedBarChart {
        title: "Employment Types by Experience Level".to_string(),
        groups: levels.iter().map(|l| l.label().to_string()).collect(),
        series,
    }
}
