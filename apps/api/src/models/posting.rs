use serde::{Deserialize, Serialize};

/// Experience level codes as they appear in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "EN")]
    Entry,
    #[serde(rename = "MI")]
    Mid,
    #[serde(rename = "SE")]
    Senior,
    #[serde(rename = "EX")]
    Executive,
}

impl ExperienceLevel {
    /// Display label used by the experience/employment breakdown chart.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry-level",
            ExperienceLevel::Mid => "Mid-level",
            ExperienceLevel::Senior => "Senior-level",
            ExperienceLevel::Executive => "Executive",
        }
    }
}

/// Employment type codes as they appear in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "FT")]
    FullTime,
    #[serde(rename = "PT")]
    PartTime,
    #[serde(rename = "CT")]
    Contract,
    #[serde(rename = "FL")]
    Freelance,
}

impl EmploymentType {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Freelance => "Freelance",
        }
    }
}

/// One row of the job postings dataset. Loaded once at startup, never mutated.
///
/// `industry` and `required_skills` are nullable in the source data; empty CSV
/// cells deserialize to `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub year: i32,
    pub industry: Option<String>,
    pub job_title: String,
    pub salary_usd: f64,
    pub company_location: String,
    pub company_name: String,
    /// Comma-separated skill list, e.g. "Python, SQL, Docker".
    pub required_skills: Option<String>,
    pub experience_level: ExperienceLevel,
    pub employment_type: EmploymentType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_level_deserializes_from_codes() {
        let level: ExperienceLevel = serde_json::from_str(r#""EN""#).unwrap();
        assert_eq!(level, ExperienceLevel::Entry);
        let level: ExperienceLevel = serde_json::from_str(r#""EX""#).unwrap();
        assert_eq!(level, ExperienceLevel::Executive);
    }

    #[test]
    fn test_experience_level_serializes_to_codes() {
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::Senior).unwrap(),
            r#""SE""#
        );
    }

    #[test]
    fn test_employment_type_deserializes_from_codes() {
        let ty: EmploymentType = serde_json::from_str(r#""FT""#).unwrap();
        assert_eq!(ty, EmploymentType::FullTime);
        let ty: EmploymentType = serde_json::from_str(r#""FL""#).unwrap();
        assert_eq!(ty, EmploymentType::Freelance);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(serde_json::from_str::<ExperienceLevel>(r#""XX""#).is_err());
        assert!(serde_json::from_str::<EmploymentType>(r#""ZZ""#).is_err());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(ExperienceLevel::Entry.label(), "Entry-level");
        assert_eq!(ExperienceLevel::Mid.label(), "Mid-level");
        assert_eq!(ExperienceLevel::Senior.label(), "Senior-level");
        assert_eq!(ExperienceLevel::Executive.label(), "Executive");
        assert_eq!(EmploymentType::FullTime.label(), "Full-time");
        assert_eq!(EmploymentType::PartTime.label(), "Part-time");
        assert_eq!(EmploymentType::Contract.label(), "Contract");
        assert_eq!(EmploymentType::Freelance.label(), "Freelance");
    }
}
