//! CSV loader: one-time parse of the job postings dataset.

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::posting::JobPosting;

/// Reads the dataset CSV at `path` into memory.
///
/// The file must carry a header row naming the `JobPosting` columns; column
/// order is irrelevant. Empty cells in the nullable columns (`industry`,
/// `required_skills`) become `None`. Any malformed row aborts the load;
/// the dataset is static, so a bad row is a packaging error, not user input.
pub fn load_postings(path: &Path) -> Result<Vec<JobPosting>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open dataset at {}", path.display()))?;

    let mut postings = Vec::new();
    for record in reader.deserialize::<JobPosting>() {
        let posting = record.with_context(|| format!("Malformed row in {}", path.display()))?;
        postings.push(posting);
    }

    Ok(postings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::models::posting::{EmploymentType, ExperienceLevel};

    const HEADER: &str = "year,industry,job_title,salary_usd,company_location,company_name,required_skills,experience_level,employment_type";

    fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file
    }

    #[test]
    fn test_load_parses_all_columns() {
        let file = write_csv(&[
            "2024,Education,ML Engineer,100000,Germany,Acme AI,\"Python, SQL\",SE,FT",
        ]);

        let postings = load_postings(file.path()).unwrap();
        assert_eq!(postings.len(), 1);

        let p = &postings[0];
        assert_eq!(p.year, 2024);
        assert_eq!(p.industry.as_deref(), Some("Education"));
        assert_eq!(p.job_title, "ML Engineer");
        assert_eq!(p.salary_usd, 100000.0);
        assert_eq!(p.company_location, "Germany");
        assert_eq!(p.company_name, "Acme AI");
        assert_eq!(p.required_skills.as_deref(), Some("Python, SQL"));
        assert_eq!(p.experience_level, ExperienceLevel::Senior);
        assert_eq!(p.employment_type, EmploymentType::FullTime);
    }

    #[test]
    fn test_empty_nullable_cells_become_none() {
        let file = write_csv(&["2025,,Data Analyst,65000,India,DataCo,,EN,PT"]);

        let postings = load_postings(file.path()).unwrap();
        assert_eq!(postings[0].industry, None);
        assert_eq!(postings[0].required_skills, None);
    }

    #[test]
    fn test_malformed_row_fails_the_load() {
        let file = write_csv(&[
            "2024,Education,ML Engineer,100000,Germany,Acme AI,Python,SE,FT",
            "not-a-year,Education,ML Engineer,100000,Germany,Acme AI,Python,SE,FT",
        ]);

        assert!(load_postings(file.path()).is_err());
    }

    #[test]
    fn test_unknown_enum_code_fails_the_load() {
        let file = write_csv(&["2024,Education,ML Engineer,100000,Germany,Acme AI,Python,SE,XX"]);

        assert!(load_postings(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_postings(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
