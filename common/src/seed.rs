//! Built-in postings a fresh board starts with.

use crate::job::Job;

const SEED_JOBS_JSON: &str = include_str!("../data/seed_jobs.json");

/// Parses the embedded seed postings (ids 1 through 6)
pub fn seed_jobs() -> Result<Vec<Job>, serde_json::Error> {
    serde_json::from_str(SEED_JOBS_JSON)
}

/// Parses a job list in the same JSON shape as the seed file
pub fn jobs_from_json(content: &str) -> Result<Vec<Job>, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{JobId, JobType};

    #[test]
    fn test_seed_jobs_parse() {
        let jobs = seed_jobs().unwrap();
        assert_eq!(jobs.len(), 6);

        let ids: Vec<u64> = jobs.iter().map(|j| j.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_seed_first_job_values() {
        let jobs = seed_jobs().unwrap();
        let first = &jobs[0];

        assert_eq!(first.id, JobId(1));
        assert_eq!(first.title, "Senior Software Engineer");
        assert_eq!(first.industry, "Technology");
        assert_eq!(first.salary_min, 120000);
        assert_eq!(first.salary_max, 160000);
        assert_eq!(first.job_type, JobType::FullTime);
        assert_eq!(first.requirements.len(), 4);
        assert_eq!(first.posted_date.to_string(), "2026-01-05");
    }

    #[test]
    fn test_jobs_from_json_rejects_bad_type() {
        let content = r#"[{"id":1,"title":"t","company":"c","location":"l","industry":"i",
            "salary":"s","salaryMin":1,"salaryMax":2,"type":"Freelance","description":"d",
            "requirements":[],"postedDate":"2026-01-01"}]"#;
        assert!(jobs_from_json(content).is_err());
    }
}
