//! Derived views over a job list: filter dropdown values and the filtered
//! listing. Everything here is a pure function of its inputs.

use crate::job::{Job, JobId};
use std::collections::HashSet;

/// Filter values chosen on the listing page. `None` (or an empty string)
/// means the criterion is not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub search_term: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub min_salary: Option<i64>,
}

impl Criteria {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && active(&self.industry).is_none()
            && active(&self.location).is_none()
            && self.min_salary.is_none()
    }

    /// Whether a single job passes every active criterion
    pub fn matches(&self, job: &Job) -> bool {
        let matches_search = self.search_term.is_empty() || {
            let needle = self.search_term.to_lowercase();
            job.title.to_lowercase().contains(&needle)
                || job.company.to_lowercase().contains(&needle)
        };
        let matches_industry = active(&self.industry).is_none_or(|i| i == job.industry);
        let matches_location = active(&self.location).is_none_or(|l| l == job.location);
        let matches_salary = self.min_salary.is_none_or(|min| job.salary_min >= min);

        matches_search && matches_industry && matches_location && matches_salary
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Jobs passing `criteria`, in input order
pub fn filter_jobs<'a>(jobs: &'a [Job], criteria: &Criteria) -> Vec<&'a Job> {
    jobs.iter().filter(|job| criteria.matches(job)).collect()
}

fn distinct_by<'a>(jobs: &'a [Job], field: impl Fn(&'a Job) -> &'a str) -> Vec<String> {
    let mut seen = HashSet::new();
    jobs.iter()
        .map(field)
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Industries present in `jobs`, first-seen order
pub fn distinct_industries(jobs: &[Job]) -> Vec<String> {
    distinct_by(jobs, |job| job.industry.as_str())
}

/// Locations present in `jobs`, first-seen order
pub fn distinct_locations(jobs: &[Job]) -> Vec<String> {
    distinct_by(jobs, |job| job.location.as_str())
}

pub fn find_job(jobs: &[Job], id: JobId) -> Option<&Job> {
    jobs.iter().find(|job| job.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{JobType, NewJob};
    use crate::seed::seed_jobs;
    use chrono::NaiveDate;

    fn job(id: u64, title: &str, industry: &str, location: &str, salary_min: i64) -> Job {
        NewJob {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            industry: industry.to_string(),
            salary_min,
            salary_max: salary_min + 10000,
            job_type: JobType::FullTime,
            ..NewJob::default()
        }
        .into_job(JobId(id), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
    }

    fn two_jobs() -> Vec<Job> {
        vec![
            job(1, "Senior Software Engineer", "Technology", "San Francisco, CA", 120000),
            job(2, "Marketing Manager", "Marketing", "New York, NY", 80000),
        ]
    }

    fn ids(jobs: &[&Job]) -> Vec<u64> {
        jobs.iter().map(|j| j.id.0).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let jobs = seed_jobs().unwrap();
        let filtered: Vec<Job> = filter_jobs(&jobs, &Criteria::default())
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(filtered, jobs);
    }

    #[test]
    fn test_filter_by_industry() {
        let jobs = two_jobs();
        let criteria = Criteria {
            industry: Some("Technology".to_string()),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &criteria)), vec![1]);
    }

    #[test]
    fn test_filter_by_min_salary() {
        let jobs = two_jobs();
        let criteria = Criteria {
            min_salary: Some(100000),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &criteria)), vec![1]);
    }

    #[test]
    fn test_min_salary_is_inclusive() {
        let jobs = two_jobs();
        let criteria = Criteria {
            min_salary: Some(80000),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &criteria)), vec![1, 2]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let jobs = two_jobs();
        let criteria = Criteria {
            search_term: "manager".to_string(),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &criteria)), vec![2]);
    }

    #[test]
    fn test_search_matches_company() {
        let jobs = seed_jobs().unwrap();
        let criteria = Criteria {
            search_term: "FINANCE PRO".to_string(),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &criteria)), vec![3]);
    }

    #[test]
    fn test_industry_and_location_are_case_sensitive() {
        let jobs = two_jobs();
        let by_industry = Criteria {
            industry: Some("technology".to_string()),
            ..Criteria::default()
        };
        let by_location = Criteria {
            location: Some("new york, ny".to_string()),
            ..Criteria::default()
        };
        assert!(filter_jobs(&jobs, &by_industry).is_empty());
        assert!(filter_jobs(&jobs, &by_location).is_empty());
    }

    #[test]
    fn test_empty_strings_do_not_filter() {
        let jobs = two_jobs();
        let criteria = Criteria {
            industry: Some(String::new()),
            location: Some(String::new()),
            ..Criteria::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(ids(&filter_jobs(&jobs, &criteria)), vec![1, 2]);
    }

    #[test]
    fn test_all_criteria_combined() {
        let jobs = seed_jobs().unwrap();
        let criteria = Criteria {
            search_term: "data".to_string(),
            industry: Some("Technology".to_string()),
            location: Some("Seattle, WA".to_string()),
            min_salary: Some(100000),
        };
        assert_eq!(ids(&filter_jobs(&jobs, &criteria)), vec![5]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let jobs = seed_jobs().unwrap();
        let criteria = Criteria {
            industry: Some("Technology".to_string()),
            min_salary: Some(100000),
            ..Criteria::default()
        };

        let once: Vec<Job> = filter_jobs(&jobs, &criteria).into_iter().cloned().collect();
        let twice: Vec<Job> = filter_jobs(&once, &criteria).into_iter().cloned().collect();
        assert_eq!(once, twice);
        assert_eq!(once.iter().map(|j| j.id.0).collect::<Vec<_>>(), vec![1, 5]);
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let jobs = seed_jobs().unwrap();
        assert_eq!(
            distinct_industries(&jobs),
            vec!["Technology", "Marketing", "Finance", "Healthcare", "Design"]
        );
        assert_eq!(distinct_locations(&jobs).len(), 6);
        assert_eq!(distinct_locations(&jobs)[0], "San Francisco, CA");
    }

    #[test]
    fn test_find_job() {
        let jobs = two_jobs();
        assert_eq!(find_job(&jobs, JobId(2)).map(|j| j.title.as_str()), Some("Marketing Manager"));
        assert!(find_job(&jobs, JobId(3)).is_none());
    }
}
