//! Caller-side form handling: raw text from the admin and listing forms is
//! turned into store inputs here. The store itself never validates.

use crate::filter::Criteria;
use crate::job::{Job, JobId, JobPatch, JobType, NewJob};
use regex::Regex;
use thiserror::Error;

fn leading_int(text: &str) -> Option<i64> {
    // Optional whitespace and sign, then digits (commas stop the match)
    let re = Regex::new(r"^\s*([+-]?\d+)").ok()?;
    let cap = re.captures(text)?;
    cap.get(1)?.as_str().parse::<i64>().ok()
}

/// Parses the integer prefix of `text`, e.g. "80k" gives 80.
/// Text without a leading integer is coerced to 0, as is a value too large
/// for an `i64`.
pub fn parse_int_lenient(text: &str) -> i64 {
    leading_int(text).unwrap_or(0)
}

/// Parses a job id taken from a route such as `/jobs/3`
pub fn parse_job_id(text: &str) -> Option<JobId> {
    text.trim().parse::<u64>().ok().map(JobId)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Admin create/edit form, every field as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub industry: String,
    pub salary: String,
    pub salary_min: String,
    pub salary_max: String,
    pub job_type: String,
    pub description: String,
    /// One requirement per line
    pub requirements: String,
}

impl Default for JobForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            industry: String::new(),
            salary: String::new(),
            salary_min: String::new(),
            salary_max: String::new(),
            job_type: JobType::FullTime.to_string(),
            description: String::new(),
            requirements: String::new(),
        }
    }
}

impl JobForm {
    /// Prefills the form for editing an existing posting
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            industry: job.industry.clone(),
            salary: job.salary.clone(),
            salary_min: job.salary_min.to_string(),
            salary_max: job.salary_max.to_string(),
            job_type: job.job_type.to_string(),
            description: job.description.clone(),
            requirements: job.requirements.join("\n"),
        }
    }

    /// Checks the required fields, reporting the first blank one
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
            ("industry", &self.industry),
            ("salary", &self.salary),
            ("job type", &self.job_type),
            ("min salary", &self.salary_min),
            ("max salary", &self.salary_max),
            ("description", &self.description),
            ("requirements", &self.requirements),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(FormError::MissingField(*name)),
            None => Ok(()),
        }
    }

    fn requirement_lines(&self) -> Vec<String> {
        self.requirements
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    fn parsed_job_type(&self) -> JobType {
        self.job_type.parse().unwrap_or_default()
    }

    pub fn to_new_job(&self) -> NewJob {
        NewJob {
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            industry: self.industry.clone(),
            salary: self.salary.clone(),
            salary_min: parse_int_lenient(&self.salary_min),
            salary_max: parse_int_lenient(&self.salary_max),
            job_type: self.parsed_job_type(),
            description: self.description.clone(),
            requirements: self.requirement_lines(),
        }
    }

    /// Patch writing every form field; the posted date is left alone
    pub fn to_patch(&self) -> JobPatch {
        let fields = self.to_new_job();
        JobPatch {
            title: Some(fields.title),
            company: Some(fields.company),
            location: Some(fields.location),
            industry: Some(fields.industry),
            salary: Some(fields.salary),
            salary_min: Some(fields.salary_min),
            salary_max: Some(fields.salary_max),
            job_type: Some(fields.job_type),
            description: Some(fields.description),
            requirements: Some(fields.requirements),
            posted_date: None,
        }
    }
}

/// Listing filter inputs as selected in the UI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaForm {
    pub search_term: String,
    pub industry: String,
    pub location: String,
    pub min_salary: String,
}

impl CriteriaForm {
    pub fn to_criteria(&self) -> Criteria {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

        Criteria {
            search_term: self.search_term.clone(),
            industry: non_empty(&self.industry),
            location: non_empty(&self.location),
            min_salary: (!self.min_salary.is_empty()).then(|| parse_int_lenient(&self.min_salary)),
        }
    }
}
