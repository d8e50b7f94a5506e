//! In-memory job store.
//!
//! `JobStore` is the only owner of the job list and the subscriber list.
//! Mutations take `&mut self`, run to completion and then notify any
//! registered observers so views can be recomputed.

use crate::job::{Job, JobId, JobPatch, NewJob};
use chrono::{Local, NaiveDate};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Highest id a loaded job may carry. Fresh ids are counted up from here at
/// most, so the counter stays far from `u64::MAX`.
pub const MAX_JOB_ID: u64 = i64::MAX as u64;

/// Reasons a job list cannot seed a store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("job id {0} appears more than once")]
    DuplicateId(JobId),
    #[error("job id {0} is above the maximum of {max}", max = MAX_JOB_ID)]
    IdOutOfRange(JobId),
    #[error("invalid job list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Outcome of an update or delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    /// No job had the requested id; nothing changed
    NotFound,
}

impl Mutation {
    pub fn is_applied(&self) -> bool {
        matches!(self, Mutation::Applied)
    }
}

/// Change notification delivered to observers after a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    JobCreated(JobId),
    JobUpdated(JobId),
    JobDeleted(JobId),
    SubscriberAdded(String),
}

type Observer = Box<dyn FnMut(&StoreEvent)>;

/// Owns the postings and subscribers for one session
pub struct JobStore {
    jobs: Vec<Job>,
    subscribers: Vec<String>,
    next_id: u64,
    today: fn() -> NaiveDate,
    observers: Vec<Observer>,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl JobStore {
    /// Empty store dated by the local clock
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            subscribers: Vec::new(),
            next_id: 1,
            today: local_today,
            observers: Vec::new(),
        }
    }

    /// Store seeded with an existing job list, kept in the given order.
    /// Fresh ids start after the highest seeded id.
    ///
    /// Fails if two jobs share an id or an id is above [`MAX_JOB_ID`].
    pub fn from_jobs(jobs: Vec<Job>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for job in &jobs {
            if job.id.0 > MAX_JOB_ID {
                return Err(StoreError::IdOutOfRange(job.id));
            }
            if !seen.insert(job.id) {
                return Err(StoreError::DuplicateId(job.id));
            }
        }

        let next_id = jobs.iter().map(|j| j.id.0).max().map_or(1, |max| max + 1);
        info!(jobs = jobs.len(), next_id, "job store initialised");

        Ok(Self {
            jobs,
            next_id,
            ..Self::new()
        })
    }

    /// Store seeded with the built-in postings
    pub fn with_seed_data() -> Result<Self, StoreError> {
        Self::from_jobs(crate::seed::seed_jobs()?)
    }

    /// Replaces the date source used to stamp new postings
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Registers a callback run after every successful mutation
    pub fn observe<F>(&mut self, observer: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self, event: StoreEvent) {
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }

    /// Current jobs in insertion order
    pub fn list_jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        crate::filter::find_job(&self.jobs, id)
    }

    pub fn subscribers(&self) -> &[String] {
        &self.subscribers
    }

    /// Stores a new posting with a fresh id and today's date, appended last
    pub fn create_job(&mut self, fields: NewJob) -> Job {
        let id = JobId(self.next_id);
        self.next_id += 1;

        let job = fields.into_job(id, (self.today)());
        debug!(%id, title = %job.title, "job created");
        self.jobs.push(job.clone());
        self.notify(StoreEvent::JobCreated(id));
        job
    }

    /// Merges the patch over the job with `id`
    pub fn update_job(&mut self, id: JobId, patch: JobPatch) -> Mutation {
        let Some(job) = self.jobs.iter_mut().find(|j| j.id == id) else {
            debug!(%id, "update ignored, job not found");
            return Mutation::NotFound;
        };

        patch.apply_to(job);
        debug!(%id, "job updated");
        self.notify(StoreEvent::JobUpdated(id));
        Mutation::Applied
    }

    /// Removes the job with `id`, keeping the order of the rest
    pub fn delete_job(&mut self, id: JobId) -> Mutation {
        let Some(pos) = self.jobs.iter().position(|j| j.id == id) else {
            debug!(%id, "delete ignored, job not found");
            return Mutation::NotFound;
        };

        self.jobs.remove(pos);
        debug!(%id, "job deleted");
        self.notify(StoreEvent::JobDeleted(id));
        Mutation::Applied
    }

    /// Records an email. Returns `false` if the exact address is already
    /// subscribed.
    pub fn add_subscriber(&mut self, email: &str) -> bool {
        if self.subscribers.iter().any(|s| s == email) {
            debug!("duplicate subscriber ignored");
            return false;
        }

        self.subscribers.push(email.to_string());
        debug!(total = self.subscribers.len(), "subscriber added");
        self.notify(StoreEvent::SubscriberAdded(email.to_string()));
        true
    }
}

impl Default for JobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for JobStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobStore")
            .field("jobs", &self.jobs.len())
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}
