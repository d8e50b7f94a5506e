//! Job board core: the in-memory job store, the listing filters and the
//! form helpers the front end uses to feed them.

pub mod filter;
pub mod form;
pub mod job;
pub mod seed;
pub mod store;

pub use filter::{Criteria, distinct_industries, distinct_locations, filter_jobs, find_job};
pub use form::{CriteriaForm, FormError, JobForm, parse_int_lenient, parse_job_id};
pub use job::{Job, JobId, JobPatch, JobType, NewJob};
pub use store::{JobStore, MAX_JOB_ID, Mutation, StoreError, StoreEvent};
