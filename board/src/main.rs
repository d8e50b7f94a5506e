//! Job Board console front end
//!
//! Builds one in-memory `JobStore` per run and renders the listing, detail,
//! admin and newsletter pages on stdout. `board session` keeps the store
//! alive across many commands.

mod session;
mod views;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use common::{
    CriteriaForm, JobForm, JobId, JobStore, Mutation, StoreEvent, distinct_industries,
    distinct_locations, filter_jobs, parse_job_id,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_JOBS_PATH: &str = "data/jobs.json";

#[derive(Parser)]
#[command(name = "board")]
#[command(about = "Browse and manage job postings held in memory")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON job list to start from instead of the built-in postings
    #[arg(long)]
    jobs: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// List jobs, optionally filtered
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Print the filtered jobs as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the industries and locations available as filters
    Filters,
    /// Show one job by id
    Show { id: String },
    /// Subscribe one or more emails to the newsletter
    Subscribe { emails: Vec<String> },
    /// Admin panel: list, add, edit or delete postings
    Admin {
        #[command(subcommand)]
        action: Option<AdminAction>,
    },
    /// Read commands interactively, all sharing one store
    Session,
}

#[derive(Args)]
struct FilterArgs {
    /// Job title or company
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, default_value = "")]
    industry: String,
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long, default_value = "")]
    min_salary: String,
}

impl FilterArgs {
    fn to_form(&self) -> CriteriaForm {
        CriteriaForm {
            search_term: self.search.clone(),
            industry: self.industry.clone(),
            location: self.location.clone(),
            min_salary: self.min_salary.clone(),
        }
    }
}

#[derive(Subcommand)]
enum AdminAction {
    /// Add a new job
    Add(JobFields),
    /// Edit an existing job; omitted fields keep their value
    Edit {
        id: String,
        #[command(flatten)]
        fields: JobFields,
    },
    /// Delete a job
    Delete { id: String },
}

#[derive(Args, Default)]
struct JobFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    industry: Option<String>,
    /// Display form, e.g. "$80,000 - $100,000"
    #[arg(long)]
    salary: Option<String>,
    #[arg(long)]
    salary_min: Option<String>,
    #[arg(long)]
    salary_max: Option<String>,
    /// Full-time, Part-time, Contract or Internship
    #[arg(long = "type")]
    job_type: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// One requirement; repeat for several
    #[arg(long = "requirement")]
    requirements: Vec<String>,
}

impl JobFields {
    /// Writes the supplied fields over `form`
    fn apply(self, form: &mut JobForm) {
        let overrides = [
            (self.title, &mut form.title),
            (self.company, &mut form.company),
            (self.location, &mut form.location),
            (self.industry, &mut form.industry),
            (self.salary, &mut form.salary),
            (self.salary_min, &mut form.salary_min),
            (self.salary_max, &mut form.salary_max),
            (self.job_type, &mut form.job_type),
            (self.description, &mut form.description),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if !self.requirements.is_empty() {
            form.requirements = self.requirements.join("\n");
        }
    }
}

fn load_store(path: Option<&Path>) -> Result<JobStore> {
    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => Some(PathBuf::from(DEFAULT_JOBS_PATH)).filter(|p| p.exists()),
    };

    let Some(path) = path else {
        info!("no job file, using built-in postings");
        return JobStore::with_seed_data().context("Failed to parse built-in postings");
    };

    println!("📂 Loading jobs from {:?}", path);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let jobs = common::seed::jobs_from_json(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    JobStore::from_jobs(jobs).with_context(|| format!("Failed to load {}", path.display()))
}

fn lookup_id(text: &str) -> Result<JobId> {
    match parse_job_id(text) {
        Some(id) => Ok(id),
        None => bail!("invalid job id: {}", text),
    }
}

fn run_admin(store: &mut JobStore, action: AdminAction) -> Result<()> {
    match action {
        AdminAction::Add(fields) => {
            let mut form = JobForm::default();
            fields.apply(&mut form);
            form.validate()?;

            let job = store.create_job(form.to_new_job());
            println!("✅ Added [{}] {}\n", job.id, job.title);
        }
        AdminAction::Edit { id, fields } => {
            let id = lookup_id(&id)?;
            let Some(job) = store.job(id) else {
                println!("❌ No job with id {}\n", id);
                return Ok(());
            };

            let mut form = JobForm::from_job(job);
            fields.apply(&mut form);
            form.validate()?;

            if store.update_job(id, form.to_patch()) == Mutation::Applied {
                println!("✅ Updated [{}]\n", id);
            }
        }
        AdminAction::Delete { id } => {
            let id = lookup_id(&id)?;
            match store.delete_job(id) {
                Mutation::Applied => println!("🗑️  Deleted [{}]\n", id),
                Mutation::NotFound => println!("❌ No job with id {}\n", id),
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut store = load_store(cli.jobs.as_deref())?;

    // Views are recomputed from the store after each change; here that just
    // means tracing what changed.
    store.observe(|event| match event {
        StoreEvent::JobCreated(id) => info!(%id, "view refresh: job created"),
        StoreEvent::JobUpdated(id) => info!(%id, "view refresh: job updated"),
        StoreEvent::JobDeleted(id) => info!(%id, "view refresh: job deleted"),
        StoreEvent::SubscriberAdded(_) => info!("view refresh: subscriber added"),
    });

    match cli.command {
        Command::Session => session::run(&mut store),
        command => run_command(&mut store, command),
    }
}

/// Runs one command against the store and renders its page
fn run_command(store: &mut JobStore, command: Command) -> Result<()> {
    match command {
        Command::List { filters, json } => {
            let criteria = filters.to_form().to_criteria();
            let jobs = filter_jobs(store.list_jobs(), &criteria);
            if json {
                let output =
                    serde_json::to_string_pretty(&jobs).context("Failed to serialize jobs")?;
                println!("{}", output);
            } else {
                views::render_listing(&jobs, &criteria);
            }
        }
        Command::Filters => {
            let jobs = store.list_jobs();
            views::render_filters(&distinct_industries(jobs), &distinct_locations(jobs));
        }
        Command::Show { id } => {
            let job = parse_job_id(&id).and_then(|id| store.job(id));
            views::render_detail(job);
        }
        Command::Subscribe { emails } => {
            for email in emails {
                if email.trim().is_empty() {
                    warn!("blank email skipped");
                    continue;
                }
                if store.add_subscriber(&email) {
                    println!("📬 {}: Thank you for subscribing!", email);
                } else {
                    println!("ℹ️  {}: You are already subscribed!", email);
                }
            }
        }
        Command::Admin { action } => {
            if let Some(action) = action {
                run_admin(store, action)?;
            }
            views::render_admin(store);
        }
        Command::Session => warn!("already in a session"),
    }

    Ok(())
}
