//! Console renderings of the board pages.

use common::{Criteria, Job, JobStore};

const EXCERPT_LEN: usize = 120;

/// First 120 characters of a description followed by "..."
pub fn excerpt(description: &str) -> String {
    let cut: String = description.chars().take(EXCERPT_LEN).collect();
    format!("{}...", cut)
}

fn describe_criteria(criteria: &Criteria) -> String {
    if criteria.is_empty() {
        return "no filters".to_string();
    }

    let mut parts = Vec::new();
    if !criteria.search_term.is_empty() {
        parts.push(format!("search \"{}\"", criteria.search_term));
    }
    if let Some(industry) = criteria.industry.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("industry {}", industry));
    }
    if let Some(location) = criteria.location.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("location {}", location));
    }
    if let Some(min) = criteria.min_salary {
        parts.push(format!("min salary {}", min));
    }
    parts.join(", ")
}

pub fn render_listing(jobs: &[&Job], criteria: &Criteria) {
    println!("🔍 Find Your Next Opportunity ({})\n", describe_criteria(criteria));
    println!("📊 {} jobs found\n", jobs.len());

    if jobs.is_empty() {
        println!("No jobs found matching your criteria.");
        return;
    }

    for job in jobs {
        println!("[{}] {} ({})", job.id, job.title, job.job_type);
        println!("    {}", job.company);
        println!("    📍 {}  💼 {}  💰 {}", job.location, job.industry, job.salary);
        println!("    {}", excerpt(&job.description));
        println!("    Posted: {}\n", job.posted_date);
    }
}

pub fn render_filters(industries: &[String], locations: &[String]) {
    println!("💼 Industries:");
    for industry in industries {
        println!("   - {}", industry);
    }
    println!("📍 Locations:");
    for location in locations {
        println!("   - {}", location);
    }
}

pub fn render_detail(job: Option<&Job>) {
    let Some(job) = job else {
        println!("❌ Job Not Found");
        println!("The job you're looking for doesn't exist or has been removed.");
        return;
    };

    println!("{} ({})", job.title, job.job_type);
    println!("{}\n", job.company);
    println!("📍 Location: {}", job.location);
    println!("💼 Industry: {}", job.industry);
    println!("💰 Salary:   {}", job.salary);
    println!("📅 Posted:   {}\n", job.posted_date);
    println!("Job Description\n{}\n", job.description);
    println!("Requirements");
    for requirement in &job.requirements {
        println!("  • {}", requirement);
    }
}

pub fn render_admin(store: &JobStore) {
    let jobs = store.list_jobs();
    println!("🛠️  Current Job Listings ({})", jobs.len());
    for job in jobs {
        println!(
            "   [{}] {} | {} | {} | {}",
            job.id, job.title, job.company, job.location, job.salary
        );
    }

    let subscribers = store.subscribers();
    println!("\n📬 Mailing List Subscribers ({})", subscribers.len());
    if subscribers.is_empty() {
        println!("   No subscribers yet.");
    }
    for email in subscribers {
        println!("   {}", email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_truncates_on_chars() {
        let long = "é".repeat(200);
        let out = excerpt(&long);
        assert_eq!(out.chars().count(), EXCERPT_LEN + 3);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_excerpt_short_text() {
        assert_eq!(excerpt("Short"), "Short...");
    }

    #[test]
    fn test_describe_criteria() {
        assert_eq!(describe_criteria(&Criteria::default()), "no filters");

        let criteria = Criteria {
            search_term: "rust".to_string(),
            min_salary: Some(75000),
            ..Criteria::default()
        };
        assert_eq!(describe_criteria(&criteria), "search \"rust\", min salary 75000");
    }
}
