use crate::models::job::{Job, SearchDto};

/// Narrows `jobs` down to the ones matching `criteria`. Filters apply only
/// for criteria that were sent: skills first, then location, then the salary
/// band. `matching_skill_job_ids` is the reverse lookup for the requested
/// skills and is ignored unless skills were part of the search.
pub fn filter_jobs(mut jobs: Vec<Job>, criteria: &SearchDto, matching_skill_job_ids: &[i64]) -> Vec<Job> {
    if let Some(skills) = &criteria.skills {
        if !skills.is_empty() {
            jobs.retain(|job| matching_skill_job_ids.contains(&job.job_id));
        }
    }
    if let Some(location) = &criteria.location {
        jobs.retain(|job| job.location == *location);
    }
    if criteria.min_salary.is_some() || criteria.max_salary.is_some() {
        let min = criteria.min_salary.unwrap_or(0);
        let max = criteria.max_salary.unwrap_or(i64::MAX);
        // An unlisted salary never matches a salary-bounded search.
        jobs.retain(|job| job.salary.map_or(false, |s| s >= min && s <= max));
    }
    jobs
}
