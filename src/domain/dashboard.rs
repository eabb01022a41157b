//! Dashboard view-model. Owned, render-ready values derived from one snapshot
//! and one captured instant.

use crate::domain::entities::{Company, Invoice, Job, JobStatus, Warranty};
use crate::domain::metrics::{self, AlertSummary, AlertWindows, HeadlineMetrics};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

/// Placeholder for jobs whose `company_id` matches no company.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

const DESCRIPTION_PREVIEW_CHARS: usize = 50;

/// The four collections, already materialized.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub companies: Vec<Company>,
    pub jobs: Vec<Job>,
    pub invoices: Vec<Invoice>,
    pub warranties: Vec<Warranty>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLimits {
    pub overview: usize,
    pub recent: usize,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            overview: 5,
            recent: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyCard {
    pub company_id: String,
    pub name: String,
    pub status_label: String,
    pub motor_count: u32,
    pub contact_name: String,
    pub active_jobs: usize,
    pub completed_jobs: usize,
    pub total_estimated_value: Decimal,
    pub last_activity: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentJob {
    pub job_number: String,
    pub company_name: String,
    pub status: JobStatus,
    pub last_updated: Option<NaiveDate>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub generated_at: NaiveDateTime,
    pub headline: HeadlineMetrics,
    pub overview: Vec<CompanyCard>,
    /// True when there are no companies at all (not just a short overview).
    pub no_companies: bool,
    pub recent: Vec<RecentJob>,
    pub alerts: AlertSummary,
}

impl DashboardView {
    /// Derive the full view. `now` is used for every window in this pass.
    pub fn build(
        snapshot: &Snapshot,
        now: NaiveDateTime,
        limits: ViewLimits,
        windows: AlertWindows,
    ) -> Self {
        let headline = metrics::compute_headline_metrics(
            &snapshot.companies,
            &snapshot.jobs,
            &snapshot.invoices,
            now,
        );
        let overview = snapshot
            .companies
            .iter()
            .take(limits.overview)
            .map(|c| company_card(c, &snapshot.jobs))
            .collect();
        let recent = snapshot
            .jobs
            .iter()
            .take(limits.recent)
            .map(|j| recent_job(j, &snapshot.companies))
            .collect();
        let alerts = metrics::compute_alerts_within(
            &snapshot.jobs,
            &snapshot.invoices,
            &snapshot.warranties,
            now,
            windows,
        );

        Self {
            generated_at: now,
            headline,
            overview,
            no_companies: snapshot.companies.is_empty(),
            recent,
            alerts,
        }
    }
}

fn company_card(company: &Company, jobs: &[Job]) -> CompanyCard {
    let rollup = metrics::compute_company_rollup(company, jobs);
    CompanyCard {
        company_id: company.id.clone(),
        name: company.name.clone(),
        status_label: company.status.to_string(),
        motor_count: company.motor_count,
        contact_name: company.contact_name.clone(),
        active_jobs: rollup.active_jobs.len(),
        completed_jobs: rollup.completed_jobs.len(),
        total_estimated_value: rollup.total_estimated_value,
        last_activity: rollup.last_activity.map(|t| t.date()),
    }
}

fn recent_job(job: &Job, companies: &[Company]) -> RecentJob {
    let company_name = companies
        .iter()
        .find(|c| c.id == job.company_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| UNKNOWN_COMPANY.to_string());
    RecentJob {
        job_number: job.job_number.clone(),
        company_name,
        status: job.status.clone(),
        last_updated: job.updated_at.map(|t| t.date()),
        summary: preview(&job.description),
    }
}

/// First 50 characters followed by an ellipsis; short text is left alone.
fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(DESCRIPTION_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
