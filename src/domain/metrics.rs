//! Dashboard metric aggregation. Pure functions over in-memory snapshots.
//!
//! Every function takes the reference instant `now` as a parameter; callers
//! capture it once per pass so all windows in one computation agree.

use crate::domain::entities::{
    Company, CompanyStatus, Invoice, InvoiceStatus, Job, Warranty, WarrantyStatus,
};
use chrono::{Datelike, Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

/// The four top-level counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlineMetrics {
    pub active_companies: usize,
    pub total_motors: u64,
    pub jobs_this_month: usize,
    pub monthly_revenue: Decimal,
}

/// Per-company summary of job activity. Borrows the jobs it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyRollup<'a> {
    pub active_jobs: Vec<&'a Job>,
    pub completed_jobs: Vec<&'a Job>,
    /// Sum of estimated cost over active jobs only.
    pub total_estimated_value: Decimal,
    /// Latest job update, else the company's own update time.
    pub last_activity: Option<NaiveDateTime>,
}

/// Look-ahead windows for the alert counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertWindows {
    pub due_days: i64,
    pub warranty_days: i64,
}

impl Default for AlertWindows {
    fn default() -> Self {
        Self {
            due_days: 7,
            warranty_days: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AlertSummary {
    pub jobs_due_this_week: usize,
    pub overdue_invoices: usize,
    pub warranties_expiring_soon: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    JobsDue,
    OverdueInvoices,
    ExpiringWarranties,
}

/// One non-zero alert line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "alerts", rename_all = "snake_case")]
pub enum AlertStatus {
    AllClear,
    Attention(Vec<Alert>),
}

impl Alert {
    pub fn headline(&self) -> String {
        match self.kind {
            AlertKind::JobsDue => format!("{} jobs due this week", self.count),
            AlertKind::OverdueInvoices => format!("{} invoices overdue", self.count),
            AlertKind::ExpiringWarranties => format!("{} warranties expiring soon", self.count),
        }
    }

    pub fn hint(&self) -> &'static str {
        match self.kind {
            AlertKind::JobsDue => "Review upcoming deadlines",
            AlertKind::OverdueInvoices => "Follow up on payments",
            AlertKind::ExpiringWarranties => "Consider renewals",
        }
    }
}

impl AlertSummary {
    pub fn has_alerts(&self) -> bool {
        self.jobs_due_this_week > 0 || self.overdue_invoices > 0 || self.warranties_expiring_soon > 0
    }

    /// Non-zero alerts in display order.
    pub fn alerts(&self) -> Vec<Alert> {
        [
            (AlertKind::JobsDue, self.jobs_due_this_week),
            (AlertKind::OverdueInvoices, self.overdue_invoices),
            (AlertKind::ExpiringWarranties, self.warranties_expiring_soon),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(kind, count)| Alert { kind, count })
        .collect()
    }

    pub fn status(&self) -> AlertStatus {
        if self.has_alerts() {
            AlertStatus::Attention(self.alerts())
        } else {
            AlertStatus::AllClear
        }
    }
}

fn same_month(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// `at` in `[now, now + days]`. A missing instant is never inside; a window
/// reaching past the representable calendar has no upper bound.
fn within_days(at: Option<NaiveDateTime>, now: NaiveDateTime, days: i64) -> bool {
    let end = Duration::try_days(days).and_then(|d| now.checked_add_signed(d));
    at.is_some_and(|t| t >= now && end.is_none_or(|end| t <= end))
}

pub fn compute_headline_metrics(
    companies: &[Company],
    jobs: &[Job],
    invoices: &[Invoice],
    now: NaiveDateTime,
) -> HeadlineMetrics {
    let active_companies = companies
        .iter()
        .filter(|c| c.status == CompanyStatus::Active)
        .count();
    let total_motors = companies.iter().map(|c| u64::from(c.motor_count)).sum();
    let jobs_this_month = jobs
        .iter()
        .filter(|j| j.created_at.is_some_and(|t| same_month(t, now)))
        .count();
    let monthly_revenue = invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Paid)
        .filter(|i| i.paid_date.is_some_and(|t| same_month(t, now)))
        .map(|i| i.total_amount)
        .sum();

    HeadlineMetrics {
        active_companies,
        total_motors,
        jobs_this_month,
        monthly_revenue,
    }
}

pub fn compute_company_rollup<'a>(company: &Company, jobs: &'a [Job]) -> CompanyRollup<'a> {
    let company_jobs: Vec<&Job> = jobs.iter().filter(|j| j.company_id == company.id).collect();
    let active_jobs: Vec<&Job> = company_jobs
        .iter()
        .copied()
        .filter(|j| j.status.is_open())
        .collect();
    let completed_jobs: Vec<&Job> = company_jobs
        .iter()
        .copied()
        .filter(|j| j.status.is_closed())
        .collect();
    let total_estimated_value = active_jobs
        .iter()
        .map(|j| j.estimated_cost.unwrap_or(Decimal::ZERO))
        .sum();
    let last_activity = company_jobs
        .iter()
        .filter_map(|j| j.updated_at)
        .max()
        .or(company.updated_at);

    CompanyRollup {
        active_jobs,
        completed_jobs,
        total_estimated_value,
        last_activity,
    }
}

/// Alert counters with the default 7 / 30 day windows.
pub fn compute_alerts(
    jobs: &[Job],
    invoices: &[Invoice],
    warranties: &[Warranty],
    now: NaiveDateTime,
) -> AlertSummary {
    compute_alerts_within(jobs, invoices, warranties, now, AlertWindows::default())
}

pub fn compute_alerts_within(
    jobs: &[Job],
    invoices: &[Invoice],
    warranties: &[Warranty],
    now: NaiveDateTime,
    windows: AlertWindows,
) -> AlertSummary {
    let jobs_due_this_week = jobs
        .iter()
        .filter(|j| j.status.is_open() && within_days(j.due_date, now, windows.due_days))
        .count();
    let overdue_invoices = invoices
        .iter()
        .filter(|i| i.status != InvoiceStatus::Paid && i.due_date.is_some_and(|d| d < now))
        .count();
    let warranties_expiring_soon = warranties
        .iter()
        .filter(|w| {
            w.status == WarrantyStatus::Active
                && within_days(w.warranty_end, now, windows.warranty_days)
        })
        .count();

    AlertSummary {
        jobs_due_this_week,
        overdue_invoices,
        warranties_expiring_soon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::JobStatus;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn company(id: &str, status: CompanyStatus, motors: u32) -> Company {
        Company {
            id: id.to_string(),
            name: format!("Company {}", id),
            status,
            motor_count: motors,
            contact_name: "Dana".to_string(),
            updated_at: Some(day(2024, 1, 5)),
        }
    }

    fn job(id: &str, company_id: &str, status: JobStatus) -> Job {
        Job {
            id: id.to_string(),
            job_number: format!("J-{}", id),
            company_id: company_id.to_string(),
            status,
            description: "Bearing replacement".to_string(),
            estimated_cost: None,
            due_date: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn invoice(status: InvoiceStatus, amount: i64, paid: Option<NaiveDateTime>) -> Invoice {
        Invoice {
            id: "inv".to_string(),
            status,
            total_amount: Decimal::from(amount),
            paid_date: paid,
            due_date: None,
        }
    }

    fn warranty(status: WarrantyStatus, end: Option<NaiveDateTime>) -> Warranty {
        Warranty {
            id: "w".to_string(),
            status,
            warranty_end: end,
        }
    }

    #[test]
    fn test_empty_inputs_yield_zeroes() {
        let now = day(2024, 3, 15);
        let m = compute_headline_metrics(&[], &[], &[], now);
        assert_eq!(m.active_companies, 0);
        assert_eq!(m.total_motors, 0);
        assert_eq!(m.jobs_this_month, 0);
        assert_eq!(m.monthly_revenue, Decimal::ZERO);
        let a = compute_alerts(&[], &[], &[], now);
        assert!(!a.has_alerts());
        assert_eq!(a.status(), AlertStatus::AllClear);
    }

    #[test]
    fn test_active_companies_and_motor_total() {
        let now = day(2024, 3, 15);
        let mut companies = vec![
            company("a", CompanyStatus::Active, 4),
            company("b", CompanyStatus::Inactive, 2),
            company("c", CompanyStatus::Other("prospect".into()), 1),
        ];
        let before = compute_headline_metrics(&companies, &[], &[], now);
        assert_eq!(before.active_companies, 1);
        assert_eq!(before.total_motors, 7);

        companies.push(company("d", CompanyStatus::Active, 9));
        let after = compute_headline_metrics(&companies, &[], &[], now);
        assert_eq!(after.active_companies, 2);
        assert_eq!(after.total_motors, before.total_motors + 9);
    }

    #[test]
    fn test_jobs_this_month_uses_calendar_month() {
        let now = day(2024, 3, 15);
        let mut march = job("1", "a", JobStatus::Pending);
        march.created_at = Some(day(2024, 3, 1));
        let mut february = job("2", "a", JobStatus::Pending);
        february.created_at = Some(day(2024, 2, 28));
        let mut last_year = job("3", "a", JobStatus::Pending);
        last_year.created_at = Some(day(2023, 3, 10));
        let undated = job("4", "a", JobStatus::Pending);

        let m = compute_headline_metrics(&[], &[march, february, last_year, undated], &[], now);
        assert_eq!(m.jobs_this_month, 1);
    }

    #[test]
    fn test_monthly_revenue_counts_paid_only() {
        let now = day(2024, 3, 20);
        let paid = invoice(InvoiceStatus::Paid, 500, Some(day(2024, 3, 10)));
        let m = compute_headline_metrics(&[], &[], std::slice::from_ref(&paid), now);
        assert_eq!(m.monthly_revenue, Decimal::from(500));

        let pending = invoice(InvoiceStatus::Pending, 500, Some(day(2024, 3, 10)));
        let m = compute_headline_metrics(&[], &[], &[pending], now);
        assert_eq!(m.monthly_revenue, Decimal::ZERO);

        let no_date = invoice(InvoiceStatus::Paid, 700, None);
        let old = invoice(InvoiceStatus::Paid, 900, Some(day(2024, 2, 29)));
        let m = compute_headline_metrics(&[], &[], &[paid, no_date, old], now);
        assert_eq!(m.monthly_revenue, Decimal::from(500));
    }

    #[test]
    fn test_company_rollup_splits_active_and_completed() {
        let acme = company("a", CompanyStatus::Active, 3);
        let mut open = job("1", "a", JobStatus::Pending);
        open.estimated_cost = Some(Decimal::from(100));
        let mut done = job("2", "a", JobStatus::Completed);
        done.estimated_cost = Some(Decimal::from(200));
        let mut elsewhere = job("3", "b", JobStatus::InProgress);
        elsewhere.estimated_cost = Some(Decimal::from(999));
        let jobs = vec![open, done, elsewhere];

        let r = compute_company_rollup(&acme, &jobs);
        assert_eq!(r.active_jobs.len(), 1);
        assert_eq!(r.completed_jobs.len(), 1);
        assert_eq!(r.total_estimated_value, Decimal::from(100));
    }

    #[test]
    fn test_company_rollup_missing_cost_is_zero() {
        let acme = company("a", CompanyStatus::Active, 3);
        let mut priced = job("1", "a", JobStatus::InProgress);
        priced.estimated_cost = Some(Decimal::new(4550, 2));
        let unpriced = job("2", "a", JobStatus::Pending);
        let odd = job("3", "a", JobStatus::Other("on_hold".into()));
        let jobs = vec![priced, unpriced, odd];

        let r = compute_company_rollup(&acme, &jobs);
        assert_eq!(r.active_jobs.len(), 2);
        assert!(r.completed_jobs.is_empty());
        assert_eq!(r.total_estimated_value, Decimal::new(4550, 2));
    }

    #[test]
    fn test_company_rollup_last_activity() {
        let acme = company("a", CompanyStatus::Active, 3);
        let r = compute_company_rollup(&acme, &[]);
        assert_eq!(r.last_activity, Some(day(2024, 1, 5)));

        let mut early = job("1", "a", JobStatus::Pending);
        early.updated_at = Some(day(2024, 2, 1));
        let mut late = job("2", "a", JobStatus::Delivered);
        late.updated_at = Some(day(2024, 3, 9));
        let jobs = vec![early, late];
        let r = compute_company_rollup(&acme, &jobs);
        assert_eq!(r.last_activity, Some(day(2024, 3, 9)));

        // Jobs without update stamps fall back to the company's own.
        let jobs = vec![job("3", "a", JobStatus::Pending), job("4", "a", JobStatus::Completed)];
        let r = compute_company_rollup(&acme, &jobs);
        assert_eq!(r.last_activity, Some(day(2024, 1, 5)));
    }

    #[test]
    fn test_jobs_due_this_week() {
        let now = day(2024, 3, 15);
        let mut soon = job("1", "a", JobStatus::Pending);
        soon.due_date = Some(day(2024, 3, 18));
        let mut later = job("2", "a", JobStatus::Pending);
        later.due_date = Some(day(2024, 3, 25));
        let mut finished = job("3", "a", JobStatus::Completed);
        finished.due_date = Some(day(2024, 3, 16));
        let mut edge = job("4", "a", JobStatus::InProgress);
        edge.due_date = Some(day(2024, 3, 22));
        let mut past = job("5", "a", JobStatus::Pending);
        past.due_date = Some(day(2024, 3, 14));
        let undated = job("6", "a", JobStatus::Pending);

        let a = compute_alerts(&[soon, later, finished, edge, past, undated], &[], &[], now);
        assert_eq!(a.jobs_due_this_week, 2);
    }

    #[test]
    fn test_overdue_invoices() {
        let now = day(2024, 3, 15);
        let mut overdue = invoice(InvoiceStatus::Pending, 10, None);
        overdue.due_date = Some(day(2024, 3, 1));
        let mut paid_late = invoice(InvoiceStatus::Paid, 10, Some(day(2024, 3, 2)));
        paid_late.due_date = Some(day(2024, 3, 1));
        let mut not_yet = invoice(InvoiceStatus::Draft, 10, None);
        not_yet.due_date = Some(day(2024, 4, 1));
        let undated = invoice(InvoiceStatus::Overdue, 10, None);

        let a = compute_alerts(&[], &[overdue, paid_late, not_yet, undated], &[], now);
        assert_eq!(a.overdue_invoices, 1);
    }

    #[test]
    fn test_warranties_expiring_soon() {
        let now = day(2024, 3, 15);
        let ws = vec![
            warranty(WarrantyStatus::Active, Some(day(2024, 4, 10))),
            warranty(WarrantyStatus::Active, Some(day(2024, 4, 20))),
            warranty(WarrantyStatus::Expired, Some(day(2024, 3, 20))),
            warranty(WarrantyStatus::Active, Some(day(2024, 3, 1))),
            warranty(WarrantyStatus::Active, None),
        ];
        let a = compute_alerts(&[], &[], &ws, now);
        assert_eq!(a.warranties_expiring_soon, 1);
    }

    #[test]
    fn test_custom_windows() {
        let now = day(2024, 3, 15);
        let mut j = job("1", "a", JobStatus::Pending);
        j.due_date = Some(day(2024, 3, 25));
        let windows = AlertWindows {
            due_days: 14,
            warranty_days: 30,
        };
        let a = compute_alerts_within(std::slice::from_ref(&j), &[], &[], now, windows);
        assert_eq!(a.jobs_due_this_week, 1);
        let a = compute_alerts(&[j], &[], &[], now);
        assert_eq!(a.jobs_due_this_week, 0);
    }

    #[test]
    fn test_huge_window_has_no_upper_bound() {
        let now = day(2024, 3, 15);
        let mut due_now = job("1", "a", JobStatus::Pending);
        due_now.due_date = Some(now);
        let mut far = job("2", "a", JobStatus::InProgress);
        far.due_date = Some(day(9000, 1, 1));
        let mut past = job("3", "a", JobStatus::Pending);
        past.due_date = Some(day(2024, 3, 1));
        let ends = vec![warranty(WarrantyStatus::Active, Some(day(2030, 6, 1)))];
        let windows = AlertWindows {
            due_days: 100_000_000,
            warranty_days: i64::MAX,
        };

        let a = compute_alerts_within(&[due_now, far, past], &[], &ends, now, windows);
        assert_eq!(a.jobs_due_this_week, 2);
        assert_eq!(a.warranties_expiring_soon, 1);
    }

    #[test]
    fn test_alert_list_order_and_text() {
        let s = AlertSummary {
            jobs_due_this_week: 3,
            overdue_invoices: 0,
            warranties_expiring_soon: 1,
        };
        let alerts = s.alerts();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].kind, AlertKind::JobsDue);
        assert_eq!(alerts[0].headline(), "3 jobs due this week");
        assert_eq!(alerts[1].hint(), "Consider renewals");
        assert!(matches!(s.status(), AlertStatus::Attention(v) if v.len() == 2));
    }

    #[test]
    fn test_repeat_computation_is_identical() {
        let now = day(2024, 3, 15);
        let companies = vec![company("a", CompanyStatus::Active, 2)];
        let mut j = job("1", "a", JobStatus::Pending);
        j.created_at = Some(day(2024, 3, 2));
        j.due_date = Some(day(2024, 3, 17));
        let jobs = vec![j];
        let invoices = vec![invoice(InvoiceStatus::Paid, 120, Some(day(2024, 3, 3)))];

        assert_eq!(
            compute_headline_metrics(&companies, &jobs, &invoices, now),
            compute_headline_metrics(&companies, &jobs, &invoices, now)
        );
        assert_eq!(
            compute_alerts(&jobs, &invoices, &[], now),
            compute_alerts(&jobs, &invoices, &[], now)
        );
        assert_eq!(
            compute_company_rollup(&companies[0], &jobs),
            compute_company_rollup(&companies[0], &jobs)
        );
    }
}
