//! Dashboard use case: load the four collections through their ports, then
//! derive the view-model against a single captured "now".

use crate::domain::time::local_now;
use crate::domain::{AlertWindows, DashboardView, DomainError, Snapshot, ViewLimits};
use crate::ports::{CompanySource, InvoiceSource, JobSource, WarrantySource};
use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::{info, warn};

pub struct DashboardService {
    companies: Arc<CompanySource>,
    jobs: Arc<JobSource>,
    invoices: Arc<InvoiceSource>,
    warranties: Arc<WarrantySource>,
    limits: ViewLimits,
    windows: AlertWindows,
}

impl DashboardService {
    pub fn new(
        companies: Arc<CompanySource>,
        jobs: Arc<JobSource>,
        invoices: Arc<InvoiceSource>,
        warranties: Arc<WarrantySource>,
    ) -> Self {
        Self {
            companies,
            jobs,
            invoices,
            warranties,
            limits: ViewLimits::default(),
            windows: AlertWindows::default(),
        }
    }

    pub fn with_limits(mut self, limits: ViewLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_windows(mut self, windows: AlertWindows) -> Self {
        self.windows = windows;
        self
    }

    /// Fetch all four collections concurrently. Fails on the first source error.
    pub async fn load_snapshot(&self) -> Result<Snapshot, DomainError> {
        let (companies, jobs, invoices, warranties) = tokio::try_join!(
            self.companies.list(),
            self.jobs.list(),
            self.invoices.list(),
            self.warranties.list(),
        )?;
        info!(
            companies = companies.len(),
            jobs = jobs.len(),
            invoices = invoices.len(),
            warranties = warranties.len(),
            "snapshot loaded"
        );
        Ok(Snapshot {
            companies,
            jobs,
            invoices,
            warranties,
        })
    }

    /// Build the view for an explicit instant. Pure; no I/O.
    pub fn view_at(&self, snapshot: &Snapshot, now: NaiveDateTime) -> DashboardView {
        let view = DashboardView::build(snapshot, now, self.limits, self.windows);
        if view.alerts.has_alerts() {
            warn!(
                jobs_due = view.alerts.jobs_due_this_week,
                overdue_invoices = view.alerts.overdue_invoices,
                expiring_warranties = view.alerts.warranties_expiring_soon,
                "dashboard has alerts"
            );
        }
        view
    }

    /// Load and build with the clock read exactly once.
    pub async fn refresh(&self) -> Result<DashboardView, DomainError> {
        let snapshot = self.load_snapshot().await?;
        let now = local_now();
        Ok(self.view_at(&snapshot, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::MemorySource;
    use crate::domain::{Company, CompanyStatus, Invoice, InvoiceStatus, Job, Warranty};
    use crate::ports::EntitySource;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    struct FailingSource;

    #[async_trait::async_trait]
    impl EntitySource<Invoice> for FailingSource {
        async fn list(&self) -> Result<Vec<Invoice>, DomainError> {
            Err(DomainError::Source {
                entity: "invoices",
                message: "connection refused".into(),
            })
        }
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn companies() -> Vec<Company> {
        vec![Company {
            id: "c1".into(),
            name: "Harbor Pumps".into(),
            status: CompanyStatus::Active,
            motor_count: 12,
            contact_name: "Lee".into(),
            updated_at: None,
        }]
    }

    fn service(invoices: Arc<InvoiceSource>) -> DashboardService {
        DashboardService::new(
            Arc::new(MemorySource::new(companies())),
            Arc::new(MemorySource::<Job>::default()),
            invoices,
            Arc::new(MemorySource::<Warranty>::default()),
        )
    }

    #[tokio::test]
    async fn test_load_and_view() {
        let invoices = vec![Invoice {
            id: "i1".into(),
            status: InvoiceStatus::Paid,
            total_amount: Decimal::from(500),
            paid_date: Some(at(2024, 3, 10)),
            due_date: Some(at(2024, 3, 1)),
        }];
        let svc = service(Arc::new(MemorySource::new(invoices)));
        let snapshot = svc.load_snapshot().await.unwrap();
        assert_eq!(snapshot.companies.len(), 1);

        let view = svc.view_at(&snapshot, at(2024, 3, 20));
        assert_eq!(view.headline.active_companies, 1);
        assert_eq!(view.headline.total_motors, 12);
        assert_eq!(view.headline.monthly_revenue, Decimal::from(500));
        assert!(!view.alerts.has_alerts());
        assert_eq!(view, svc.view_at(&snapshot, at(2024, 3, 20)));
    }

    #[tokio::test]
    async fn test_source_error_propagates() {
        let svc = service(Arc::new(FailingSource));
        let err = svc.load_snapshot().await.unwrap_err();
        assert!(matches!(err, DomainError::Source { entity: "invoices", .. }));
    }

    #[tokio::test]
    async fn test_custom_limits() {
        let svc = service(Arc::new(MemorySource::<Invoice>::default())).with_limits(ViewLimits {
            overview: 0,
            recent: 0,
        });
        let view = svc.refresh().await.unwrap();
        assert!(view.overview.is_empty());
        assert!(!view.no_companies);
    }
}
