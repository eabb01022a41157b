//! Core domain layer. No external I/O dependencies.
//!
//! Entities, metric aggregation and the dashboard view-model live here. Dependencies flow inward.

pub mod dashboard;
pub mod entities;
pub mod errors;
pub mod metrics;
pub mod time;

pub use dashboard::{CompanyCard, DashboardView, RecentJob, Snapshot, ViewLimits};
pub use entities::{
    Company, CompanyStatus, Invoice, InvoiceStatus, Job, JobStatus, Warranty, WarrantyStatus,
};
pub use errors::DomainError;
pub use metrics::{
    Alert, AlertKind, AlertStatus, AlertSummary, AlertWindows, CompanyRollup, HeadlineMetrics,
};
