//! Outbound ports. Application calls into the data layer.
//!
//! Implemented by adapters. Read-only: nothing here creates or mutates entities.

use crate::domain::{Company, DomainError, Invoice, Job, Warranty};

/// Read-only access to one entity collection.
///
/// Returns everything already loaded; no paging, retries or filtering. Loading
/// and error states belong to the implementor.
#[async_trait::async_trait]
pub trait EntitySource<T>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, DomainError>;
}

pub type CompanySource = dyn EntitySource<Company>;
pub type JobSource = dyn EntitySource<Job>;
pub type InvoiceSource = dyn EntitySource<Invoice>;
pub type WarrantySource = dyn EntitySource<Warranty>;
