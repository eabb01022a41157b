//! Domain entities. Read-only snapshots of what the workshop's data store holds.
//!
//! Status fields are closed enums with an `Other` catch-all so unknown values
//! from the store survive a round trip instead of failing the whole load.

use crate::domain::time::lenient;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer company whose motors the workshop services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: CompanyStatus,
    #[serde(default)]
    pub motor_count: u32,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default, with = "lenient")]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompanyStatus {
    Active,
    #[default]
    Inactive,
    Other(String),
}

/// A repair job booked against a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub job_number: String,
    pub company_id: String,
    /// Missing status reads as `Other("")`: neither open nor closed.
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub description: String,
    /// Missing costs count as zero in every sum.
    #[serde(default)]
    pub estimated_cost: Option<Decimal>,
    /// Missing or unreadable due dates never fall inside a due window.
    #[serde(default, with = "lenient")]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default, with = "lenient")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "lenient")]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Delivered,
    Other(String),
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Other(String::new())
    }
}

impl JobStatus {
    /// Pending or in progress.
    pub fn is_open(&self) -> bool {
        matches!(self, JobStatus::Pending | JobStatus::InProgress)
    }

    /// Completed or delivered.
    pub fn is_closed(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Delivered)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub status: InvoiceStatus,
    pub total_amount: Decimal,
    #[serde(default, with = "lenient")]
    pub paid_date: Option<NaiveDateTime>,
    #[serde(default, with = "lenient")]
    pub due_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Paid,
    Overdue,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warranty {
    pub id: String,
    pub status: WarrantyStatus,
    #[serde(default, with = "lenient")]
    pub warranty_end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WarrantyStatus {
    Active,
    Expired,
    Claimed,
    Other(String),
}

impl CompanyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CompanyStatus::Active => "active",
            CompanyStatus::Inactive => "inactive",
            CompanyStatus::Other(s) => s,
        }
    }
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::InProgress => "in_progress",
            JobStatus::Completed => "completed",
            JobStatus::Delivered => "delivered",
            JobStatus::Other(s) => s,
        }
    }
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Other(s) => s,
        }
    }
}

impl WarrantyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            WarrantyStatus::Active => "active",
            WarrantyStatus::Expired => "expired",
            WarrantyStatus::Claimed => "claimed",
            WarrantyStatus::Other(s) => s,
        }
    }
}

impl From<String> for CompanyStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => CompanyStatus::Active,
            "inactive" => CompanyStatus::Inactive,
            _ => CompanyStatus::Other(s),
        }
    }
}

impl From<String> for JobStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => JobStatus::Pending,
            "in_progress" => JobStatus::InProgress,
            "completed" => JobStatus::Completed,
            "delivered" => JobStatus::Delivered,
            _ => JobStatus::Other(s),
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "draft" => InvoiceStatus::Draft,
            "pending" => InvoiceStatus::Pending,
            "paid" => InvoiceStatus::Paid,
            "overdue" => InvoiceStatus::Overdue,
            _ => InvoiceStatus::Other(s),
        }
    }
}

impl From<String> for WarrantyStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => WarrantyStatus::Active,
            "expired" => WarrantyStatus::Expired,
            "claimed" => WarrantyStatus::Claimed,
            _ => WarrantyStatus::Other(s),
        }
    }
}

impl From<CompanyStatus> for String {
    fn from(s: CompanyStatus) -> Self {
        s.as_str().to_string()
    }
}

impl From<JobStatus> for String {
    fn from(s: JobStatus) -> Self {
        s.as_str().to_string()
    }
}

impl From<InvoiceStatus> for String {
    fn from(s: InvoiceStatus) -> Self {
        s.as_str().to_string()
    }
}

impl From<WarrantyStatus> for String {
    fn from(s: WarrantyStatus) -> Self {
        s.as_str().to_string()
    }
}

/// Human label: underscores become spaces ("in_progress" -> "in progress").
impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().replace('_', " "))
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().replace('_', " "))
    }
}
