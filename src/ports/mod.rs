//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by UI/adapter into the application
//! - Outbound: Called by application into the data layer

pub mod inbound;
pub mod outbound;

pub use inbound::{DashboardActions, InputPort};
pub use outbound::{CompanySource, EntitySource, InvoiceSource, JobSource, WarrantySource};
