//! motor-desk: workshop dashboard for companies, jobs, invoices and warranties,
//! with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
