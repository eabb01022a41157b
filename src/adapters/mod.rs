//! Infrastructure adapters. Implement ports.
//!
//! JSON exports, in-memory collections, terminal UI. Map errors to DomainError.

pub mod persistence;
pub mod ui;
