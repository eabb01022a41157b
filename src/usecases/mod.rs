//! Application use cases. Orchestrate domain logic via ports.

pub mod dashboard_service;
pub mod profile_menu;

pub use dashboard_service::DashboardService;
pub use profile_menu::{MenuAction, MenuState, ProfileMenu, QuickAction};
