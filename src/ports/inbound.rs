//! Inbound ports. UI (adapter) calls into the application, and the
//! application hands user intents back out through [`DashboardActions`].

use crate::domain::DomainError;

/// Input port: UI/CLI drives the dashboard.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Load data, render the dashboard and serve the action menus until sign-out.
    async fn run(&self) -> Result<(), DomainError>;
}

/// User intents raised by the dashboard and the profile menu.
///
/// Zero-argument triggers; what they do (open a form, end the session) is up
/// to the implementor.
pub trait DashboardActions {
    fn on_create_company(&mut self);
    fn on_create_job(&mut self);
    fn on_create_motor(&mut self);
    fn on_view_profile(&mut self);
    fn on_system_settings(&mut self);
    fn on_security(&mut self);
    fn on_help(&mut self);
    fn on_sign_out(&mut self);
}
