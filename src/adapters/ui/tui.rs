//! Implements InputPort and DashboardActions. Inquire-based interactive prompts.
//!
//! Main loop: render the dashboard, then offer quick actions, the profile
//! menu, refresh and quit. Create intents are reported, not performed; the
//! data store owns entity lifecycles.

use crate::adapters::ui::{progress, render};
use crate::domain::DomainError;
use crate::ports::{DashboardActions, InputPort};
use crate::usecases::{DashboardService, MenuAction, ProfileMenu, QuickAction};
use async_trait::async_trait;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::Select;
use std::fmt;
use std::io::stdout;
use std::sync::Arc;
use tracing::info;

/// Applies the workshop theme to all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightBlue))
        .with_highlighted_option_prefix(Styled::new("▸").with_fg(Color::LightBlue));
    inquire::set_global_render_config(config);
}

/// Entries of the top-level prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    Quick(QuickAction),
    Profile,
    Refresh,
    Quit,
}

impl fmt::Display for MainChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MainChoice::Quick(action) => write!(f, "{}", action),
            MainChoice::Profile => f.write_str("Account..."),
            MainChoice::Refresh => f.write_str("Refresh dashboard"),
            MainChoice::Quit => f.write_str("Quit"),
        }
    }
}

fn main_choices() -> Vec<MainChoice> {
    let mut choices: Vec<MainChoice> = QuickAction::ALL.into_iter().map(MainChoice::Quick).collect();
    choices.extend([MainChoice::Profile, MainChoice::Refresh, MainChoice::Quit]);
    choices
}

/// Terminal handlers for user intents. Sign-out ends the session loop.
#[derive(Debug, Default)]
pub struct TuiActions {
    signed_out: bool,
}

impl TuiActions {
    pub fn signed_out(&self) -> bool {
        self.signed_out
    }

    fn notice(&self, intent: &str) {
        info!(intent, "dashboard action");
        println!("→ {}: hand-off to the workshop data store is outside this dashboard.", intent);
    }
}

impl DashboardActions for TuiActions {
    fn on_create_company(&mut self) {
        self.notice("Add company");
    }

    fn on_create_job(&mut self) {
        self.notice("Create job");
    }

    fn on_create_motor(&mut self) {
        self.notice("Add motor");
    }

    fn on_view_profile(&mut self) {
        self.notice("Profile settings");
    }

    fn on_system_settings(&mut self) {
        self.notice("System settings");
    }

    fn on_security(&mut self) {
        self.notice("Security");
    }

    fn on_help(&mut self) {
        self.notice("Help & support");
    }

    fn on_sign_out(&mut self) {
        info!("sign out requested");
        println!("Signed out.");
        self.signed_out = true;
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<DashboardService>,
    current_user: String,
}

impl TuiInputPort {
    pub fn new(service: Arc<DashboardService>, current_user: impl Into<String>) -> Self {
        Self {
            service,
            current_user: current_user.into(),
        }
    }

    async fn show_dashboard(&self) -> Result<(), DomainError> {
        let spinner = progress::loading_spinner("Loading workshop data...");
        let view = self.service.refresh().await;
        spinner.finish_and_clear();
        let view = view?;
        render::render_dashboard(&mut stdout(), &view, &self.current_user)
            .map_err(|e| DomainError::Ui(e.to_string()))
    }

    /// Open the profile menu and handle one interaction. Escape counts as a
    /// click outside the menu.
    fn profile_menu(&self, menu: &mut ProfileMenu, actions: &mut TuiActions) -> Result<(), DomainError> {
        menu.open();
        let title = format!("{} (Workshop Admin)", self.current_user);
        match Select::new(&title, MenuAction::ALL.to_vec()).prompt() {
            Ok(action) => {
                menu.select(action, actions);
                Ok(())
            }
            Err(InquireError::OperationCanceled) => {
                menu.outside_click();
                Ok(())
            }
            Err(e) => {
                menu.dismiss();
                Err(DomainError::Ui(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut menu = ProfileMenu::new();
        let mut actions = TuiActions::default();
        self.show_dashboard().await?;

        while !actions.signed_out() {
            let choice = match Select::new("What next?", main_choices()).prompt() {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    MainChoice::Quit
                }
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            };
            match choice {
                MainChoice::Quick(action) => action.dispatch(&mut actions),
                MainChoice::Profile => self.profile_menu(&mut menu, &mut actions)?,
                MainChoice::Refresh => self.show_dashboard().await?,
                MainChoice::Quit => break,
            }
        }
        Ok(())
    }
}
