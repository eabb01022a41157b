//! Profile menu controller: Closed <-> Open, with action dispatch through [`DashboardActions`].

use crate::ports::DashboardActions;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Entries of the profile menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    ViewProfile,
    SystemSettings,
    Security,
    Help,
    SignOut,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::ViewProfile,
        MenuAction::SystemSettings,
        MenuAction::Security,
        MenuAction::Help,
        MenuAction::SignOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ViewProfile => "Profile Settings",
            MenuAction::SystemSettings => "System Settings",
            MenuAction::Security => "Security",
            MenuAction::Help => "Help & Support",
            MenuAction::SignOut => "Sign Out",
        }
    }

    pub fn dispatch(self, actions: &mut dyn DashboardActions) {
        match self {
            MenuAction::ViewProfile => actions.on_view_profile(),
            MenuAction::SystemSettings => actions.on_system_settings(),
            MenuAction::Security => actions.on_security(),
            MenuAction::Help => actions.on_help(),
            MenuAction::SignOut => actions.on_sign_out(),
        }
    }
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ephemeral per-instance menu state. Owned by the UI loop; not shared.
#[derive(Debug, Default)]
pub struct ProfileMenu {
    state: MenuState,
}

impl ProfileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn open(&mut self) {
        self.state = MenuState::Open;
    }

    /// Trigger control: flips between Closed and Open.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    pub fn dismiss(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Pointer or tap outside the menu bounds. Never dispatches.
    pub fn outside_click(&mut self) {
        self.dismiss();
    }

    /// Select `action` while the menu is open. The menu is closed as part of
    /// the dispatch, so a repeated selection is ignored rather than running
    /// the handler twice. Returns whether the handler ran.
    pub fn select(&mut self, action: MenuAction, actions: &mut dyn DashboardActions) -> bool {
        if self.state != MenuState::Open {
            return false;
        }
        self.state = MenuState::Closed;
        action.dispatch(actions);
        true
    }
}

/// Dashboard quick actions. Always available; they bypass the profile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    CreateJob,
    AddCompany,
    AddMotor,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [
        QuickAction::CreateJob,
        QuickAction::AddCompany,
        QuickAction::AddMotor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuickAction::CreateJob => "Create Job",
            QuickAction::AddCompany => "Add Company",
            QuickAction::AddMotor => "Add Motor",
        }
    }

    pub fn dispatch(self, actions: &mut dyn DashboardActions) {
        match self {
            QuickAction::CreateJob => actions.on_create_job(),
            QuickAction::AddCompany => actions.on_create_company(),
            QuickAction::AddMotor => actions.on_create_motor(),
        }
    }
}

impl std::fmt::Display for QuickAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
