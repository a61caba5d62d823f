use crate::Notice;

/// The views selectable from the dashboard's tab bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    CreateDepartment,
    FindDepartment,
    CreateUser,
    FindUser,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Self::Overview,
        Self::CreateDepartment,
        Self::FindDepartment,
        Self::CreateUser,
        Self::FindUser,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Dashboard",
            Tab::CreateDepartment => "Create Department",
            Tab::FindDepartment => "Find Department",
            Tab::CreateUser => "Create User",
            Tab::FindUser => "Find User",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Overview => "🏠",
            Tab::CreateDepartment => "➕",
            Tab::FindDepartment => "🔍",
            Tab::CreateUser => "👤",
            Tab::FindUser => "🔎",
        }
    }

    /// The notice shown when this tab becomes active.
    pub fn switched_notice(self) -> Notice {
        Notice::info(format!("Switched to {}", self.label()))
    }
}
