/// One counter on the overview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
    pub icon: &'static str,
    pub accent: &'static str,
}

// Placeholder figures: these are not read from the backend.
pub const OVERVIEW_STATS: [Stat; 4] = [
    Stat {
        label: "Departments",
        value: 12,
        icon: "🏢",
        accent: "#4b6cb7",
    },
    Stat {
        label: "Users",
        value: 48,
        icon: "👥",
        accent: "#2ecc71",
    },
    Stat {
        label: "Active Today",
        value: 8,
        icon: "📊",
        accent: "#e74c3c",
    },
    Stat {
        label: "Total Requests",
        value: 156,
        icon: "🔄",
        accent: "#f39c12",
    },
];
