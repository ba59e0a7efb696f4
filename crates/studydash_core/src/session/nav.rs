//! Transient navigation selector.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Progress,
    Analytics,
    Assignments,
    Tasks,
    Syllabus,
    Settings,
}

impl View {
    pub const ALL: [View; 7] = [
        Self::Dashboard,
        Self::Progress,
        Self::Analytics,
        Self::Assignments,
        Self::Tasks,
        Self::Syllabus,
        Self::Settings,
    ];

    /// Header title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Progress => "Progress",
            Self::Analytics => "Analytics",
            Self::Assignments => "Assignments",
            Self::Tasks => "Tasks",
            Self::Syllabus => "Syllabus",
            Self::Settings => "Settings",
        }
    }

    /// Navigation menu label.
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Progress => "My Progress",
            other => other.title(),
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl Display for UnknownView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown view `{}`", self.0)
    }
}

impl std::error::Error for UnknownView {}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        View::ALL
            .into_iter()
            .find(|view| {
                view.title().to_ascii_lowercase() == normalized
                    || view.nav_label().to_ascii_lowercase() == normalized
            })
            .ok_or_else(|| UnknownView(value.to_string()))
    }
}

/// Currently selected view. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn select(&mut self, view: View) {
        self.current = view;
    }
}
