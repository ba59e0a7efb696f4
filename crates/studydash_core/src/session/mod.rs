//! Process-wide presentation state: theme preference and current view.
//!
//! The theme is persisted through the collection store; the current view is
//! transient and starts at the dashboard on every launch.

pub mod nav;
pub mod theme;

pub use nav::{Navigator, UnknownView, View};
pub use theme::{ThemePreference, THEME};
