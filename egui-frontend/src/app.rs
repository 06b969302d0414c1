//! # App Module
//!
//! Entry-point re-export for the planner application. The actual state and
//! rendering live under [`crate::ui`].

pub use crate::ui::app_state::PlannerApp;
