//! # UI Module
//!
//! Application state and rendering for the planner form:
//!
//! - **app_state**: the central [`PlannerApp`] struct and its actions
//! - **app_implementation**: the `eframe::App` frame loop
//! - **state**: explicit form and UI state objects
//! - **components**: rendering broken out per widget group

pub mod app_implementation;
pub mod app_state;
pub mod components;
pub mod state;
