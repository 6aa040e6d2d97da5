//! Terminal showcase.
//!
//! A vertically scrollable story of panels: scrolling drives the progress
//! mapper, panel visibility drives gates, gates trigger typing and
//! stagger reveals, and the motion preference short-circuits everything
//! to its final frame.

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
