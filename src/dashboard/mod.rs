//! Dashboard composition
//!
//! Ties the pieces together: an immutable state snapshot with a pure
//! reducer (`state`), async fetch tasks that turn API results into events
//! (`tasks`), and the terminal renderers (`render`).

pub mod render;
pub mod state;
pub mod tasks;

pub use render::{render_cards, render_history, render_table, sparkline};
pub use state::{
    reduce, DashboardEvent, DashboardState, Region, COUNTRY_MAP_ZOOM, DEFAULT_MAP_CENTER,
    DEFAULT_MAP_ZOOM,
};
pub use tasks::{load_initial, select_region};
