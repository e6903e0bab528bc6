/// State management module
///
/// This module handles all picker state, including:
/// - Catalog entries (data.rs)
/// - Catalog loading (catalog.rs)
/// - The random source behind picks (random.rs)
/// - Selection state and pick cycles (picker.rs)
/// - The delayed continuation of a pick (schedule.rs)

pub mod catalog;
pub mod data;
pub mod picker;
pub mod random;
pub mod schedule;
