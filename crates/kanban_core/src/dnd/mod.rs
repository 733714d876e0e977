//! Drag-and-drop interaction core.
//!
//! # Responsibility
//! - Define drag notifications produced by the external pointer sensor.
//! - Compute column/task relocation and reparenting as pure transformations.
//! - Track the lifted entity and commit reorders into the store.
//!
//! # Invariants
//! - Columns reorder only on drop; tasks reorder/reparent live on hover.
//! - Unknown ids and unsupported kind pairings are no-ops, never faults.

pub mod controller;
pub mod event;
pub mod reorder;
