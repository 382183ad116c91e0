//! egui rendering. Widgets read from [`AppState`](crate::state::AppState)
//! and call its methods for every change; no aggregation happens here.

pub mod metrics;
pub mod panels;
pub mod plot;
pub mod tables;
