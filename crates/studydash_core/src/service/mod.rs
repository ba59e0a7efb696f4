//! Use-case services over the persisted collections.
//!
//! # Responsibility
//! - Turn user actions (add, toggle, set status, delete) into whole-collection
//!   writes through the store.
//! - Keep front ends unaware of slot keys and seed defaults.
//!
//! # Invariants
//! - Invalid input is a no-op, reported as `None`/`false`, never an error.
//! - A mutation naming an unknown id writes nothing.
//! - Untouched records keep their field values and relative order.

pub mod assignment_service;
pub mod dashboard_service;
pub mod syllabus_service;
pub mod task_service;
