//! Domain model for board projects.
//!
//! # Responsibility
//! - Define the canonical project record shared by store, services and views.
//! - Keep one identity and lifecycle shape for both board columns.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Column membership is derived from the `status` tag, never stored twice.

pub mod project;
