//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and store mutation into use-case level APIs.
//! - Keep view components decoupled from rule construction details.

pub mod board_service;
