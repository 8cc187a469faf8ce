//! Drag-and-drop handshake contracts.
//!
//! # Responsibility
//! - Define the transferred-payload container exchanged between a drag
//!   source and a drop target.
//! - Track the transient per-gesture phase.
//!
//! # Invariants
//! - One `DragTransfer` instance lives for exactly one gesture.
//! - Gesture phase is transient UI state; nothing here touches the store.

pub mod gesture;
pub mod transfer;
