//! Board state store and listener fan-out.
//!
//! # Responsibility
//! - Own the ordered project sequence for the process lifetime.
//! - Notify registered listeners synchronously after every mutation.
//!
//! # Invariants
//! - Listeners always receive a defensive snapshot, never the owned sequence.
//! - Notification order is listener registration order.

pub mod board_store;
