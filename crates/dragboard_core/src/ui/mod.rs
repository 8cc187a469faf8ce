//! View components and the host render-surface seam.
//!
//! # Responsibility
//! - Define the capability contract every concrete view implements.
//! - Keep all host-platform primitives (templating, text/class mutation,
//!   alerts) behind the `RenderSurface` trait.
//!
//! # Invariants
//! - Components are composed by explicit construction and shared handles;
//!   no view reaches for global state.
//! - Drop-highlight state lives only behind the surface, never in a
//!   component field or the store.

pub mod component;
pub mod project_input;
pub mod project_item;
pub mod project_list;
pub mod surface;
