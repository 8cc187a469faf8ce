//! Core logic for the DragBoard project board.
//! This crate is the single source of truth for board invariants.

pub mod config;
pub mod dnd;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod ui;
pub mod validation;

pub use config::ValidationPolicy;
pub use dnd::gesture::{DragGesture, DragGestureEvent, DragPhase};
pub use dnd::transfer::{DragTransfer, DropEffect, TEXT_PLAIN};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectModelError, ProjectStatus};
pub use service::board_service::{submit_draft, DraftError, DraftField, ProjectDraft};
pub use store::board_store::{BoardStore, ProjectListener, SharedBoardStore};
pub use ui::component::ViewComponent;
pub use ui::project_input::{ProjectInput, INVALID_INPUT_ALERT};
pub use ui::project_item::ProjectItem;
pub use ui::project_list::ProjectList;
pub use ui::surface::{RenderSurface, RowContent, SharedSurface};
pub use validation::{validate, FieldRule, FieldValue};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
